// Fri Oct 16 2026 - Alex

pub mod display;

pub use display::ErrorDisplay;
