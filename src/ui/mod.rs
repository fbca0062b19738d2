// Fri Oct 16 2026 - Alex

pub mod cli;
pub mod errors;

pub use cli::{Args, Command, CommandHandler};
pub use errors::ErrorDisplay;

use colored::Colorize;

pub fn print_success(message: &str) {
    println!("{} {}", "[+]".green(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "[*]".blue(), message);
}
