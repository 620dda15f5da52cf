pub mod command;
pub mod menu;
pub mod run;

pub use run::run_app;

use std::io::{self, Write};

use crate::domain::ContactDirectory;
use crate::errors::AppError;

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn prompt(text: &str) -> Result<String, AppError> {
    println!("\n{text}");
    print!("> ");
    io::stdout().flush()?;
    get_input()
}

pub fn confirm_action(action: &str) -> Result<bool, AppError> {
    println!("\nAre you sure you want to {action}? (y/n)");
    print!("> ");
    io::stdout().flush()?;
    Ok(get_input()?.to_lowercase() == "y")
}

// OUTPUT FUNCTIONS

/// Prints every non-empty bucket under its letter, then the total,
/// the listing a phone contact app shows.
pub fn print_directory(directory: &ContactDirectory) {
    for (letter, bucket) in directory.iter() {
        println!("\n{letter}");
        for contact in bucket {
            println!("{contact}");
        }
    }

    println!("\n---> Total: {}", directory.len());
}
