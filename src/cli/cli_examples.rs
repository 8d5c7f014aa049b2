use super::cli_input::get_user_input;
use crate::Examples::engine_examples::{EXAMPLES, engine_examples};
use std::io::{self, Write};

pub fn examples_menu() {
    loop {
        println!("\n=== E-1 Examples ===");
        for (i, name) in EXAMPLES.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        match choice.trim().parse::<usize>() {
            Ok(0) => break,
            Ok(n) if n <= EXAMPLES.len() => {
                if let Err(e) = engine_examples(n - 1) {
                    println!("Error: {}", e);
                }
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
