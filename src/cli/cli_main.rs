use super::cli_calculators::calculators_menu;
use super::cli_examples::examples_menu;
use super::cli_input::get_user_input;
use super::cli_task::task_menu;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => examples_menu(),
            "2" => calculators_menu(),
            "3" => task_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text
Yellow (\x1b[33m) - Menu options
Cyan (\x1b[36m) - "Enter your choice:" prompt
Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n LREdesign: design calculators for a small liquid rocket engine \n
    coolant hydraulics, stoichiometry, nozzle performance, wall thickness \n \x1b[0m"
    );
    println!("\x1b[33m1. E-1 engine examples\x1b[0m");
    println!("\x1b[33m2. Custom calculation\x1b[0m");
    println!("\x1b[33m3. Task files\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}
