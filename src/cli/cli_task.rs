use super::cli_input::{get_user_input, prompt};
use super::task_help::TASK_HELPER;
use crate::Utils::load_from_file::{
    find_task_files, load_task_from_file, save_report_to_file, write_template,
};
use crate::engine_task::TaskError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const TEMPLATE_FILE: &str = "task_template.json";

pub fn task_menu() {
    loop {
        println!("\n=== Task files ===");
        println!("\x1b[33m1. Solve from file\x1b[0m");
        println!("\x1b[33m2. Auto-discover task files\x1b[0m");
        println!("\x1b[33m3. Generate template\x1b[0m");
        println!("\x1b[33m4. Read help\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        let _ = io::stdout().flush();

        let result = match get_user_input().trim() {
            "1" => solve_from_prompt(),
            "2" => auto_solve_tasks(),
            "3" => write_template(Path::new(TEMPLATE_FILE))
                .map(|_| println!("Template generated: {}", TEMPLATE_FILE)),
            "4" => {
                println!("{}", TASK_HELPER);
                println!("\nPress Enter to return to menu...");
                let _ = get_user_input();
                Ok(())
            }
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("Error: {}", e);
        }
    }
}

fn solve_from_prompt() -> Result<(), TaskError> {
    let file_path = prompt("Enter file path: ");
    let path = PathBuf::from(file_path.trim());
    let answer = prompt("Save report as (empty - do not save): ");
    let report_path = answer.trim();
    let report_path = (!report_path.is_empty()).then(|| PathBuf::from(report_path));
    solve_task_file(&path, report_path.as_deref())
}

/// Solves every `task*.json` file in the current directory
fn auto_solve_tasks() -> Result<(), TaskError> {
    let current_dir = std::env::current_dir().map_err(|e| TaskError::Io {
        path: ".".to_string(),
        source: e,
    })?;
    println!("Searching for task files in: {:?}", current_dir);
    let files = find_task_files(&current_dir, "task")?;
    if files.is_empty() {
        println!("No files 'task*.json' found in current directory.");
    }
    for path in files {
        println!("Found task file: {:?}", path);
        if let Err(e) = solve_task_file(&path, None) {
            println!("Error: {}", e);
        }
    }
    Ok(())
}

/// Loads and solves a task, prints the results and optionally saves them as JSON
pub fn solve_task_file(path: &Path, report_path: Option<&Path>) -> Result<(), TaskError> {
    let task = load_task_from_file(path)?;
    let report = task.solve()?;
    report.print_lines();
    report.pretty_print();
    if let Some(report_path) = report_path {
        save_report_to_file(&report, report_path)?;
        println!("Report saved to {:?}", report_path);
    }
    Ok(())
}
