use LREdesign::Utils::logger::{init_logger, level_from_env};
use LREdesign::cli::cli_main::run_interactive_menu;
use LREdesign::cli::cli_task::solve_task_file;
use std::path::Path;

pub fn main() {
    if let Err(e) = init_logger(level_from_env(), None) {
        eprintln!("{}", e);
    }
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first() {
        // LREdesign task.json [report.json]
        Some(task_file) => {
            let report_file = args.get(1).map(Path::new);
            if let Err(e) = solve_task_file(Path::new(task_file), report_file) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => run_interactive_menu(),
    }
}
