/// calculators with user-entered parameters
pub mod cli_calculators;
pub mod cli_examples;
pub mod cli_input;
/// main interactive menu
pub mod cli_main;
/// solving task files
pub mod cli_task;
pub mod task_help;
