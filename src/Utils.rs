/// reading task files, writing templates and reports
pub mod load_from_file;
/// simplelog setup for the terminal application
pub mod logger;
/// report trait shared by all calculators
pub mod report;
