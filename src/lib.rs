#[allow(non_snake_case)]
pub mod Combustion;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Hydraulics;
#[allow(non_snake_case)]
pub mod Nozzle;
#[allow(non_snake_case)]
pub mod Structures;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod engine_task;
mod engine_task_tests;
pub mod units;
