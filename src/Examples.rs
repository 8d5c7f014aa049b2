/// E-1 engine calculations with the built-in design data
pub mod engine_examples;
