// tests/integration/main.rs

#[path = "../common/mod.rs"]
mod common;

mod cli_commands;
mod error_handling;
