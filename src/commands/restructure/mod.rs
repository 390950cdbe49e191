pub mod cli;
pub mod restructure_cmds;

pub use cli::Cli;

#[cfg(test)]
#[path = "tests/restructure_cmds_tests.rs"]
mod restructure_cmds_tests;
