pub mod log_service;
pub mod reporter;

#[cfg(test)]
#[path = "tests/log_service_tests.rs"]
mod log_service_tests;

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
