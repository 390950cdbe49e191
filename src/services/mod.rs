pub mod app;
pub mod config;
pub mod discovery;
pub mod fs_utils;
pub mod restructure;
