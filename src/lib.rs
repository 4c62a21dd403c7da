pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod scanner;
