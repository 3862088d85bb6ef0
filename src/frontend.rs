pub mod cli;
pub mod config;
pub mod logger;
pub mod output;
