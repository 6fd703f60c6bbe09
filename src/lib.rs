pub mod actions;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod flows;
pub mod log;
pub mod prompt;
pub mod provider;
pub mod studio;
pub mod ux;
pub mod wire;
