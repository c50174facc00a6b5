pub mod config;
pub mod conv;
pub mod display;
pub mod input;
