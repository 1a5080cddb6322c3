pub mod config;
pub mod errors;
pub mod input;
pub mod output;
pub mod run;
