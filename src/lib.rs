pub mod error;
pub mod filters;
pub mod input;
pub mod loader;
pub mod output;
pub mod parser;
pub mod reports;
pub mod session;
