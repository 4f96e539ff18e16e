pub mod cli;
pub mod client;
pub mod error;
pub mod pretty_table;
pub mod types;
