pub mod generate;
pub mod handler;
