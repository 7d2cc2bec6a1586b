pub mod ast;
pub mod error;
pub mod export;
pub mod parser;
pub mod toml;
pub mod config;

pub use ast::{Document, Value};
pub use error::SigilError;
pub use config::SigilConfig;
