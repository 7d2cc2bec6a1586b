mod compound;
mod document;
mod value;

pub use compound::{parse_array, parse_struct};
pub use document::parse_document;
pub use value::resolve_scalar;
