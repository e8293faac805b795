pub mod parser_error;
pub mod parser_kernel;
pub mod parser_statement;

pub use parser_error::ParseError;
pub use parser_kernel::{Parser, parse};
