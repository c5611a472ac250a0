//! Text storage: the line-oriented input format and the fixed five-decimal
//! output format.

mod parser;
mod writer;

pub use parser::parse_sheet;
pub use writer::{format_value, write_results};
