mod loader;
pub mod parser;

pub use loader::{load_questions, LoadError};
pub use parser::{parse, sort_by_number, ParserConfig};
