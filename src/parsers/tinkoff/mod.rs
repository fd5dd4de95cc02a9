mod dto;
mod parser;
mod types;

pub use parser::TinkoffCsvParser;
pub use types::{TinkoffAmount, TinkoffDate, TinkoffDateTime, TinkoffMcc};
