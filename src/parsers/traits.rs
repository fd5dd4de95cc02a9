use crate::types::Transaction;

/// Result of reading an export: every valid row plus one message per
/// invalid cell. Callers must not use `transactions` when `errors` is
/// non-empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    pub errors: Vec<String>,
}

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub trait Parser {
    fn parse(content: &[u8], delimiter: u8) -> ParseOutcome;
}
