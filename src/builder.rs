use std::fs;

use crate::{
    errors::{StatementError, StatementResult},
    parsers::prelude::*,
    types::Transaction,
};
use tracing::info;

pub const DEFAULT_DELIMITER: u8 = b';';

pub struct StatementBuilder {
    content: Option<Vec<u8>>,
    filepath: Option<String>,
    delimiter: u8,
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self {
            content: None,
            filepath: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.as_bytes().to_vec());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads and validates every row. Row errors are returned inside the
    /// outcome, not as `Err`.
    pub fn parse(self) -> StatementResult<ParseOutcome> {
        let content = self
            .content
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .ok_or(StatementError::MissingContentAndFilepath)
                    .and_then(|path| fs::read(path).map_err(Into::into))
            })?;

        let outcome = TinkoffCsvParser::parse(&content, self.delimiter);
        info!(
            transactions = outcome.transactions.len(),
            errors = outcome.errors.len(),
            "statement parsed"
        );
        Ok(outcome)
    }

    /// Like [`parse`](Self::parse), but any row error rejects the whole import.
    pub fn load(self) -> StatementResult<Vec<Transaction>> {
        let outcome = self.parse()?;
        if outcome.is_valid() {
            Ok(outcome.transactions)
        } else {
            Err(StatementError::InvalidRows(outcome.errors))
        }
    }
}
