use super::dto::TinkoffRowRaw;
use crate::parsers::traits::{ParseOutcome, Parser};
use csv::ReaderBuilder;
use tracing::debug;

/// Reader for the Tinkoff card statement export.
///
/// The first line is a header and is skipped. Data rows are numbered from 1.
/// Input is raw bytes so a row that is not valid UTF-8 is reported on its
/// own instead of failing the whole file.
pub struct TinkoffCsvParser;

impl Parser for TinkoffCsvParser {
    fn parse(content: &[u8], delimiter: u8) -> ParseOutcome {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let mut outcome = ParseOutcome::default();

        for (position, result) in reader.records().enumerate() {
            let row_index = position + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    outcome.errors.push(format!("Row {}: {}", row_index, e));
                    continue;
                }
            };

            match TinkoffRowRaw::new(row_index, record).validate() {
                Ok(transaction) => outcome.transactions.push(transaction),
                Err(errors) => {
                    debug!(row_index, count = errors.len(), "row rejected");
                    outcome.errors.extend(errors);
                }
            }
        }

        outcome
    }
}
