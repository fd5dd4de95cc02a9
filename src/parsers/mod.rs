pub mod tinkoff;
pub mod traits;

pub mod prelude {
    pub use super::tinkoff::TinkoffCsvParser;
    pub use super::traits::{ParseOutcome, Parser};
}
