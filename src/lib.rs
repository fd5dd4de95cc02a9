//! Find recurrent payments (subscriptions, memberships, regular bills) in a
//! Tinkoff card statement export.
//!
//! ```rust,ignore
//! use recurrent_payments::{AnalysisOptions, StatementBuilder, find_recurrent_payments};
//!
//! let transactions = StatementBuilder::new()
//!     .filename("operations.csv")
//!     .load()?;
//! let payments = find_recurrent_payments(&transactions, &AnalysisOptions::default(), today);
//! ```

mod builder;
mod types;

pub mod analysis;
pub mod config;
pub mod errors;
pub mod parsers;
pub mod report;

pub use analysis::{analyze_for_recurrent_payments, filter_transactions, find_recurrent_payments};
pub use builder::{DEFAULT_DELIMITER, StatementBuilder};
pub use config::AnalysisOptions;
pub use parsers::prelude::*;
pub use types::{RecurrentPayment, Transaction};
