//! yfstatement: fetch a ticker's income statement from Yahoo Finance and
//! print it as a plain-text table.
//!
//! The library half is a small Yahoo client ([`YfClient`]) exposing the
//! statement through the [`StatementService`] trait; [`report::run`] is the
//! fetch-and-print routine the binary drives.

pub mod core;
pub mod fundamentals;
pub mod report;

pub use crate::core::{
    Frequency, StatementRow, StatementService, StatementTable, YfClient, YfClientBuilder, YfError,
};
pub use report::{NO_DATA_MESSAGE, Outcome, SYMBOL};
