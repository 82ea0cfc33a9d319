//! # driftwatch-io
//!
//! Boundary adapters: series CSV files in and out, alerts out by email.

pub mod csv_store;
pub mod smtp;

pub use csv_store::{read_series, write_series};
pub use smtp::{SmtpNotifier, SmtpSettings};
