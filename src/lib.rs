#![doc(test(attr(deny(warnings))))]

//! Zakat Ledger records daily profit per calendar date, derives the zakat
//! obligation and net profit at save time, tracks voluntary sadaka, and keeps
//! the whole record set in a key-value document store. The terminal shell in
//! [`cli`] drives the same [`ledger::Ledger`] the tests exercise.

pub mod chart;
pub mod cli;
pub mod clock;
pub mod config;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod share;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Zakat Ledger tracing initialized.");
    });
}
