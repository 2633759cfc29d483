#![doc(test(attr(deny(warnings))))]

//! Backup Core tracks personal backup jobs through per-job JSON metadata
//! records and hands out unique short identifiers for each job.

pub mod cli;
pub mod errors;
pub mod idgen;
pub mod job;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Backup Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
