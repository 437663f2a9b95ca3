//! Shared helpers for integration tests.

#![allow(dead_code)]

use cardczar::deck::PlaySet;
use cardczar::{Card, CardPool, PoolSnapshot};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Check both partition invariants against the pool's masters.
///
/// Returns a description of the first violation.
pub fn check_partitions<B: Card, W: Card>(pool: &CardPool<B, W>) -> Result<(), String> {
    let snap: PoolSnapshot<B, W> = pool.snapshot();

    let master_black: PlaySet<B> = pool.master_black().iter().cloned().collect();
    let master_white: PlaySet<W> = pool.master_white().iter().cloned().collect();

    if snap.all_black() != master_black {
        return Err(format!("black union differs from master: {:?}", snap));
    }
    if snap.black_count() != master_black.len() {
        return Err(format!("black states overlap: {:?}", snap));
    }
    if snap.all_white() != master_white {
        return Err(format!("white union differs from master: {:?}", snap));
    }
    if snap.white_count() != master_white.len() {
        return Err(format!("white states overlap: {:?}", snap));
    }
    Ok(())
}
