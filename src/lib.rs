//! Core logic for a set of small in-memory record keepers, each driven by a
//! line-oriented command protocol read on stdin. The binaries under
//! `src/bin/` are thin front ends over these modules.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub mod dispatch;
pub mod error;
pub mod roster;
pub mod routes;
pub mod warehouse;

/// Installs the global tracing subscriber. Diagnostics go to stderr so the
/// command protocol on stdout stays clean; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
