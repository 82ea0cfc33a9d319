//! Observability for driftwatch.
//! `tracing` crate with `EnvFilter`, filter read from `DRIFTWATCH_LOG`.

pub mod setup;

pub use setup::init_tracing;
