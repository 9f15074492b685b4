uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use accent_core;
pub use trace_init::init_tracing;
