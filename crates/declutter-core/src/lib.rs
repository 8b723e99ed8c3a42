/// Declutter Core — folder sorting, empty-folder pruning and the divisor
/// self-check engine.
///
/// This crate holds all behaviour; the `declutter` binary only wires up
/// logging and configuration and calls in here.
///
/// # Modules
///
/// - [`model`] — File categories and listed file entries.
/// - [`sorter`] — Concurrent listing, concurrent moves and the prune pass.
/// - [`factor`] — Linear and worker-pool divisor computation with self-check.
/// - [`config`] — JSON configuration with compiled-in defaults.
/// - [`workers`] — Bounded rayon pools shared by both engines.
/// - [`error`] — The crate error type.
pub mod config;
pub mod error;
pub mod factor;
pub mod model;
pub mod sorter;
pub mod workers;

pub use error::{DeclutterError, Result};
