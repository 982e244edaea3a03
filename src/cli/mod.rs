//! CLI module for the keyfacet command-line interface.
//!
//! Command handlers load inputs, drive the pipeline and hand results to the
//! output formatters.

mod commands;
mod output;

pub use commands::*;
pub use output::*;
