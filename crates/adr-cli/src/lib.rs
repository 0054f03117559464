//! ADR CLI - the `adr-analyzer` command
//!
//! A thin ingestion and rendering surface over [`adr_analysis`]: reads
//! markdown or text from files or stdin, runs the pipeline, stores the
//! report in memory to assign its identifier, and prints it as text or JSON.

#![warn(unreachable_pub)]

pub mod cli;
pub mod input;
pub mod logging;
pub mod render;

pub use cli::{command, run, Format};
