//! Generation of the Go handler registry.

pub mod go_writer;
pub mod registry;

pub use go_writer::{generate, render, OUTPUT_FILE};
pub use registry::Registry;
