pub mod go;

pub use go::{scan, ParsePolicy, Scanner, Signature};
