//! Go source analysis: parsing, declaration extraction and handler matching.

pub mod declarations;
pub mod parser;
pub mod scanner;
pub mod signature;

pub use scanner::{scan, ParsePolicy, Scanner};
pub use signature::Signature;
