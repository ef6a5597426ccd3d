pub mod generate;
pub mod init;
pub mod list;

pub use generate::{process_functions, GenerateConfig, GenerateOutcome};
pub use list::{list_functions, ListConfig};
