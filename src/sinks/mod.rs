//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod rotating_file;

pub use console::StdoutSink;
pub use file::FileSink;
pub use memory::{CapturedRecord, MemorySink};
pub use rotating_file::RotatingFileSink;

pub use crate::core::{shared, SharedSink, Sink};
