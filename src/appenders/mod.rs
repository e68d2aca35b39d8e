//! Sink implementations

pub mod capture;
pub mod console;
pub mod file;
pub mod memory;

pub use capture::CaptureAppender;
pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use memory::MemoryAppender;

// Re-export the trait for convenience
pub use crate::core::Sink;
