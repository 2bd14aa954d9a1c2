// Internal modules
#[macro_use]
pub mod logging;
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
pub mod pipeline;
pub mod tokens;
pub mod transform;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::LexerError;
pub use pipeline::{translate_source, PipelineError, PipelineResult};
pub use transform::TransformError;
