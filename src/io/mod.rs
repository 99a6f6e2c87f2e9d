//! Streaming input: line reassembly and record scanning

pub mod line_reader;
pub mod scanner;

pub use line_reader::{DxfLineReader, READ_CHUNK_SIZE};
pub use scanner::StreamScanner;
