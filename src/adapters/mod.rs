// Adapters layer: concrete status sinks (console, in-memory).

pub mod output;

pub use output::{ConsoleSink, MemorySink};
