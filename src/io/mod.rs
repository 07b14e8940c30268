mod format;
mod output;
mod sink;

pub use format::DocumentFormat;
pub use output::{OutputDestination, OutputOptions, emit, emit_to, serialize_value};
pub use sink::{OutputSink, WriterSink};
