// Tue Jan 13 2026 - Alex

pub mod pipeline;

pub use pipeline::{ExportOutput, Exporter, NoProgress, Phase, ProgressSink};
