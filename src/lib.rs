//! Display names and legend groups for plotly traces.

pub mod error;
pub mod figure;
mod name_gen;
pub mod source;
pub mod trace;
pub mod trace_namer;

pub use error::{NamerError, Result};
pub use figure::{Batch, Figure, SourceSpec};
pub use source::{short_type_name, Classify, SourceKind, Visualizable};
pub use trace::Trace;
pub use trace_namer::TraceNamer;
