use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::Result,
    source::{Classify, SourceKind},
    trace::Trace,
    trace_namer::TraceNamer,
};

/// Description of the object a batch of traces was built from.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSpec {
    Visualizable {
        #[serde(rename = "type")]
        type_name: String,
    },
    Array {
        values: Value,
    },
    Other {
        #[serde(rename = "type")]
        type_name: String,
    },
}

impl Classify for SourceSpec {
    fn classify(&self) -> SourceKind<'_> {
        match self {
            SourceSpec::Visualizable { type_name } => SourceKind::Visualizable(type_name),
            SourceSpec::Array { values } => values.classify(),
            SourceSpec::Other { type_name } => SourceKind::Unrecognized(type_name),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Batch {
    pub source: SourceSpec,
    #[serde(default)]
    pub traces: Vec<Trace>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Figure {
    pub batches: Vec<Batch>,
}

impl Figure {
    pub fn from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let s = fs::read_to_string(path)?;
        Self::from_str(&s)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Names every batch with one shared namer and returns the traces in
    /// batch order, ready to go into `figure.data`.
    pub fn label(self) -> Result<Vec<Trace>> {
        let mut namer = TraceNamer::new();
        let mut data = Vec::new();
        for (i, mut batch) in self.batches.into_iter().enumerate() {
            debug!(batch = i, source = ?batch.source, "labeling batch");
            namer.set_name(&mut batch.traces, &batch.source)?;
            data.extend(batch.traces);
        }
        Ok(data)
    }
}
