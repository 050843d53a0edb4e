use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A plotly trace. Only the fields that get labeled are typed, everything
/// else is carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Trace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Self::default()
        }
    }

    /// A missing name and an empty one are both unset.
    pub fn has_name(&self) -> bool {
        matches!(&self.name, Some(name) if !name.is_empty())
    }
}
