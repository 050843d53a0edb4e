use std::collections::HashMap;

/// Hands out `"{prefix} {idx}"` names, counting each prefix separately.
#[derive(Debug, Default)]
pub struct NameGen {
    name_to_count: HashMap<String, usize>,
}

impl NameGen {
    pub fn new() -> Self {
        Self {
            name_to_count: HashMap::new(),
        }
    }

    pub fn next_id(&mut self, prefix: &str) -> usize {
        let count = self.name_to_count.entry(prefix.to_owned()).or_insert(0);
        let id = *count;
        *count += 1;
        id
    }

    pub fn get_fresh_name(&mut self, prefix: &str) -> String {
        let idx = self.next_id(prefix);
        format!("{} {}", prefix, idx)
    }

    /// Number of names handed out so far for `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.name_to_count.get(prefix).copied().unwrap_or(0)
    }
}
