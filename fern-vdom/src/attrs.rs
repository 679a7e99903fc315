use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute bag with a deterministic (insertion) iteration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs {
    map: IndexMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    pub fn set(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.map.insert(k.into(), v.into());
        self
    }

    pub fn get(&self, k: &str) -> Option<&str> {
        self.map.get(k).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// Allow concise attrs creation
impl From<()> for Attrs {
    fn from(_: ()) -> Self {
        Attrs::default()
    }
}
impl From<Vec<(&str, &str)>> for Attrs {
    fn from(v: Vec<(&str, &str)>) -> Self {
        let mut a = Attrs::new();
        for (k, val) in v {
            a.map.insert(k.to_string(), val.to_string());
        }
        a
    }
}
