use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic of the examples section. One tab per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKey {
    Components,
    View,
    Props,
    Signals,
}

impl TopicKey {
    /// Stable key used in the catalog and in the `?topic=` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKey::Components => "components",
            TopicKey::View => "view",
            TopicKey::Props => "props",
            TopicKey::Signals => "signals",
        }
    }

    /// Label shown on the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            TopicKey::Components => "Components",
            TopicKey::View => "View",
            TopicKey::Props => "Props",
            TopicKey::Signals => "Signals",
        }
    }

    /// Inverse of [`TopicKey::as_str`], ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
    }

    /// All topics in menu order.
    pub fn all() -> [TopicKey; 4] {
        [
            TopicKey::Components,
            TopicKey::View,
            TopicKey::Props,
            TopicKey::Signals,
        ]
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
