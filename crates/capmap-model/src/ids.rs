//! Opaque entity identifiers
//!
//! Every table keys its rows by an opaque string. Each table gets its own
//! newtype so a process id can never be looked up in the practice table.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Identifier of a [`Practice`](crate::Practice)
    PracticeId
);
opaque_id!(
    /// Identifier of a [`Process`](crate::Process)
    ProcessId
);
opaque_id!(
    /// Identifier of an [`Artifact`](crate::Artifact)
    ArtifactId
);
opaque_id!(
    /// Identifier of a value stream (grouping tag on processes)
    ValueStreamId
);

/// Directed (source, destination) process pair
///
/// Composite key for artifacts in transit between two processes.
/// Order matters: `(A, B)` and `(B, A)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProcessPair {
    /// Process the artifact leaves
    pub source: ProcessId,
    /// Process the artifact arrives at
    pub destination: ProcessId,
}

impl ProcessPair {
    /// Create a pair
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<ProcessId>, destination: impl Into<ProcessId>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// The same pair with source and destination swapped
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

impl Display for ProcessPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn id_display_and_borrow() {
        let id = PracticeId::new("P1");
        assert_eq!(id.to_string(), "P1");
        assert_eq!(id.as_str(), "P1");

        let mut map = HashMap::new();
        map.insert(id, 1);
        assert_eq!(map.get("P1"), Some(&1));
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = ProcessId::new("A");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A\"");
        let back: ProcessId = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn pair_equality_is_directional() {
        let ab = ProcessPair::new("A", "B");
        let ba = ProcessPair::new("B", "A");
        assert_ne!(ab, ba);
        assert_eq!(ab.reversed(), ba);
        assert_eq!(ab.reversed().reversed(), ab);
    }

    #[test]
    fn pair_as_hash_key() {
        let mut map = HashMap::new();
        map.insert(ProcessPair::new("A", "C"), vec!["X"]);
        map.entry(ProcessPair::new("A", "C")).or_insert_with(Vec::new).push("Y");
        assert_eq!(map.len(), 1);
        assert_eq!(map[&ProcessPair::new("A", "C")], vec!["X", "Y"]);
    }

    #[test]
    fn pair_display() {
        assert_eq!(ProcessPair::new("A", "C").to_string(), "A -> C");
    }
}
