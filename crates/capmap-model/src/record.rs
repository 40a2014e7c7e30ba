//! Typed entity records

use crate::ids::{ArtifactId, PracticeId, ProcessId, ValueStreamId};
use serde::{Deserialize, Serialize};

/// Top-level capability grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    /// Unique id within the practice table
    pub id: PracticeId,
    /// Display name
    pub name: String,
}

impl Practice {
    /// Create a practice record
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<PracticeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Operational step owned by exactly one practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique id within the process table
    pub id: ProcessId,
    /// Display name
    pub name: String,
    /// Owning practice
    pub practice_id: PracticeId,
    /// Optional value stream tag
    #[serde(default)]
    pub value_stream_id: Option<ValueStreamId>,
}

impl Process {
    /// Create a process record without a value stream
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<ProcessId>,
        name: impl Into<String>,
        practice_id: impl Into<PracticeId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            practice_id: practice_id.into(),
            value_stream_id: None,
        }
    }

    /// Tag with a value stream
    #[inline]
    #[must_use]
    pub fn with_value_stream(mut self, value_stream_id: impl Into<ValueStreamId>) -> Self {
        self.value_stream_id = Some(value_stream_id.into());
        self
    }
}

/// Data or document object exchanged between processes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Unique id within the artifact table
    pub id: ArtifactId,
    /// Display name
    pub name: String,
}

impl Artifact {
    /// Create an artifact record
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ArtifactId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Directed edge: `artifact_id` flows from source to destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Artifact carried
    pub artifact_id: ArtifactId,
    /// Producing process
    pub source_process_id: ProcessId,
    /// Consuming process
    pub destination_process_id: ProcessId,
}

impl Interaction {
    /// Create an interaction record
    #[inline]
    #[must_use]
    pub fn new(
        artifact_id: impl Into<ArtifactId>,
        source_process_id: impl Into<ProcessId>,
        destination_process_id: impl Into<ProcessId>,
    ) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            source_process_id: source_process_id.into(),
            destination_process_id: destination_process_id.into(),
        }
    }
}
