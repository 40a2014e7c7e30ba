//! Loosely typed rows as handed over by an external loader
//!
//! Spreadsheet and CSV readers produce cells that may be text, numbers,
//! booleans or empty. [`RawCell`] accepts any JSON value, and the row types keep every field
//! optional so conversion into typed records happens in one place
//! ([`EntityStore::load`](crate::EntityStore::load)).

use serde::{Deserialize, Serialize};

/// Single loosely typed cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// Text cell
    Text(String),
    /// Integer cell (ids exported as numbers)
    Integer(i64),
    /// Floating point cell (spreadsheet numbers, NaN for blanks)
    Float(f64),
    /// Boolean cell (spreadsheet TRUE/FALSE); never a usable id or name
    Bool(bool),
    /// Anything else a loader hands over (lists, nested objects)
    Other(serde_json::Value),
}

impl RawCell {
    /// Normalize to trimmed text
    ///
    /// Blank, NaN, infinite, boolean and structured cells yield `None`, so a
    /// required field holding one quarantines its row.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) if !f.is_finite() => None,
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some((*f as i64).to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(_) | Self::Other(_) => None,
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Normalize an optional cell
#[inline]
pub(crate) fn cell_text(cell: Option<&RawCell>) -> Option<String> {
    cell.and_then(RawCell::to_text)
}

/// Raw practice row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPractice {
    /// Practice id
    #[serde(default)]
    pub id: Option<RawCell>,
    /// Practice name
    #[serde(default)]
    pub name: Option<RawCell>,
}

/// Raw process row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProcess {
    /// Process id
    #[serde(default)]
    pub id: Option<RawCell>,
    /// Process name
    #[serde(default)]
    pub name: Option<RawCell>,
    /// Owning practice id
    #[serde(default)]
    pub practice_id: Option<RawCell>,
    /// Value stream tag
    #[serde(default)]
    pub value_stream_id: Option<RawCell>,
}

/// Raw artifact row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtifact {
    /// Artifact id
    #[serde(default)]
    pub id: Option<RawCell>,
    /// Artifact name (`artifact_name` in exported workbooks)
    #[serde(default, alias = "artifact_name")]
    pub name: Option<RawCell>,
}

/// Raw interaction row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInteraction {
    /// Carried artifact id
    #[serde(default)]
    pub artifact_id: Option<RawCell>,
    /// Source process id
    #[serde(default)]
    pub source_process_id: Option<RawCell>,
    /// Destination process id
    #[serde(default)]
    pub destination_process_id: Option<RawCell>,
}

/// The four source tables of one load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTables {
    /// Practice rows
    #[serde(default)]
    pub practices: Vec<RawPractice>,
    /// Process rows
    #[serde(default)]
    pub processes: Vec<RawProcess>,
    /// Artifact rows
    #[serde(default)]
    pub artifacts: Vec<RawArtifact>,
    /// Interaction rows
    #[serde(default)]
    pub interactions: Vec<RawInteraction>,
}
