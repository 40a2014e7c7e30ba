//! Layout constants
//!
//! Every constant has a default; a partial TOML/JSON table overrides only
//! what it names.

use crate::error::LayoutError;
use capmap_model::ValueStreamId;
use serde::{Deserialize, Serialize};

/// All layout constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Four-row pixel grid
    pub grid: GridConstants,
    /// Centered rows in normalized space
    pub centered: CenteredRows,
    /// Value-stream columns
    pub value_stream: ValueStreamConstants,
    /// Practice legend key
    pub legend: LegendConstants,
}

impl LayoutConfig {
    /// Check every section
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidConstant`] for the first bad value.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.grid.validate()?;
        self.centered.validate()?;
        self.value_stream.validate()?;
        self.legend.validate()
    }
}

/// Pixel grid for the four-row practice/process diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConstants {
    /// Width of every box
    pub box_width: f64,
    /// Practice box height
    pub practice_box_height: f64,
    /// Process box height
    pub process_box_height: f64,
    /// Row 1
    pub practice_y_top: f64,
    /// Row 2
    pub process_y_top: f64,
    /// Row 3
    pub process_y_bottom: f64,
    /// Row 4
    pub practice_y_bottom: f64,
    /// Horizontal step between practices
    pub practice_spacing: f64,
    /// Horizontal step between processes of one practice
    pub process_spacing: f64,
}

impl Default for GridConstants {
    fn default() -> Self {
        Self {
            box_width: 200.0,
            practice_box_height: 90.0,
            process_box_height: 185.0,
            practice_y_top: 100.0,
            process_y_top: 300.0,
            process_y_bottom: 500.0,
            practice_y_bottom: 700.0,
            practice_spacing: 300.0,
            process_spacing: 200.0,
        }
    }
}

impl GridConstants {
    fn validate(&self) -> Result<(), LayoutError> {
        positive("grid.box_width", self.box_width)?;
        positive("grid.practice_box_height", self.practice_box_height)?;
        positive("grid.process_box_height", self.process_box_height)?;
        finite("grid.practice_spacing", self.practice_spacing)?;
        finite("grid.process_spacing", self.process_spacing)
    }
}

/// Row heights for centered rows in `[0, 1]` space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenteredRows {
    /// Source-side practice row
    pub practice_top: f64,
    /// Source-side process row
    pub process_top: f64,
    /// Destination-side process row
    pub process_bottom: f64,
    /// Destination-side practice row
    pub practice_bottom: f64,
    /// Grid height divisor giving the normalized draw height
    pub height_scale: f64,
}

impl Default for CenteredRows {
    fn default() -> Self {
        Self {
            practice_top: 0.9,
            process_top: 0.65,
            process_bottom: 0.2,
            practice_bottom: 0.05,
            height_scale: 1000.0,
        }
    }
}

impl CenteredRows {
    fn validate(&self) -> Result<(), LayoutError> {
        positive("centered.height_scale", self.height_scale)
    }
}

/// Value-stream column constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueStreamConstants {
    /// Streams in display order; streams not listed are not laid out
    pub order: Vec<ValueStreamId>,
    /// Horizontal offset between stream bands
    pub band_width: f64,
    /// Horizontal step between columns inside a band
    pub column_spacing: f64,
    /// Vertical step between rows
    pub row_height: f64,
    /// Y of row 0
    pub top_y: f64,
    /// Column cap per stream
    pub max_columns: usize,
    /// Width of every stream box; defaults to one column step so boxes tile
    pub box_width: f64,
    /// Draw height of every stream box
    pub draw_height: f64,
}

impl Default for ValueStreamConstants {
    fn default() -> Self {
        let order = [
            "IT4ITVS01", "IT4ITVS02", "IT4ITVS03", "IT4ITVS04", "IT4ITVS05", "IT4ITVS06", "IT4ITVS07", "MOZVS01",
        ];
        Self {
            order: order.into_iter().map(ValueStreamId::new).collect(),
            band_width: 0.15,
            column_spacing: 0.2,
            row_height: 0.4,
            top_y: 0.95,
            max_columns: 1,
            box_width: 0.2,
            draw_height: 0.5,
        }
    }
}

impl ValueStreamConstants {
    fn validate(&self) -> Result<(), LayoutError> {
        if self.max_columns == 0 {
            return Err(LayoutError::InvalidConstant {
                name: "value_stream.max_columns",
                reason: "must be at least 1".to_string(),
            });
        }
        finite("value_stream.band_width", self.band_width)?;
        finite("value_stream.column_spacing", self.column_spacing)?;
        finite("value_stream.row_height", self.row_height)?;
        finite("value_stream.top_y", self.top_y)?;
        positive("value_stream.box_width", self.box_width)
    }
}

/// Legend key constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConstants {
    /// X of the first entry on each line
    pub start_x: f64,
    /// Y of the first line
    pub start_y: f64,
    /// Horizontal step between entries
    pub spacing: f64,
    /// Entries starting past this X wrap to the next line
    pub max_x: f64,
    /// Vertical step between lines
    pub line_height: f64,
}

impl Default for LegendConstants {
    fn default() -> Self {
        Self {
            start_x: 1.0,
            start_y: 0.01,
            spacing: 15.0,
            max_x: 95.0,
            line_height: 0.025,
        }
    }
}

impl LegendConstants {
    fn validate(&self) -> Result<(), LayoutError> {
        positive("legend.spacing", self.spacing)?;
        if self.max_x < self.start_x {
            return Err(LayoutError::InvalidConstant {
                name: "legend.max_x",
                reason: format!("{} is left of start_x {}", self.max_x, self.start_x),
            });
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidConstant {
            name,
            reason: format!("{value} is not finite"),
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), LayoutError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConstant {
            name,
            reason: format!("{value} is not positive"),
        })
    }
}
