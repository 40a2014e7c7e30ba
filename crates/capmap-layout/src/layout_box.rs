//! Render-ready boxes

use capmap_color::Color;
use capmap_model::{PracticeId, ValueStreamId};
use serde::Serialize;

/// Positioned, colored, labeled rectangle for one entity
///
/// Produced fresh by every layout call and never mutated afterwards;
/// re-positioning (see [`centered`](crate::centered)) yields new boxes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutBox {
    /// Practice or process id
    pub id: String,
    /// Horizontal anchor
    pub x: f64,
    /// Vertical anchor (bottom edge)
    pub y: f64,
    /// Box width
    pub width: f64,
    /// Box height in layout units
    pub height: f64,
    /// Height in the coordinate space the box is drawn in
    pub draw_height: f64,
    /// Fill color
    pub color: Color,
    /// Label
    pub name: String,
    /// Owning practice, set on process boxes
    pub practice_id: Option<PracticeId>,
}

impl LayoutBox {
    /// Copy of this box moved to `(x, y)` with a new draw height
    #[must_use]
    pub fn placed_at(&self, x: f64, y: f64, draw_height: f64) -> Self {
        Self {
            x,
            y,
            draw_height,
            ..self.clone()
        }
    }
}

/// Process box placed in a value-stream column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamBox {
    /// Stream the process belongs to
    pub value_stream_id: ValueStreamId,
    /// Column index within the stream band
    pub column: usize,
    /// Row index within the stream band
    pub row: usize,
    /// The placed box
    #[serde(flatten)]
    pub layout: LayoutBox,
}

/// Practice label placed in the legend key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Practice id
    pub practice_id: PracticeId,
    /// Label text
    pub name: String,
    /// Text color
    pub color: Color,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}
