//! Practice legend key
//!
//! Entries run left to right at a fixed step. An entry whose x has passed
//! `max_x` starts a new line instead.

use crate::config::LegendConstants;
use crate::layout_box::{LayoutBox, LegendEntry};
use capmap_model::PracticeId;

/// One legend entry per practice box, in input order
#[must_use]
pub fn legend_entries<'a, I>(practices: I, legend: &LegendConstants) -> Vec<LegendEntry>
where
    I: IntoIterator<Item = &'a LayoutBox>,
{
    let mut x = legend.start_x;
    let mut y = legend.start_y;
    let mut entries = Vec::new();

    for practice in practices {
        if x > legend.max_x {
            x = legend.start_x;
            y += legend.line_height;
        }
        entries.push(LegendEntry {
            practice_id: PracticeId::new(practice.id.as_str()),
            name: practice.name.clone(),
            color: practice.color.clone(),
            x,
            y,
        });
        x += legend.spacing;
    }

    entries
}
