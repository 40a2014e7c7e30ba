//! Four-row grid layout
//!
//! Practices on rows 1 and 4, processes on rows 2 and 3, x taken from the
//! item's index. Labels of different lengths may overlap; wrapping is left
//! to the renderer.

use crate::config::GridConstants;
use crate::layout_box::LayoutBox;
use capmap_color::PracticeColors;
use capmap_index::RelationshipIndex;
use capmap_model::EntityStore;
use serde::Serialize;

/// Top and bottom copies of one row pair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridRows {
    /// Source-side row
    pub top: Vec<LayoutBox>,
    /// Destination-side row
    pub bottom: Vec<LayoutBox>,
}

impl GridRows {
    /// Find a top-row box by id
    #[must_use]
    pub fn top_box(&self, id: &str) -> Option<&LayoutBox> {
        self.top.iter().find(|b| b.id == id)
    }

    /// Find a bottom-row box by id
    #[must_use]
    pub fn bottom_box(&self, id: &str) -> Option<&LayoutBox> {
        self.bottom.iter().find(|b| b.id == id)
    }
}

/// Practice boxes for rows 1 and 4, x = `index * practice_spacing`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn practice_rows(
    store: &EntityStore,
    index: &RelationshipIndex,
    colors: &PracticeColors,
    grid: &GridConstants,
) -> GridRows {
    let mut rows = GridRows::default();
    for (i, practice_id) in index.practices().enumerate() {
        let template = LayoutBox {
            id: practice_id.to_string(),
            x: i as f64 * grid.practice_spacing,
            y: grid.practice_y_top,
            width: grid.box_width,
            height: grid.practice_box_height,
            draw_height: grid.practice_box_height,
            color: colors.get_or_neutral(practice_id.as_str()),
            name: store
                .practice(practice_id.as_str())
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            practice_id: None,
        };
        rows.bottom.push(LayoutBox {
            y: grid.practice_y_bottom,
            ..template.clone()
        });
        rows.top.push(template);
    }
    rows
}

/// Process boxes for rows 2 and 3
///
/// x restarts at zero for every practice: `index_within_practice * process_spacing`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn process_rows(index: &RelationshipIndex, colors: &PracticeColors, grid: &GridConstants) -> GridRows {
    let mut rows = GridRows::default();
    for (practice_id, processes) in index.practice_to_processes() {
        let color = colors.get_or_neutral(practice_id.as_str());
        for (i, process) in processes.iter().enumerate() {
            let template = LayoutBox {
                id: process.id.to_string(),
                x: i as f64 * grid.process_spacing,
                y: grid.process_y_top,
                width: grid.box_width,
                height: grid.process_box_height,
                draw_height: grid.process_box_height,
                color: color.clone(),
                name: process.name.clone(),
                practice_id: Some(practice_id.clone()),
            };
            rows.bottom.push(LayoutBox {
                y: grid.process_y_bottom,
                ..template.clone()
            });
            rows.top.push(template);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use capmap_color::{Color, ColorAssigner, PaletteAssigner};
    use capmap_model::{Practice, Process};
    use pretty_assertions::assert_eq;

    fn fixture() -> (EntityStore, RelationshipIndex, PracticeColors) {
        let store = EntityStore::new(
            vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
            vec![
                Process::new("A", "Budget", "P1"),
                Process::new("B", "Forecast", "P1"),
                Process::new("C", "Deliver", "P2"),
            ],
            vec![],
            vec![],
        )
        .unwrap();
        let (index, _) = RelationshipIndex::build(&store);
        let colors = PaletteAssigner::new().assign(index.practices()).unwrap();
        (store, index, colors)
    }

    #[test]
    fn practices_step_by_spacing_on_rows_one_and_four() {
        let (store, index, colors) = fixture();
        let rows = practice_rows(&store, &index, &colors, &GridConstants::default());

        let top: Vec<(&str, f64, f64)> = rows.top.iter().map(|b| (b.id.as_str(), b.x, b.y)).collect();
        assert_eq!(top, vec![("P1", 0.0, 100.0), ("P2", 300.0, 100.0)]);
        let bottom: Vec<f64> = rows.bottom.iter().map(|b| b.y).collect();
        assert_eq!(bottom, vec![700.0, 700.0]);

        let p2 = rows.top_box("P2").unwrap();
        assert_eq!(p2.name, "Build");
        assert_eq!((p2.width, p2.height), (200.0, 90.0));
        assert_eq!(p2.color.as_str(), "#39FF14");
        assert_eq!(p2.practice_id, None);
    }

    #[test]
    fn process_x_restarts_per_practice() {
        let (_, index, colors) = fixture();
        let rows = process_rows(&index, &colors, &GridConstants::default());

        let top: Vec<(&str, f64)> = rows.top.iter().map(|b| (b.id.as_str(), b.x)).collect();
        assert_eq!(top, vec![("A", 0.0), ("B", 200.0), ("C", 0.0)]);

        let c = rows.bottom_box("C").unwrap();
        assert_eq!(c.y, 500.0);
        assert_eq!(c.height, 185.0);
        assert_eq!(c.practice_id.as_ref().map(|p| p.as_str()), Some("P2"));
        assert_eq!(c.color, colors.get_or_neutral("P2"));
    }

    #[test]
    fn missing_color_falls_back_to_neutral() {
        let (store, index, _) = fixture();
        let rows = practice_rows(&store, &index, &PracticeColors::new(), &GridConstants::default());
        assert!(rows.top.iter().all(|b| b.color == Color::neutral()));
    }

    #[test]
    fn empty_index_gives_empty_rows() {
        let store = EntityStore::default();
        let (index, _) = RelationshipIndex::build(&store);
        let colors = PracticeColors::new();
        assert_eq!(practice_rows(&store, &index, &colors, &GridConstants::default()), GridRows::default());
        assert_eq!(process_rows(&index, &colors, &GridConstants::default()), GridRows::default());
    }
}
