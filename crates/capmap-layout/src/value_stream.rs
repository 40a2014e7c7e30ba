//! Value-stream column layout
//!
//! Processes are grouped by value stream, bands follow the configured stream
//! order, and each band fills a `min(max_columns, count)`-column grid row by
//! row from the top.
//!
//! Processes whose stream is not in the order list, or that carry no stream,
//! are omitted. That is a policy, not a loss of data: they remain in the
//! store and in every other layout.

use crate::config::ValueStreamConstants;
use crate::layout_box::{LayoutBox, StreamBox};
use capmap_color::PracticeColors;
use capmap_model::{EntityStore, Process, ValueStreamId};
use std::collections::{HashMap, HashSet};

/// Place every process of a listed stream
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_value_streams(
    store: &EntityStore,
    colors: &PracticeColors,
    constants: &ValueStreamConstants,
) -> Vec<StreamBox> {
    let mut by_stream: HashMap<&ValueStreamId, Vec<&Process>> = HashMap::new();
    let mut unstreamed = 0usize;
    for process in store.processes() {
        match &process.value_stream_id {
            Some(vs) => by_stream.entry(vs).or_default().push(process),
            None => unstreamed += 1,
        }
    }

    let mut seen = HashSet::new();
    let mut positions = Vec::new();

    for (stream_index, stream_id) in constants.order.iter().enumerate() {
        if !seen.insert(stream_id) {
            tracing::debug!("Value stream {stream_id} listed twice; keeping first band");
            continue;
        }
        let Some(members) = by_stream.remove(stream_id) else {
            continue;
        };

        let num_columns = constants.max_columns.max(1).min(members.len());
        let x_base = constants.band_width * (stream_index + 1) as f64;

        for (i, process) in members.into_iter().enumerate() {
            let column = i % num_columns;
            let row = i / num_columns;
            positions.push(StreamBox {
                value_stream_id: stream_id.clone(),
                column,
                row,
                layout: LayoutBox {
                    id: process.id.to_string(),
                    x: x_base + column as f64 * constants.column_spacing,
                    y: constants.top_y - row as f64 * constants.row_height,
                    width: constants.box_width,
                    height: constants.draw_height,
                    draw_height: constants.draw_height,
                    color: colors.get_or_neutral(process.practice_id.as_str()),
                    name: process.name.clone(),
                    practice_id: Some(process.practice_id.clone()),
                },
            });
        }
    }

    let unlisted: usize = by_stream.values().map(Vec::len).sum();
    if unlisted > 0 || unstreamed > 0 {
        tracing::debug!(
            unlisted,
            unstreamed,
            "Processes outside the value-stream order were not laid out"
        );
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use capmap_model::{Practice, PracticeId};
    use std::collections::HashSet;

    fn store(processes: Vec<Process>) -> EntityStore {
        EntityStore::new(vec![Practice::new("P1", "Plan")], processes, vec![], vec![]).unwrap()
    }

    fn constants(order: &[&str], max_columns: usize) -> ValueStreamConstants {
        ValueStreamConstants {
            order: order.iter().copied().map(ValueStreamId::new).collect(),
            max_columns,
            ..ValueStreamConstants::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_column_streams_stack_rows() {
        let s = store(vec![
            Process::new("A", "a", "P1").with_value_stream("VS1"),
            Process::new("D", "d", "P1").with_value_stream("VS2"),
            Process::new("B", "b", "P1").with_value_stream("VS1"),
            Process::new("C", "c", "P1").with_value_stream("VS1"),
        ]);
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants(&["VS1", "VS2"], 1));

        let vs1: Vec<&StreamBox> = placed.iter().filter(|b| b.value_stream_id.as_str() == "VS1").collect();
        assert_eq!(vs1.len(), 3);
        assert!(vs1.iter().all(|b| close(b.layout.x, 0.15) && b.column == 0));
        let rows: HashSet<usize> = vs1.iter().map(|b| b.row).collect();
        assert_eq!(rows.len(), 3);
        assert!(close(vs1[0].layout.y, 0.95));
        assert!(close(vs1[2].layout.y, 0.15));

        let vs2: Vec<&StreamBox> = placed.iter().filter(|b| b.value_stream_id.as_str() == "VS2").collect();
        assert_eq!(vs2.len(), 1);
        assert_eq!(vs2[0].row, 0);
        assert!(close(vs2[0].layout.x, 0.30));
        assert!(close(vs2[0].layout.y, 0.95));

        let spots: HashSet<(u64, u64)> = placed
            .iter()
            .map(|b| (b.layout.x.to_bits(), b.layout.y.to_bits()))
            .collect();
        assert_eq!(spots.len(), placed.len());
    }

    #[test]
    fn columns_fill_before_rows() {
        let s = store(
            (0..5)
                .map(|i| Process::new(format!("S{i}"), "s", "P1").with_value_stream("VS1"))
                .collect(),
        );
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants(&["VS1"], 2));

        let grid: Vec<(usize, usize)> = placed.iter().map(|b| (b.column, b.row)).collect();
        assert_eq!(grid, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(close(placed[1].layout.x, 0.35));
    }

    #[test]
    fn fewer_items_than_columns() {
        let s = store(vec![Process::new("A", "a", "P1").with_value_stream("VS1")]);
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants(&["VS1"], 4));
        assert_eq!(placed.len(), 1);
        assert_eq!((placed[0].column, placed[0].row), (0, 0));
    }

    #[test]
    fn unlisted_and_unstreamed_processes_are_omitted() {
        let s = store(vec![
            Process::new("A", "a", "P1").with_value_stream("VS9"),
            Process::new("B", "b", "P1"),
            Process::new("C", "c", "P1").with_value_stream("VS1"),
        ]);
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants(&["VS1"], 1));
        let ids: Vec<&str> = placed.iter().map(|b| b.layout.id.as_str()).collect();
        assert_eq!(ids, vec!["C"]);
        assert_eq!(placed[0].layout.practice_id, Some(PracticeId::new("P1")));
    }

    #[test]
    fn empty_stream_keeps_its_band_slot() {
        let s = store(vec![Process::new("A", "a", "P1").with_value_stream("VS2")]);
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants(&["VS1", "VS2"], 1));
        assert!(close(placed[0].layout.x, 0.30));
    }

    #[test]
    fn zero_columns_does_not_divide_by_zero() {
        let s = store(vec![Process::new("A", "a", "P1").with_value_stream("VS1")]);
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants(&["VS1"], 0));
        assert_eq!(placed.len(), 1);
    }

    #[test]
    fn box_width_is_independent_of_column_step() {
        let s = store(vec![
            Process::new("A", "a", "P1").with_value_stream("VS1"),
            Process::new("B", "b", "P1").with_value_stream("VS1"),
        ]);
        let constants = ValueStreamConstants {
            box_width: 0.05,
            ..constants(&["VS1"], 2)
        };
        let placed = layout_value_streams(&s, &PracticeColors::new(), &constants);

        assert!(placed.iter().all(|b| close(b.layout.width, 0.05)));
        assert!(close(placed[1].layout.x - placed[0].layout.x, 0.2));
    }

    #[test]
    fn no_processes() {
        let placed = layout_value_streams(&store(vec![]), &PracticeColors::new(), &ValueStreamConstants::default());
        assert!(placed.is_empty());
    }
}
