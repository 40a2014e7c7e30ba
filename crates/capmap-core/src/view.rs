//! Practice views
//!
//! A practice view is the filtered, re-centered slice of a snapshot for one
//! selection. Four rows share one spacing: sending practices, their
//! processes, the receiving practices' processes and the receiving
//! practices. Edges, process connections and artifact rows only link boxes
//! that were placed.

use crate::snapshot::GraphicsSnapshot;
use capmap_color::Color;
use capmap_filter::{Direction, FilterResult, PracticeEdge, Selection};
use capmap_layout::{center_row, fitted_spacing, LayoutBox};
use capmap_model::ProcessPair;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// Which side of the edges the selection sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewSide {
    /// Selection sends; walk forward
    Source,
    /// Selection receives; walk backward
    Destination,
}

impl ViewSide {
    /// Walk direction for this side
    #[inline]
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Source => Direction::Outgoing,
            Self::Destination => Direction::Incoming,
        }
    }

    /// Title label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Destination => "Destination",
        }
    }
}

impl Display for ViewSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One artifact-table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactFlowRow {
    /// Artifact name, or its id if the artifact is unknown
    pub artifact: String,
    /// Sending process name
    pub source_process: String,
    /// Receiving process name
    pub destination_process: String,
}

impl ArtifactFlowRow {
    /// Create a row
    #[must_use]
    pub fn new(
        artifact: impl Into<String>,
        source_process: impl Into<String>,
        destination_process: impl Into<String>,
    ) -> Self {
        Self {
            artifact: artifact.into(),
            source_process: source_process.into(),
            destination_process: destination_process.into(),
        }
    }
}

/// Artifact link from a placed source process to a placed destination process
///
/// Runs from the source box anchor to the top edge of the destination box,
/// drawn in the destination process color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessConnection {
    /// Sending and receiving process
    pub pair: ProcessPair,
    /// Start point
    pub from: (f64, f64),
    /// End point
    pub to: (f64, f64),
    /// Line color
    pub color: Color,
    /// Names of the artifacts carried, in transit order
    pub artifacts: Vec<String>,
}

/// Render-ready data for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeView {
    /// Side the selection sits on
    pub side: ViewSide,
    /// `"{practice name} - AS - {Source|Destination}"`
    pub title: String,
    /// Horizontal step shared by all four rows
    pub spacing: f64,
    /// Sending practices, centered on the top row
    pub practice_top: Vec<LayoutBox>,
    /// Processes of the sending practices
    pub process_top: Vec<LayoutBox>,
    /// Processes of the receiving practices
    pub process_bottom: Vec<LayoutBox>,
    /// Receiving practices, centered on the bottom row
    pub practice_bottom: Vec<LayoutBox>,
    /// Practice edges with both ends placed
    pub edges: Vec<PracticeEdge>,
    /// Process pairs with both ends placed
    pub connections: Vec<ProcessConnection>,
    /// Artifacts flowing between the placed process rows
    pub artifact_rows: Vec<ArtifactFlowRow>,
    /// Underlying filter walk
    pub filter: FilterResult,
}

impl PracticeView {
    /// Build the view of `selection` from `side`
    #[must_use]
    pub fn build(snapshot: &GraphicsSnapshot, selection: &Selection, side: ViewSide) -> Self {
        let filter = snapshot.graph().walk(selection, side.direction());
        let centered = &snapshot.layout().centered;

        let practice_top = boxes_for(&snapshot.practices().top, &filter.source_practices);
        let process_top = boxes_for(&snapshot.processes().top, &filter.source_processes);
        let process_bottom = boxes_for(&snapshot.processes().bottom, &filter.destination_processes);
        let practice_bottom = boxes_for(&snapshot.practices().bottom, &filter.destination_practices);
        let spacing = fitted_spacing(&[
            practice_top.len(),
            process_top.len(),
            process_bottom.len(),
            practice_bottom.len(),
        ]);
        let place = |row: Vec<&LayoutBox>, y: f64| center_row(row, y, spacing, centered.height_scale);
        let practice_top = place(practice_top, centered.practice_top);
        let process_top = place(process_top, centered.process_top);
        let process_bottom = place(process_bottom, centered.process_bottom);
        let practice_bottom = place(practice_bottom, centered.practice_bottom);

        let placed_top: HashSet<&str> = practice_top.iter().map(|b| b.id.as_str()).collect();
        let placed_bottom: HashSet<&str> = practice_bottom.iter().map(|b| b.id.as_str()).collect();
        let edges = filter
            .relationships
            .iter()
            .filter(|e| placed_top.contains(e.source.as_str()) && placed_bottom.contains(e.destination.as_str()))
            .cloned()
            .collect();

        let (connections, artifact_rows) = process_flows(snapshot, &process_top, &process_bottom);

        let view = Self {
            side,
            title: title(snapshot, selection, &filter, side),
            spacing,
            practice_top,
            process_top,
            process_bottom,
            practice_bottom,
            edges,
            connections,
            artifact_rows,
            filter,
        };
        tracing::debug!(
            title = %view.title,
            edges = view.edges.len(),
            connections = view.connections.len(),
            rows = view.artifact_rows.len(),
            "Practice view built"
        );
        view
    }
}

/// Boxes of `ids`, in `ids` order
fn boxes_for<'a, S: AsRef<str>>(row: &'a [LayoutBox], ids: &[S]) -> Vec<&'a LayoutBox> {
    ids.iter()
        .filter_map(|id| row.iter().find(|b| b.id == id.as_ref()))
        .collect()
}

fn title(snapshot: &GraphicsSnapshot, selection: &Selection, filter: &FilterResult, side: ViewSide) -> String {
    let selected = match side {
        ViewSide::Source => &filter.source_practices,
        ViewSide::Destination => &filter.destination_practices,
    };
    let first = match selection {
        Selection::Practices(ids) => ids.iter().find(|id| selected.contains(*id)),
        Selection::Processes(ids) => ids.iter().find_map(|id| snapshot.graph().owner(id.as_str())),
    };
    let name = first
        .and_then(|id| snapshot.practice_name(id.as_str()))
        .unwrap_or("All practices");
    format!("{name} - AS - {side}")
}

/// Connections and artifact-table rows for every index pair from a placed
/// top process to a placed bottom process, in pair order
fn process_flows(
    snapshot: &GraphicsSnapshot,
    process_top: &[LayoutBox],
    process_bottom: &[LayoutBox],
) -> (Vec<ProcessConnection>, Vec<ArtifactFlowRow>) {
    let mut connections = Vec::new();
    let mut rows = Vec::new();
    for (pair, artifacts) in snapshot.index().pairs() {
        let source = process_top.iter().find(|b| b.id == pair.source.as_str());
        let destination = process_bottom.iter().find(|b| b.id == pair.destination.as_str());
        let (Some(source), Some(destination)) = (source, destination) else {
            continue;
        };

        let names: Vec<String> = artifacts
            .iter()
            .map(|artifact| artifact.name.clone().unwrap_or_else(|| artifact.id.to_string()))
            .collect();
        rows.extend(
            names
                .iter()
                .map(|name| ArtifactFlowRow::new(name.as_str(), source.name.as_str(), destination.name.as_str())),
        );
        connections.push(ProcessConnection {
            pair: pair.clone(),
            from: (source.x, source.y),
            to: (destination.x, destination.y + destination.draw_height),
            color: destination.color.clone(),
            artifacts: names,
        });
    }
    (connections, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CapmapConfig;
    use capmap_test_utils::{three_practice_store, two_practice_store};
    use pretty_assertions::assert_eq;

    fn snapshot(store: &capmap_model::EntityStore) -> GraphicsSnapshot {
        GraphicsSnapshot::build(store, &CapmapConfig::default()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn source_view_of_one_practice() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::practices(["P1"]), ViewSide::Source);

        assert_eq!(view.title, "Plan - AS - Source");
        assert!(close(view.spacing, 1.0 / 3.0));
        assert_eq!(view.practice_top.len(), 1);
        assert_eq!(view.practice_top[0].id, "P1");
        assert!(close(view.practice_top[0].x, 0.5));
        assert!(close(view.practice_top[0].y, 0.9));
        assert!(close(view.practice_top[0].draw_height, 0.09));
        assert_eq!(view.practice_bottom[0].id, "P2");
        assert!(close(view.practice_bottom[0].y, 0.05));
        assert_eq!(view.edges, vec![PracticeEdge::new("P1", "P2")]);
        assert_eq!(view.artifact_rows, vec![ArtifactFlowRow::new("Roadmap", "Budget", "Deliver")]);
    }

    #[test]
    fn process_rows_are_centered_between_practices() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::practices(["P1"]), ViewSide::Source);

        let top: Vec<&str> = view.process_top.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(top, vec!["A", "B"]);
        assert!(close(view.process_top[0].x, 1.0 / 3.0));
        assert!(close(view.process_top[1].x, 2.0 / 3.0));
        assert!(view.process_top.iter().all(|b| close(b.y, 0.65)));
        assert!(close(view.process_top[0].draw_height, 0.185));

        assert_eq!(view.process_bottom.len(), 1);
        assert_eq!(view.process_bottom[0].id, "C");
        assert!(close(view.process_bottom[0].x, 0.5));
        assert!(close(view.process_bottom[0].y, 0.2));
    }

    #[test]
    fn connections_join_placed_processes() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::practices(["P1"]), ViewSide::Source);

        assert_eq!(view.connections.len(), 1);
        let link = &view.connections[0];
        assert_eq!(link.pair, ProcessPair::new("A", "C"));
        assert!(close(link.from.0, 1.0 / 3.0) && close(link.from.1, 0.65));
        assert!(close(link.to.0, 0.5) && close(link.to.1, 0.385));
        assert_eq!(link.color, view.process_bottom[0].color);
        assert_eq!(link.artifacts, vec!["Roadmap"]);
    }

    #[test]
    fn destination_view_of_one_practice() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::practices(["P2"]), ViewSide::Destination);

        assert_eq!(view.title, "Build - AS - Destination");
        assert_eq!(view.practice_top[0].id, "P1");
        assert_eq!(view.practice_bottom[0].id, "P2");
        assert_eq!(view.edges, vec![PracticeEdge::new("P1", "P2")]);
        assert_eq!(view.artifact_rows.len(), 1);
    }

    #[test]
    fn wider_row_sets_spacing() {
        let snapshot = snapshot(&three_practice_store());
        let view = snapshot.view(&Selection::practices(["P1"]), ViewSide::Source);

        assert!(close(view.spacing, 0.25));
        let bottom: Vec<&str> = view.practice_bottom.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(bottom, vec!["P2", "P3"]);
        assert!(close(view.practice_bottom[0].x, 0.375));
        assert!(close(view.practice_bottom[1].x, 0.625));
        let processes: Vec<&str> = view.process_bottom.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(processes, vec!["C", "D", "E"]);
        assert_eq!(view.connections.len(), 2);
        assert_eq!(
            view.artifact_rows,
            vec![
                ArtifactFlowRow::new("Roadmap", "Budget", "Deliver"),
                ArtifactFlowRow::new("Budget plan", "Budget", "Deliver"),
                ArtifactFlowRow::new("Forecast", "Forecast", "Operate"),
            ]
        );
    }

    #[test]
    fn process_selection_titles_by_owner() {
        let snapshot = snapshot(&three_practice_store());
        let view = snapshot.view(&Selection::processes(["E"]), ViewSide::Source);
        assert_eq!(view.title, "Run - AS - Source");
        assert_eq!(view.edges, vec![PracticeEdge::new("P3", "P1")]);
    }

    #[test]
    fn title_skips_unknown_leading_practice() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::practices(["P9", "P1"]), ViewSide::Source);
        assert_eq!(view.title, "Plan - AS - Source");
        assert_eq!(view.practice_top[0].id, "P1");
    }

    #[test]
    fn title_skips_unknown_leading_process() {
        let snapshot = snapshot(&three_practice_store());
        let view = snapshot.view(&Selection::processes(["Q", "C"]), ViewSide::Source);
        assert_eq!(view.title, "Build - AS - Source");
    }

    #[test]
    fn empty_selection_titles_all_practices() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::all(), ViewSide::Source);
        assert_eq!(view.title, "All practices - AS - Source");
        assert_eq!(view.practice_top.len(), 2);
    }

    #[test]
    fn unknown_selection_gives_empty_rows() {
        let snapshot = snapshot(&two_practice_store());
        let view = snapshot.view(&Selection::practices(["P9"]), ViewSide::Source);
        assert_eq!(view.title, "All practices - AS - Source");
        assert!(view.practice_top.is_empty());
        assert!(view.practice_bottom.is_empty());
        assert!(view.process_top.is_empty() && view.process_bottom.is_empty());
        assert!(close(view.spacing, 1.0));
        assert!(view.connections.is_empty());
        assert!(view.artifact_rows.is_empty());
    }

    #[test]
    fn unknown_artifact_falls_back_to_id() {
        use capmap_model::{EntityStore, Interaction, Practice, Process};
        let store = EntityStore::new(
            vec![Practice::new("P1", "Plan")],
            vec![Process::new("A", "a", "P1"), Process::new("B", "b", "P1")],
            vec![],
            vec![Interaction::new("Q", "A", "B")],
        )
        .unwrap();
        let view = snapshot(&store).view(&Selection::all(), ViewSide::Source);
        assert_eq!(view.artifact_rows, vec![ArtifactFlowRow::new("Q", "a", "b")]);
    }
}
