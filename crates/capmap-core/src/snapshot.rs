//! Graphics snapshot: everything one load cycle derives
//!
//! Built once from a loaded [`EntityStore`] and never mutated. Hosts that
//! serve several readers can share it behind an `Arc`.

use crate::audit::AuditReport;
use crate::config::{CapmapConfig, ColorConfig, ColorScheme};
use crate::error::CoreError;
use crate::view::{PracticeView, ViewSide};
use capmap_color::{ColorAssigner, PaletteAssigner, PastelSampler, PracticeColors, UniquePastelAssigner};
use capmap_filter::{InteractionGraph, Selection};
use capmap_index::{IndexReport, RelationshipIndex};
use capmap_layout::{
    layout_value_streams, legend_entries, practice_rows, process_rows, GridRows, LayoutConfig, LegendEntry, StreamBox,
};
use capmap_model::{EntityStore, ProcessId};
use serde::Serialize;

/// Derived data for one load cycle
#[derive(Debug, Clone, Serialize)]
pub struct GraphicsSnapshot {
    color_scheme: &'static str,
    colors: PracticeColors,
    practices: GridRows,
    processes: GridRows,
    value_streams: Vec<StreamBox>,
    legend: Vec<LegendEntry>,
    index: RelationshipIndex,
    index_report: IndexReport,
    audit: AuditReport,
    #[serde(skip)]
    graph: InteractionGraph,
    #[serde(skip)]
    layout: LayoutConfig,
}

impl GraphicsSnapshot {
    /// Build with the color scheme named in `config`
    ///
    /// # Errors
    /// [`CoreError::Config`] for an invalid config, [`CoreError::Color`] if
    /// the random scheme runs out of attempts and palette fallback is off.
    pub fn build(store: &EntityStore, config: &CapmapConfig) -> Result<Self, CoreError> {
        let max_attempts = config.colors.max_attempts;
        match (config.colors.scheme, config.colors.seed) {
            (ColorScheme::Palette, _) => Self::build_with(store, config, &mut PaletteAssigner::new()),
            (ColorScheme::UniquePastel, Some(seed)) => {
                let mut assigner = UniquePastelAssigner::new(PastelSampler::seeded(seed)).with_max_attempts(max_attempts);
                Self::build_with(store, config, &mut assigner)
            }
            (ColorScheme::UniquePastel, None) => {
                let mut assigner =
                    UniquePastelAssigner::new(PastelSampler::thread_local()).with_max_attempts(max_attempts);
                Self::build_with(store, config, &mut assigner)
            }
        }
    }

    /// Build with a caller-supplied color assigner
    ///
    /// `config.colors.scheme` is ignored; the fallback setting still applies.
    ///
    /// # Errors
    /// As [`build`](Self::build).
    pub fn build_with<A: ColorAssigner>(
        store: &EntityStore,
        config: &CapmapConfig,
        assigner: &mut A,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let (index, index_report) = RelationshipIndex::build(store);
        let (colors, color_scheme) = assign_colors(assigner, &index, &config.colors)?;

        let practices = practice_rows(store, &index, &colors, &config.layout.grid);
        let processes = process_rows(&index, &colors, &config.layout.grid);
        let value_streams = layout_value_streams(store, &colors, &config.layout.value_stream);
        let legend = legend_entries(&practices.top, &config.layout.legend);
        let graph = InteractionGraph::from_index(&index);
        let audit = AuditReport::run(store);

        tracing::info!(
            practices = practices.top.len(),
            processes = processes.top.len(),
            pairs = index.pair_count(),
            gaps = index_report.gaps.len(),
            color_scheme,
            "Graphics snapshot built"
        );

        Ok(Self {
            color_scheme,
            colors,
            practices,
            processes,
            value_streams,
            legend,
            index,
            index_report,
            audit,
            graph,
            layout: config.layout.clone(),
        })
    }

    /// Scheme that produced the colors (`palette` after a fallback)
    #[inline]
    #[must_use]
    pub fn color_scheme(&self) -> &'static str {
        self.color_scheme
    }

    /// Practice colors
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &PracticeColors {
        &self.colors
    }

    /// Practice boxes, rows 1 and 4
    #[inline]
    #[must_use]
    pub fn practices(&self) -> &GridRows {
        &self.practices
    }

    /// Process boxes, rows 2 and 3
    #[inline]
    #[must_use]
    pub fn processes(&self) -> &GridRows {
        &self.processes
    }

    /// Value-stream column positions
    #[inline]
    #[must_use]
    pub fn value_streams(&self) -> &[StreamBox] {
        &self.value_streams
    }

    /// Practice legend key
    #[inline]
    #[must_use]
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Relationship index
    #[inline]
    #[must_use]
    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    /// Referential gaps found while indexing
    #[inline]
    #[must_use]
    pub fn index_report(&self) -> &IndexReport {
        &self.index_report
    }

    /// Data-quality audit
    #[inline]
    #[must_use]
    pub fn audit(&self) -> &AuditReport {
        &self.audit
    }

    /// Process interaction graph
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &InteractionGraph {
        &self.graph
    }

    /// Layout constants the snapshot was built with
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Display name of a practice
    #[must_use]
    pub fn practice_name(&self, practice_id: &str) -> Option<&str> {
        self.practices.top_box(practice_id).map(|b| b.name.as_str())
    }

    /// Display name of a process
    #[must_use]
    pub fn process_name(&self, process_id: &ProcessId) -> Option<&str> {
        let owner = self.index.practice_of(process_id.as_str())?;
        self.index
            .processes_of(owner.as_str())
            .iter()
            .find(|entry| &entry.id == process_id)
            .map(|entry| entry.name.as_str())
    }

    /// Filtered, centered view for one selection
    #[must_use]
    pub fn view(&self, selection: &Selection, side: ViewSide) -> PracticeView {
        PracticeView::build(self, selection, side)
    }

    /// Source and destination views of every practice, in practice order
    #[must_use]
    pub fn sweep(&self) -> Vec<PracticeView> {
        self.index
            .practices()
            .flat_map(|practice_id| {
                [ViewSide::Source, ViewSide::Destination]
                    .into_iter()
                    .map(move |side| self.view(&Selection::practices([practice_id.clone()]), side))
            })
            .collect()
    }
}

fn assign_colors<A: ColorAssigner>(
    assigner: &mut A,
    index: &RelationshipIndex,
    config: &ColorConfig,
) -> Result<(PracticeColors, &'static str), CoreError> {
    match assigner.assign(index.practices()) {
        Ok(colors) => Ok((colors, assigner.name())),
        Err(err) if err.is_retryable() && config.fallback_to_palette => {
            tracing::warn!("{err}; falling back to the palette");
            let mut palette = PaletteAssigner::new();
            Ok((palette.assign(index.practices())?, palette.name()))
        }
        Err(err) => Err(err.into()),
    }
}
