//! Process interaction graph and the filter walk
//!
//! One node per indexed process, one edge per process pair, edges added in
//! pair order. A walk starts from the selected side and follows edges in
//! `Direction::Outgoing` (forward) or `Direction::Incoming` (reverse). Both
//! run the same code, so a forward walk on a graph equals a reverse walk on
//! its [`reversed`](InteractionGraph::reversed) copy.

use crate::result::{FilterResult, Flow, PracticeEdge};
use crate::selection::Selection;
use capmap_index::{ArtifactEntry, RelationshipIndex};
use capmap_model::{PracticeId, ProcessId, ProcessPair};
use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// Directed process graph with practice ownership
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    graph: DiGraph<ProcessId, Vec<ArtifactEntry>>,
    nodes: HashMap<ProcessId, NodeIndex>,
    owners: HashMap<ProcessId, PracticeId>,
    practices: IndexMap<PracticeId, Vec<ProcessId>>,
}

impl InteractionGraph {
    /// Build from a relationship index
    #[must_use]
    pub fn from_index(index: &RelationshipIndex) -> Self {
        let mut graph = Self::default();

        for (practice_id, processes) in index.practice_to_processes() {
            let mut owned = Vec::with_capacity(processes.len());
            for process in processes {
                let node = graph.graph.add_node(process.id.clone());
                graph.nodes.insert(process.id.clone(), node);
                graph.owners.insert(process.id.clone(), practice_id.clone());
                owned.push(process.id.clone());
            }
            graph.practices.insert(practice_id.clone(), owned);
        }

        for (pair, artifacts) in index.pairs() {
            match (graph.nodes.get(&pair.source), graph.nodes.get(&pair.destination)) {
                (Some(&source), Some(&destination)) => {
                    graph.graph.add_edge(source, destination, artifacts.to_vec());
                }
                _ => tracing::debug!("Skipping pair {pair}: endpoint not indexed"),
            }
        }

        tracing::debug!(
            processes = graph.graph.node_count(),
            pairs = graph.graph.edge_count(),
            "Interaction graph built"
        );
        graph
    }

    /// Same graph with every edge flipped
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut reversed = self.clone();
        reversed.graph.reverse();
        reversed
    }

    /// Number of processes
    #[inline]
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct process pairs
    #[inline]
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Practices in index order
    pub fn practices(&self) -> impl ExactSizeIterator<Item = &PracticeId> + '_ {
        self.practices.keys()
    }

    /// Owning practice of a process
    #[inline]
    #[must_use]
    pub fn owner(&self, process_id: &str) -> Option<&PracticeId> {
        self.owners.get(process_id)
    }

    /// Processes one step away from `process_id` in `direction`
    pub fn neighbors(&self, process_id: &str, direction: Direction) -> impl Iterator<Item = &ProcessId> + '_ {
        self.nodes
            .get(process_id)
            .into_iter()
            .flat_map(move |&node| self.graph.neighbors_directed(node, direction))
            .map(move |node| &self.graph[node])
    }

    /// Forward walk: selection is the source side
    #[must_use]
    pub fn forward(&self, selection: &Selection) -> FilterResult {
        self.walk(selection, Direction::Outgoing)
    }

    /// Reverse walk: selection is the destination side
    #[must_use]
    pub fn reverse(&self, selection: &Selection) -> FilterResult {
        self.walk(selection, Direction::Incoming)
    }

    /// Walk from `selection` along edges in `direction`
    ///
    /// 1. selected practices (all if the selection is empty);
    /// 2. starting processes: the selected processes, or those owned by (1);
    /// 3. processes reached over one edge from (2);
    /// 4. counterpart practices: owners of (3);
    /// 5. practice edges from every pair joining a practice of (1) to one of (4).
    #[must_use]
    pub fn walk(&self, selection: &Selection, direction: Direction) -> FilterResult {
        let (near_practices, start) = self.resolve(selection);
        let start: HashSet<&ProcessId> = start.iter().collect();

        let mut reached: HashSet<&ProcessId> = HashSet::new();
        let mut flows = Vec::new();
        for edge in self.graph.edge_references() {
            let (near, far) = self.ends(&edge, direction);
            if start.contains(near) {
                reached.insert(far);
                flows.push(Flow {
                    pair: ProcessPair::new(self.graph[edge.source()].clone(), self.graph[edge.target()].clone()),
                    artifacts: edge.weight().clone(),
                });
            }
        }

        let far_practices: IndexSet<&PracticeId> = self
            .practices
            .iter()
            .filter(|(_, processes)| processes.iter().any(|p| reached.contains(p)))
            .map(|(practice_id, _)| practice_id)
            .collect();
        let reached_processes: Vec<ProcessId> = self
            .ordered_processes()
            .filter(|p| reached.contains(p))
            .cloned()
            .collect();

        let mut relationships = IndexSet::new();
        for edge in self.graph.edge_references() {
            let (near, far) = self.ends(&edge, direction);
            let (Some(near_owner), Some(far_owner)) = (self.owners.get(near), self.owners.get(far)) else {
                continue;
            };
            if near_practices.contains(near_owner) && far_practices.contains(far_owner) {
                let (source, destination) = match direction {
                    Direction::Outgoing => (near_owner, far_owner),
                    Direction::Incoming => (far_owner, near_owner),
                };
                relationships.insert(PracticeEdge::new(source.clone(), destination.clone()));
            }
        }

        let near: Vec<PracticeId> = near_practices.into_iter().cloned().collect();
        let far: Vec<PracticeId> = far_practices.into_iter().cloned().collect();
        let near_processes = self.processes_of_all(&near);
        let far_processes = self.processes_of_all(&far);

        let (source_practices, destination_practices, source_processes, destination_processes) = match direction {
            Direction::Outgoing => (near, far, near_processes, far_processes),
            Direction::Incoming => (far, near, far_processes, near_processes),
        };

        FilterResult {
            source_practices,
            destination_practices,
            source_processes,
            destination_processes,
            reached_processes,
            relationships: relationships.into_iter().collect(),
            flows,
        }
    }

    /// Selected practices (index order) and starting processes
    fn resolve(&self, selection: &Selection) -> (IndexSet<&PracticeId>, Vec<ProcessId>) {
        match selection {
            Selection::Practices(ids) if !ids.is_empty() => {
                let wanted: HashSet<&str> = ids.iter().map(PracticeId::as_str).collect();
                for id in ids.iter().filter(|id| !self.practices.contains_key(id.as_str())) {
                    tracing::debug!("Ignoring unknown practice {id} in selection");
                }
                let practices: IndexSet<&PracticeId> =
                    self.practices.keys().filter(|p| wanted.contains(p.as_str())).collect();
                let start = self.processes_of_all(practices.iter().copied());
                (practices, start)
            }
            Selection::Processes(ids) if !ids.is_empty() => {
                let wanted: HashSet<&str> = ids.iter().map(ProcessId::as_str).collect();
                for id in ids.iter().filter(|id| !self.nodes.contains_key(id.as_str())) {
                    tracing::debug!("Ignoring unknown process {id} in selection");
                }
                let start: Vec<ProcessId> = self
                    .ordered_processes()
                    .filter(|p| wanted.contains(p.as_str()))
                    .cloned()
                    .collect();
                let practices: IndexSet<&PracticeId> = self
                    .practices
                    .iter()
                    .filter(|(_, processes)| processes.iter().any(|p| wanted.contains(p.as_str())))
                    .map(|(practice_id, _)| practice_id)
                    .collect();
                (practices, start)
            }
            _ => (self.practices.keys().collect(), self.ordered_processes().cloned().collect()),
        }
    }

    /// (selected-side endpoint, far endpoint) of an edge
    fn ends(&self, edge: &EdgeReference<'_, Vec<ArtifactEntry>>, direction: Direction) -> (&ProcessId, &ProcessId) {
        let (near, far) = match direction {
            Direction::Outgoing => (edge.source(), edge.target()),
            Direction::Incoming => (edge.target(), edge.source()),
        };
        (&self.graph[near], &self.graph[far])
    }

    /// Every process, practice by practice
    fn ordered_processes(&self) -> impl Iterator<Item = &ProcessId> + '_ {
        self.practices.values().flatten()
    }

    fn processes_of_all<'a>(&self, practices: impl IntoIterator<Item = &'a PracticeId>) -> Vec<ProcessId> {
        practices
            .into_iter()
            .filter_map(|p| self.practices.get(p))
            .flatten()
            .cloned()
            .collect()
    }
}
