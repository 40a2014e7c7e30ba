//! Filter properties over whole graphs

use capmap_filter::{FilterResult, InteractionGraph, PracticeEdge, Selection};
use capmap_index::RelationshipIndex;
use capmap_model::{Artifact, EntityStore, Interaction, Practice, Process, ProcessPair};
use capmap_test_utils::{indexed, init_tracing, three_practice_store, two_practice_store};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn swapped(edges: &[PracticeEdge]) -> Vec<PracticeEdge> {
    edges
        .iter()
        .map(|e| PracticeEdge::new(e.destination.clone(), e.source.clone()))
        .collect()
}

fn assert_mirrored(forward: &FilterResult, mirrored: &FilterResult) {
    assert_eq!(forward.source_practices, mirrored.destination_practices);
    assert_eq!(forward.destination_practices, mirrored.source_practices);
    assert_eq!(forward.source_processes, mirrored.destination_processes);
    assert_eq!(forward.destination_processes, mirrored.source_processes);
    assert_eq!(forward.reached_processes, mirrored.reached_processes);
    assert_eq!(forward.relationships, swapped(&mirrored.relationships));
}

#[test]
fn end_to_end_two_practices() {
    init_tracing();
    let graph = InteractionGraph::from_index(&indexed(&two_practice_store()));
    let result = graph.forward(&Selection::practices(["P1"]));

    assert_eq!(result.destination_practices.len(), 1);
    assert_eq!(result.destination_practices[0].as_str(), "P2");
    assert_eq!(result.relationships, vec![PracticeEdge::new("P1", "P2")]);
    assert_eq!(result.flows.len(), 1);
    assert_eq!(result.flows[0].pair, ProcessPair::new("A", "C"));
    assert_eq!(result.flows[0].artifacts[0].name.as_deref(), Some("Roadmap"));
}

#[test]
fn empty_selection_equals_every_practice() {
    let store = three_practice_store();
    let index = indexed(&store);
    let graph = InteractionGraph::from_index(&index);
    let every = Selection::practices(index.practices().cloned());

    assert_eq!(graph.forward(&Selection::all()), graph.forward(&every));
    assert_eq!(graph.reverse(&Selection::all()), graph.reverse(&every));
    assert_eq!(graph.forward(&Selection::processes(Vec::<&str>::new())), graph.forward(&every));
}

#[test]
fn mirrored_walks_agree_on_fixture() {
    let graph = InteractionGraph::from_index(&indexed(&three_practice_store()));
    let flipped = graph.reversed();
    for practice in ["P1", "P2", "P3"] {
        let selection = Selection::practices([practice]);
        assert_mirrored(&graph.forward(&selection), &flipped.reverse(&selection));
    }
}

#[test]
fn graph_from_reversed_index_matches_reversed_graph() {
    let index = indexed(&three_practice_store());
    let from_reversed_index = InteractionGraph::from_index(&index.reversed());
    let reversed_graph = InteractionGraph::from_index(&index).reversed();
    let selection = Selection::practices(["P1"]);
    assert_eq!(
        from_reversed_index.reverse(&selection),
        reversed_graph.reverse(&selection)
    );
}

#[test]
fn result_serializes_for_renderers() {
    let graph = InteractionGraph::from_index(&indexed(&two_practice_store()));
    let json = serde_json::to_value(graph.forward(&Selection::all())).unwrap();
    assert_eq!(json["relationships"][0]["source"], "P1");
    assert_eq!(json["flows"][0]["pair"]["destination"], "C");
    assert_eq!(json["flows"][0]["artifacts"][0]["id"], "X");
}

/// Random store: `practices` practices, processes spread round-robin,
/// interactions as (artifact, source, destination) indices.
fn random_store(practices: usize, processes: usize, interactions: &[(usize, usize)]) -> EntityStore {
    EntityStore::new(
        (0..practices).map(|i| Practice::new(format!("P{i}"), format!("practice {i}"))),
        (0..processes).map(|i| Process::new(format!("S{i}"), format!("process {i}"), format!("P{}", i % practices))),
        vec![Artifact::new("X", "Thing")],
        interactions
            .iter()
            .map(|&(s, d)| Interaction::new("X", format!("S{}", s % processes), format!("S{}", d % processes))),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_forward_equals_reverse_on_flipped(
        practices in 1..6usize,
        processes in 1..15usize,
        interactions in prop::collection::vec((0..15usize, 0..15usize), 0..30),
        picks in prop::collection::vec(0..6usize, 0..3),
    ) {
        let store = random_store(practices, processes, &interactions);
        let (index, _) = RelationshipIndex::build(&store);
        let graph = InteractionGraph::from_index(&index);
        let flipped = graph.reversed();
        let selection = Selection::practices(picks.iter().map(|i| format!("P{}", i % practices)));

        let forward = graph.forward(&selection);
        let mirrored = flipped.reverse(&selection);
        prop_assert_eq!(&forward.destination_practices, &mirrored.source_practices);
        prop_assert_eq!(&forward.source_practices, &mirrored.destination_practices);
        prop_assert_eq!(&forward.relationships, &swapped(&mirrored.relationships));
    }

    #[test]
    fn prop_relationships_are_unique_and_cross_sides(
        practices in 1..6usize,
        processes in 1..15usize,
        interactions in prop::collection::vec((0..15usize, 0..15usize), 0..30),
    ) {
        let store = random_store(practices, processes, &interactions);
        let graph = InteractionGraph::from_index(&indexed(&store));
        let result = graph.forward(&Selection::all());

        let mut sorted = result.relationships.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), result.relationships.len());
        for edge in &result.relationships {
            prop_assert!(result.source_practices.contains(&edge.source));
            prop_assert!(result.destination_practices.contains(&edge.destination));
        }
    }
}
