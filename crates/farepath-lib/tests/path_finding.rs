mod common;

use farepath_lib::{find_cheapest_path, Cost, RouteGraph, RouteOutcome};

use common::{airport_graph, graph_from, AIRPORT_EDGES};

fn hops(outcome: &RouteOutcome) -> Vec<&str> {
    outcome
        .route()
        .expect("route found")
        .hops()
        .iter()
        .map(String::as_str)
        .collect()
}

#[test]
fn airport_scenario_finds_cheapest_chain() {
    let graph = airport_graph();
    let outcome = find_cheapest_path(&graph, "GRU", "CDG");

    assert_eq!(hops(&outcome), vec!["GRU", "BRC", "SCL", "ORL", "CDG"]);
    assert_eq!(outcome.route().unwrap().cost(), 40);
    assert_eq!(
        outcome.to_string(),
        "Best route: GRU - BRC - SCL - ORL - CDG at a cost of $40"
    );
}

#[test]
fn origin_equal_to_destination_costs_nothing() {
    let graph = airport_graph();
    let outcome = find_cheapest_path(&graph, "SCL", "SCL");

    let route = outcome.route().expect("trivial route");
    assert_eq!(route.hops(), &["SCL".to_string()]);
    assert_eq!(route.cost(), 0);
    assert_eq!(route.hop_count(), 0);
}

#[test]
fn origin_equal_to_destination_works_for_unknown_location() {
    let graph = RouteGraph::new();
    let outcome = find_cheapest_path(&graph, "XYZ", "XYZ");
    assert_eq!(outcome.route().map(|r| r.cost()), Some(0));
}

#[test]
fn destination_absent_from_graph_is_not_found() {
    let graph = airport_graph();
    assert_eq!(find_cheapest_path(&graph, "GRU", "LIS"), RouteOutcome::NotFound);
}

#[test]
fn edges_are_directed() {
    let graph = airport_graph();
    assert_eq!(find_cheapest_path(&graph, "CDG", "GRU"), RouteOutcome::NotFound);
}

#[test]
fn empty_identifiers_are_invalid_input() {
    let graph = airport_graph();
    assert_eq!(find_cheapest_path(&graph, "", "CDG"), RouteOutcome::InvalidInput);
    assert_eq!(find_cheapest_path(&graph, "GRU", ""), RouteOutcome::InvalidInput);
    assert_eq!(find_cheapest_path(&graph, "", ""), RouteOutcome::InvalidInput);
}

#[test]
fn identifiers_are_case_sensitive() {
    let graph = airport_graph();
    assert_eq!(find_cheapest_path(&graph, "gru", "CDG"), RouteOutcome::NotFound);
}

#[test]
fn repeated_queries_return_identical_results() {
    let graph = airport_graph();
    let first = find_cheapest_path(&graph, "GRU", "CDG");
    for _ in 0..5 {
        assert_eq!(find_cheapest_path(&graph, "GRU", "CDG"), first);
    }
}

#[test]
fn insertion_order_does_not_change_result() {
    let forward = airport_graph();
    let reversed: Vec<_> = AIRPORT_EDGES.iter().rev().copied().collect();
    let backward = graph_from(&reversed);

    for (origin, destination) in [("GRU", "CDG"), ("GRU", "ORL"), ("BRC", "CDG")] {
        assert_eq!(
            find_cheapest_path(&forward, origin, destination),
            find_cheapest_path(&backward, origin, destination),
            "{origin} -> {destination}"
        );
    }
}

#[test]
fn equal_cost_routes_resolve_to_lexicographically_smaller_path() {
    let diamond_c_first = graph_from(&[("A", "C", 1), ("A", "B", 1), ("C", "D", 1), ("B", "D", 1)]);
    let diamond_b_first = graph_from(&[("A", "B", 1), ("B", "D", 1), ("A", "C", 1), ("C", "D", 1)]);

    for graph in [&diamond_c_first, &diamond_b_first] {
        let outcome = find_cheapest_path(graph, "A", "D");
        assert_eq!(hops(&outcome), vec!["A", "B", "D"]);
        assert_eq!(outcome.route().unwrap().cost(), 2);
    }
}

#[test]
fn parallel_edges_use_the_cheaper_one() {
    let graph = graph_from(&[("GRU", "SCL", 20), ("GRU", "SCL", 12), ("GRU", "SCL", 30)]);
    let outcome = find_cheapest_path(&graph, "GRU", "SCL");
    assert_eq!(outcome.route().unwrap().cost(), 12);
}

#[test]
fn zero_cost_edges_are_valid() {
    let graph = graph_from(&[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
    let outcome = find_cheapest_path(&graph, "A", "C");
    assert_eq!(hops(&outcome), vec!["A", "B", "C"]);
    assert_eq!(outcome.route().unwrap().cost(), 0);
}

#[test]
fn location_names_containing_the_separator_do_not_hide_routes() {
    let graph = graph_from(&[("A", "B - C", 2), ("A", "B", 1), ("B", "C", 1)]);

    let outcome = find_cheapest_path(&graph, "A", "C");
    assert_eq!(hops(&outcome), vec!["A", "B", "C"]);
    assert_eq!(outcome.route().unwrap().cost(), 2);

    let compound = find_cheapest_path(&graph, "A", "B - C");
    assert_eq!(hops(&compound), vec!["A", "B - C"]);
    assert_eq!(compound.route().unwrap().cost(), 2);
}

#[test]
fn cycles_do_not_loop_forever() {
    let graph = graph_from(&[("A", "B", 1), ("B", "A", 1), ("B", "C", 4), ("C", "A", 1)]);
    assert_eq!(find_cheapest_path(&graph, "A", "C").route().unwrap().cost(), 5);
    assert_eq!(find_cheapest_path(&graph, "A", "Z"), RouteOutcome::NotFound);
}

#[test]
fn more_hops_can_be_cheaper_than_direct_edge() {
    let graph = airport_graph();
    let direct = find_cheapest_path(&graph, "GRU", "ORL");
    assert_eq!(hops(&direct), vec!["GRU", "BRC", "SCL", "ORL"]);
    assert_eq!(direct.route().unwrap().cost(), 35);
}

/// Small deterministic generator so the property checks below are repeatable.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn random_edges(seed: u64, nodes: u64, edges: usize) -> Vec<(String, String, Cost)> {
    let mut rng = Lcg(seed);
    (0..edges)
        .map(|_| {
            let from = rng.next(nodes);
            let to = rng.next(nodes);
            let cost = rng.next(10) as Cost;
            (format!("N{from}"), format!("N{to}"), cost)
        })
        .collect()
}

fn brute_force_min(graph: &RouteGraph, current: &str, goal: &str, seen: &mut Vec<String>) -> Option<Cost> {
    if current == goal {
        return Some(0);
    }
    seen.push(current.to_string());
    let mut best: Option<Cost> = None;
    for edge in graph.edges_from(current) {
        if seen.contains(&edge.destination) {
            continue;
        }
        if let Some(rest) = brute_force_min(graph, &edge.destination, goal, seen) {
            let total = edge.cost + rest;
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }
    seen.pop();
    best
}

#[test]
fn returned_routes_are_optimal_and_consistent() {
    for seed in 1..=25u64 {
        let edges = random_edges(seed, 7, 16);
        let mut graph = RouteGraph::new();
        for (origin, destination, cost) in &edges {
            graph.insert_edge(origin.as_str(), destination.as_str(), *cost);
        }

        for from in 0..7 {
            for to in 0..7 {
                let origin = format!("N{from}");
                let destination = format!("N{to}");
                let outcome = find_cheapest_path(&graph, &origin, &destination);
                let expected = brute_force_min(&graph, &origin, &destination, &mut Vec::new());

                match (&outcome, expected) {
                    (RouteOutcome::Found(route), Some(best)) => {
                        assert_eq!(route.cost(), best, "seed {seed}: {origin} -> {destination}");

                        // The reported cost must be achievable along the reported hops.
                        let mut along = 0;
                        for pair in route.hops().windows(2) {
                            let cheapest_edge = graph
                                .edges_from(&pair[0])
                                .iter()
                                .filter(|edge| edge.destination == pair[1])
                                .map(|edge| edge.cost)
                                .min()
                                .expect("hop follows an edge");
                            along += cheapest_edge;
                        }
                        assert_eq!(along, route.cost());
                        assert_eq!(route.hops().first(), Some(&origin));
                        assert_eq!(route.hops().last(), Some(&destination));
                    }
                    (RouteOutcome::NotFound, None) => {}
                    (outcome, expected) => panic!(
                        "seed {seed}: {origin} -> {destination} gave {outcome:?}, expected {expected:?}"
                    ),
                }
            }
        }
    }
}

#[test]
fn shuffled_edge_order_gives_same_outcomes() {
    let edges = random_edges(99, 8, 24);
    let mut forward = RouteGraph::new();
    let mut backward = RouteGraph::new();
    for (origin, destination, cost) in &edges {
        forward.insert_edge(origin.as_str(), destination.as_str(), *cost);
    }
    for (origin, destination, cost) in edges.iter().rev() {
        backward.insert_edge(origin.as_str(), destination.as_str(), *cost);
    }

    for from in 0..8 {
        for to in 0..8 {
            let origin = format!("N{from}");
            let destination = format!("N{to}");
            assert_eq!(
                find_cheapest_path(&forward, &origin, &destination),
                find_cheapest_path(&backward, &origin, &destination)
            );
        }
    }
}
