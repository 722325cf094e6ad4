use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::graph::{Cost, Edge, RouteGraph};
use crate::routing::{CheapestRoute, RouteOutcome, PATH_SEPARATOR};

/// Find the lowest-cost route from `origin` to `destination` with a
/// uniform-cost search.
///
/// Returns [`RouteOutcome::InvalidInput`] without touching the graph when
/// either identifier is empty, and [`RouteOutcome::NotFound`] once the
/// frontier is exhausted. Equal-cost alternatives are resolved by comparing
/// their rendered paths byte-wise, so the result does not depend on the order
/// in which edges were inserted.
///
/// Edge costs are assumed to be non-negative. A negative edge does not cause a
/// failure but the returned route is then not guaranteed to be the cheapest.
pub fn find_cheapest_path(graph: &RouteGraph, origin: &str, destination: &str) -> RouteOutcome {
    if origin.is_empty() || destination.is_empty() {
        return RouteOutcome::InvalidInput;
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = Frontier::default();
    frontier.push(SearchState::start(origin));

    let mut popped = 0usize;
    while let Some(current) = frontier.pop() {
        popped += 1;

        if current.location == destination {
            debug!(
                origin,
                destination,
                cost = current.cost,
                states_popped = popped,
                "cheapest route found"
            );
            return RouteOutcome::Found(current.into_route());
        }

        if !visited.insert(current.location.clone()) {
            continue;
        }

        for edge in graph.edges_from(&current.location) {
            if visited.contains(&edge.destination) {
                continue;
            }
            frontier.push(current.extend(edge));
        }
    }

    debug!(
        origin,
        destination,
        states_popped = popped,
        locations_visited = visited.len(),
        "frontier exhausted"
    );
    RouteOutcome::NotFound
}

/// States awaiting expansion, ordered by cost then path text.
///
/// Backed by an ordered set: pushing a state identical to one already queued
/// (same cost, same path) is a no-op.
#[derive(Debug, Default)]
struct Frontier {
    states: BTreeSet<SearchState>,
}

impl Frontier {
    fn push(&mut self, state: SearchState) -> bool {
        self.states.insert(state)
    }

    fn pop(&mut self) -> Option<SearchState> {
        self.states.pop_first()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.states.len()
    }
}

/// A location reached with a given accumulated cost along a given path.
#[derive(Debug, Clone)]
struct SearchState {
    location: String,
    cost: Cost,
    path: String,
    hops: Vec<String>,
}

impl SearchState {
    fn start(origin: &str) -> Self {
        Self {
            location: origin.to_string(),
            cost: 0,
            path: origin.to_string(),
            hops: vec![origin.to_string()],
        }
    }

    fn extend(&self, edge: &Edge) -> Self {
        let mut path = String::with_capacity(
            self.path.len() + PATH_SEPARATOR.len() + edge.destination.len(),
        );
        path.push_str(&self.path);
        path.push_str(PATH_SEPARATOR);
        path.push_str(&edge.destination);

        let mut hops = Vec::with_capacity(self.hops.len() + 1);
        hops.extend(self.hops.iter().cloned());
        hops.push(edge.destination.clone());

        Self {
            location: edge.destination.clone(),
            cost: self.cost.saturating_add(edge.cost),
            path,
            hops,
        }
    }

    fn into_route(self) -> CheapestRoute {
        CheapestRoute::new(self.hops, self.cost)
    }
}

// Ordered by cost, then path text. Location names may themselves contain
// the separator, so the hop list decides between states whose text matches.
impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.path.as_bytes().cmp(other.path.as_bytes()))
            .then_with(|| self.hops.cmp(&other.hops))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchState {}
