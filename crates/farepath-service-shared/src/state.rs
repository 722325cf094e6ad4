//! Application state for the HTTP service.
//!
//! The graph sits behind a `RwLock`: searches take the read lock, edge
//! registration takes the write lock for both the file append and the
//! in-memory insert, so the file and the graph see edges in the same order.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use farepath_lib::{
    append_edge, find_cheapest_path, load_edges, EdgeRecord, Error as LibError, RouteGraph,
    RouteOutcome,
};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to read or parse the edge list.
    EdgeListLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EdgeListLoad(e) => write!(f, "failed to load edge list: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EdgeListLoad(e) => Some(e),
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::EdgeListLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` inside); share it via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    graph: RwLock<RouteGraph>,
    edges_path: PathBuf,
}

impl AppState {
    /// Load the edge list at `edges_path`.
    ///
    /// A missing file is not an error: the service starts with an empty graph
    /// and the first registered edge creates the file.
    pub fn load(edges_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let edges_path = edges_path.as_ref();
        let mut graph = RouteGraph::new();

        tracing::info!(path = %edges_path.display(), "loading edge list");
        match load_edges(edges_path, &mut graph) {
            Ok(report) => tracing::info!(
                origins = graph.origin_count(),
                edges = report.loaded,
                skipped = report.skipped,
                "edge list loaded successfully"
            ),
            Err(LibError::EdgeListNotFound { path }) => tracing::warn!(
                path = %path.display(),
                "edge list not found, starting with an empty graph"
            ),
            Err(err) => return Err(err.into()),
        }

        Ok(Self::from_graph(graph, edges_path))
    }

    /// Create state from a pre-built graph.
    pub fn from_graph(graph: RouteGraph, edges_path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                graph: RwLock::new(graph),
                edges_path: edges_path.into(),
            }),
        }
    }

    /// Path of the backing edge-list file.
    pub fn edges_path(&self) -> &Path {
        &self.inner.edges_path
    }

    fn read_graph(&self) -> RwLockReadGuard<'_, RouteGraph> {
        // The graph is append-only, so a panicked writer cannot leave it torn.
        self.inner
            .graph
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_graph(&self) -> RwLockWriteGuard<'_, RouteGraph> {
        self.inner
            .graph
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a cheapest-path search against the current graph.
    pub fn find_cheapest_path(&self, origin: &str, destination: &str) -> RouteOutcome {
        find_cheapest_path(&self.read_graph(), origin, destination)
    }

    /// Append `edge` to the edge-list file, then insert it into the graph.
    ///
    /// Nothing is inserted when the append fails.
    pub fn register_edge(&self, edge: EdgeRecord) -> Result<(), LibError> {
        let mut graph = self.write_graph();
        append_edge(&self.inner.edges_path, &edge)?;
        graph.insert_edge(edge.origin, edge.destination, edge.cost);
        Ok(())
    }

    /// Number of locations with outgoing edges.
    pub fn origin_count(&self) -> usize {
        self.read_graph().origin_count()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.read_graph().edge_count()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("edges_path", &self.inner.edges_path)
            .field("edge_count", &self.edge_count())
            .finish()
    }
}
