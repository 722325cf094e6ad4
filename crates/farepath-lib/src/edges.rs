//! Edge-list files: one `origin,destination,cost` edge per line.
//!
//! Lines that do not split into exactly three fields, or whose third field is
//! not a 32-bit integer, are skipped and counted rather than treated as
//! errors. No header row and no quoting are recognised; identifiers are taken
//! verbatim.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Cost, RouteGraph};

/// Largest cost an edge-list line may carry.
pub const MAX_EDGE_COST: Cost = i32::MAX as Cost;

/// One parsed line of an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    pub cost: Cost,
}

impl EdgeRecord {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, cost: Cost) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }

    fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let origin = fields.next()?;
        let destination = fields.next()?;
        let cost = fields.next()?;
        if fields.next().is_some() || origin.is_empty() || destination.is_empty() {
            return None;
        }
        let cost = Cost::from(cost.trim().parse::<i32>().ok()?);
        Some(Self::new(origin, destination, cost))
    }

    fn from_record(record: &StringRecord) -> Option<Self> {
        Self::from_fields(record.iter())
    }

    /// Check that the record can be written back as a single edge-list line.
    fn validate_for_write(&self) -> Result<()> {
        for (field, value) in [("origin", &self.origin), ("destination", &self.destination)] {
            if value.is_empty() {
                return Err(Error::InvalidEdge {
                    message: format!("{field} must not be empty"),
                });
            }
            if value.contains([',', '\n', '\r']) {
                return Err(Error::InvalidEdge {
                    message: format!("{field} '{value}' contains a separator character"),
                });
            }
        }
        if i32::try_from(self.cost).is_err() {
            return Err(Error::InvalidEdge {
                message: format!("cost {} does not fit in an edge-list line", self.cost),
            });
        }
        Ok(())
    }
}

/// Parse a single edge-list line, returning `None` when it is malformed.
pub fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    EdgeRecord::from_fields(line.trim_end_matches(['\r', '\n']).split(','))
}

/// Counters produced while loading an edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Read edges from `reader` into `graph` in source order.
pub fn read_edges<R: Read>(reader: R, graph: &mut RouteGraph) -> Result<LoadReport> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut report = LoadReport::default();
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if matches!(err.kind(), csv::ErrorKind::Utf8 { .. }) => {
                debug!(error = %err, "skipping edge line with invalid UTF-8");
                report.skipped += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match EdgeRecord::from_record(&record) {
            Some(edge) => {
                graph.insert_edge(edge.origin, edge.destination, edge.cost);
                report.loaded += 1;
            }
            None => {
                debug!(
                    line = ?record.position().map(|pos| pos.line()),
                    fields = record.len(),
                    "skipping malformed edge line"
                );
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Load the edge list at `path` into `graph`.
///
/// Returns [`Error::EdgeListNotFound`] when the file does not exist so callers
/// can decide whether to start from an empty graph.
pub fn load_edges(path: &Path, graph: &mut RouteGraph) -> Result<LoadReport> {
    if !path.exists() {
        return Err(Error::EdgeListNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let report = read_edges(file, graph)?;
    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "edge list loaded"
    );
    Ok(report)
}

/// Append `edge` as a new line at the end of the edge list at `path`,
/// creating the file when it does not exist yet.
pub fn append_edge(path: &Path, edge: &EdgeRecord) -> Result<()> {
    edge.validate_for_write()?;

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    // A hand-edited file may lack a trailing newline.
    if file.metadata()?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            file.write_all(b"\n")?;
        }
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);
    writer.serialize(edge)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        origin = %edge.origin,
        destination = %edge.destination,
        cost = edge.cost,
        "edge appended"
    );
    Ok(())
}
