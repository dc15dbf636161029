//! Benchmark result tables and their per-benchmark partitions.

use crate::types::{DataPoint, Series};
use allocplot_common::{AllocPlotError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Category column, one chart per distinct value.
pub const BENCHMARK_TYPE_COLUMN: &str = "benchmark_type";
/// Category column, one line per distinct value.
pub const ALLOCATOR_TYPE_COLUMN: &str = "allocator_type";
/// x axis column.
pub const NUM_ALLOCATIONS_COLUMN: &str = "num_allocations";

/// One row of a result table.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Workload the row measured, e.g. `random_free`.
    pub benchmark_type: String,
    /// Allocator the row measured, e.g. `system`.
    pub allocator_type: String,
    /// `None` when the cell was empty.
    pub num_allocations: Option<f64>,
    /// Value of the y column, `None` when the cell was empty.
    pub value: Option<f64>,
}

/// A loaded result table.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    y_column: String,
    rows: Vec<Measurement>,
}

struct ColumnIndex {
    benchmark_type: usize,
    allocator_type: usize,
    num_allocations: usize,
    value: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, y_column: &str, source: &Path) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AllocPlotError::missing_column(name, source))
        };
        Ok(Self {
            benchmark_type: find(BENCHMARK_TYPE_COLUMN)?,
            allocator_type: find(ALLOCATOR_TYPE_COLUMN)?,
            num_allocations: find(NUM_ALLOCATIONS_COLUMN)?,
            value: find(y_column)?,
        })
    }
}

fn parse_number(raw: &str, column: &str, source: &Path, line: u64) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        // NaN and infinities read as missing, like an empty cell
        Ok(_) => Ok(None),
        Err(_) => Err(AllocPlotError::MalformedRow {
            path: source.to_path_buf(),
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl Dataset {
    /// Loads a result table from disk.
    ///
    /// An absent file yields [`AllocPlotError::MissingInput`]; every other
    /// failure (missing column, unparsable number, ragged row) is a generic
    /// structural error.
    pub fn load(path: &Path, y_column: &str) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AllocPlotError::missing_input(path));
            }
            Err(err) => return Err(err.into()),
        };
        Self::from_reader(file, path, y_column)
    }

    /// Parses a result table from any reader. `source` is only used in errors.
    pub fn from_reader<R: Read>(
        reader: R,
        source: impl Into<PathBuf>,
        y_column: &str,
    ) -> Result<Self> {
        let source = source.into();
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let columns = ColumnIndex::resolve(reader.headers()?, y_column, &source)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let field = |i: usize| record.get(i).unwrap_or_default();

            rows.push(Measurement {
                benchmark_type: field(columns.benchmark_type).to_string(),
                allocator_type: field(columns.allocator_type).to_string(),
                num_allocations: parse_number(
                    field(columns.num_allocations),
                    NUM_ALLOCATIONS_COLUMN,
                    &source,
                    line,
                )?,
                value: parse_number(field(columns.value), y_column, &source, line)?,
            });
        }

        debug!(
            source = %source.display(),
            y_column,
            rows = rows.len(),
            "loaded result table"
        );
        Ok(Self {
            source,
            y_column: y_column.to_string(),
            rows,
        })
    }

    /// Where the table came from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Column used for y values.
    pub fn y_column(&self) -> &str {
        &self.y_column
    }

    /// All rows, in file order.
    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    /// True for a header-only table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct benchmark types in first-seen order.
    pub fn benchmark_types(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.benchmark_type.as_str()))
    }

    /// Rows of one benchmark type.
    pub fn partition<'a>(&'a self, benchmark_type: &'a str) -> Partition<'a> {
        Partition {
            benchmark_type,
            rows: self
                .rows
                .iter()
                .filter(|r| r.benchmark_type == benchmark_type)
                .collect(),
        }
    }

    /// One partition per benchmark type, in first-seen order.
    pub fn partitions(&self) -> impl Iterator<Item = Partition<'_>> + '_ {
        self.benchmark_types()
            .into_iter()
            .map(move |benchmark_type| self.partition(benchmark_type))
    }
}

/// Rows sharing one benchmark type. Borrows from its [`Dataset`].
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    benchmark_type: &'a str,
    rows: Vec<&'a Measurement>,
}

impl<'a> Partition<'a> {
    /// Benchmark type shared by every row.
    pub fn benchmark_type(&self) -> &'a str {
        self.benchmark_type
    }

    /// Rows in file order.
    pub fn rows(&self) -> &[&'a Measurement] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row has this benchmark type.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct allocator types in first-seen order.
    pub fn allocator_types(&self) -> Vec<&'a str> {
        distinct(self.rows.iter().map(|r| r.allocator_type.as_str()))
    }

    /// One series per allocator type.
    ///
    /// Points are sorted by x. Rows missing x or y are skipped, and rows that
    /// share an x value are averaged into a single point.
    pub fn series(&self) -> Vec<Series> {
        self.allocator_types()
            .into_iter()
            .map(|allocator| {
                let mut raw: Vec<DataPoint> = self
                    .rows
                    .iter()
                    .filter(|r| r.allocator_type == allocator)
                    .filter_map(|r| Some(DataPoint {
                        x: r.num_allocations?,
                        y: r.value?,
                    }))
                    .collect();
                raw.sort_by(|a, b| a.x.total_cmp(&b.x));

                Series {
                    name: allocator.to_string(),
                    points: average_repeated_x(&raw),
                }
            })
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Collapses runs of equal x in a sorted slice into their mean y.
fn average_repeated_x(sorted: &[DataPoint]) -> Vec<DataPoint> {
    sorted
        .chunk_by(|a, b| a.x == b.x)
        .map(|run| DataPoint {
            x: run[0].x,
            y: run.iter().map(|p| p.y).sum::<f64>() / run.len() as f64,
        })
        .collect()
}
