//! Weekly points predictions keyed by (player, team).

use super::{open_file, DataError, DataResult};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::path::Path;

/// One prediction row. Name and team are stored case-folded.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionEntry {
    pub name: String,
    pub team: String,
    pub points: f64,
}

/// CSV row layout: `Name,Team,Points`
#[derive(Debug, Deserialize)]
struct PredictionRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Points")]
    points: f64,
}

/// (player, team) -> predicted points, in source row order.
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    entries: Vec<PredictionEntry>,
    /// (name, team) -> position in `entries`
    index: FxHashMap<(String, String), usize>,
}

impl PredictionTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse predictions CSV from a reader. Fields are whitespace-trimmed.
    pub fn from_csv_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for (i, row) in csv_reader.deserialize::<PredictionRow>().enumerate() {
            let row = row?;
            if !row.points.is_finite() || row.points < 0.0 {
                return Err(DataError::InvalidPoints {
                    name: row.name,
                    team: row.team,
                    value: row.points,
                    row: i + 1,
                });
            }
            table.insert(&row.name, &row.team, row.points);
        }
        Ok(table)
    }

    /// Load from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let file = open_file(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Insert a prediction. A repeated (name, team) key overwrites in place.
    pub fn insert(&mut self, name: &str, team: &str, points: f64) {
        let key = (name.trim().to_lowercase(), team.trim().to_lowercase());
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].points = points,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(PredictionEntry {
                    name: key.0,
                    team: key.1,
                    points,
                });
            }
        }
    }

    /// Exact (name, team) lookup, case-insensitive.
    pub fn get(&self, name: &str, team: &str) -> Option<f64> {
        let key = (name.trim().to_lowercase(), team.trim().to_lowercase());
        self.index.get(&key).map(|&pos| self.entries[pos].points)
    }

    /// First row whose player name matches, ignoring team.
    pub fn first_for_player(&self, name: &str) -> Option<&PredictionEntry> {
        let name = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredictionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
