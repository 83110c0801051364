//! Loading, ranking and selecting museums from a catalogue file.

mod record;

use std::collections::HashSet;
use std::fmt;
use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use nightwalk_core::{Stop, WalkingModel, distance_km};
use serde::Serialize;
use thiserror::Error;

use crate::fs::open_utf8_file;
use record::MuseumRecord;

/// Identifier reserved for the default tour start.
pub const DAM_SQUARE_ID: u64 = 0;

/// The default tour start: Dam Square in central Amsterdam.
///
/// # Examples
/// ```
/// use nightwalk_data::{DAM_SQUARE_ID, dam_square};
///
/// let start = dam_square();
/// assert_eq!(start.id, DAM_SQUARE_ID);
/// assert!(start.is_routable());
/// ```
#[must_use]
pub fn dam_square() -> Stop {
    Stop::at(DAM_SQUARE_ID, "Dam Square", 52.373_055, 4.892_222)
}

/// Why an entry was left out of the routable catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The entry has no `coords` object, or it lacks a latitude or longitude.
    MissingCoordinates,
    /// The latitude or longitude is zero.
    ZeroCoordinate,
    /// The latitude or longitude is NaN or infinite.
    NonFiniteCoordinates,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingCoordinates => "missing coordinates",
            Self::ZeroCoordinate => "zero coordinate",
            Self::NonFiniteCoordinates => "non-finite coordinates",
        })
    }
}

/// A catalogue entry that cannot be routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedEntry {
    /// Identifier from the catalogue.
    pub id: u64,
    /// Display name shown to the visitor.
    pub name: String,
    /// What was wrong with the entry's location.
    pub reason: ExclusionReason,
}

/// A routable museum together with its street address, when known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogueEntry {
    /// The museum as a tour stop.
    pub stop: Stop,
    /// Postal address from the catalogue.
    pub address: Option<String>,
}

/// A stop with its distance and walking time from the tour start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStop {
    /// The ranked stop.
    pub stop: Stop,
    /// Great-circle distance from the start in kilometres.
    pub distance_km: f64,
    /// Minutes to walk straight there from the start.
    pub walking_minutes: u32,
}

/// Errors raised while loading or querying a [`Catalogue`].
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be opened.
    #[error("failed to open catalogue at {path:?}: {source}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue file is not a JSON array of museums.
    #[error("failed to parse catalogue JSON at {path:?}: {source}")]
    ParseFile {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// In-memory catalogue JSON could not be decoded.
    #[error("failed to parse catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two catalogue entries share an identifier.
    #[error("catalogue lists id {id} more than once")]
    DuplicateId {
        /// Repeated identifier.
        id: u64,
    },
    /// A catalogue entry reuses the identifier reserved for the tour start.
    #[error("catalogue entry {name:?} uses the reserved start id {id}")]
    ReservedId {
        /// Reserved identifier.
        id: u64,
        /// Name of the offending entry.
        name: String,
    },
    /// A requested identifier is not in the catalogue.
    #[error("no museum with id {id} in the catalogue")]
    UnknownStop {
        /// Requested identifier.
        id: u64,
    },
    /// A requested museum was excluded for lack of coordinates.
    #[error("museum {id} ({name}) cannot be routed: {reason}")]
    ExcludedStop {
        /// Requested identifier.
        id: u64,
        /// Display name of the excluded museum.
        name: String,
        /// Why it was excluded.
        reason: ExclusionReason,
    },
    /// The tour start has no usable location to measure from.
    #[error("start stop {id} has no usable location")]
    UnlocatedStart {
        /// Identifier of the start stop.
        id: u64,
    },
}

/// The routable museums of a catalogue plus the entries set aside.
///
/// # Examples
/// ```
/// use nightwalk_data::Catalogue;
///
/// let catalogue = Catalogue::from_json_str(
///     r#"[
///         {"id": 1, "name": "Rijksmuseum", "coords": {"lat": 52.36, "lng": 4.8852}},
///         {"id": 2, "name": "Closed Archive"}
///     ]"#,
/// )
/// .expect("valid catalogue");
/// assert_eq!(catalogue.len(), 1);
/// assert_eq!(catalogue.excluded_names(), vec!["Closed Archive"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    excluded: Vec<ExcludedEntry>,
}

impl Catalogue {
    /// Read a catalogue from a JSON file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogueError> {
        let file = open_utf8_file(path).map_err(|source| CatalogueError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<MuseumRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| CatalogueError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_records(records)
    }

    /// Read a catalogue from any JSON byte source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogueError> {
        let records: Vec<MuseumRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Parse a catalogue held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let records: Vec<MuseumRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<MuseumRecord>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut catalogue = Self::default();
        for record in records {
            if record.id == DAM_SQUARE_ID {
                return Err(CatalogueError::ReservedId {
                    id: record.id,
                    name: record.name,
                });
            }
            if !seen.insert(record.id) {
                return Err(CatalogueError::DuplicateId { id: record.id });
            }
            match record.location() {
                Ok(location) => catalogue.entries.push(CatalogueEntry {
                    stop: Stop::new(record.id, record.name, location),
                    address: record.address,
                }),
                Err(reason) => catalogue.excluded.push(ExcludedEntry {
                    id: record.id,
                    name: record.name,
                    reason,
                }),
            }
        }
        if !catalogue.excluded.is_empty() {
            log::warn!(
                "excluding {} museums without usable coordinates: {}",
                catalogue.excluded.len(),
                catalogue.excluded_names().join(", ")
            );
        }
        log::debug!("loaded {} routable museums", catalogue.entries.len());
        Ok(catalogue)
    }

    /// Routable entries in catalogue order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Routable stops in catalogue order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.entries.iter().map(|entry| &entry.stop)
    }

    /// Number of routable museums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue has no routable museums.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries set aside because they cannot be placed on the map.
    #[must_use]
    pub fn excluded(&self) -> &[ExcludedEntry] {
        &self.excluded
    }

    /// Names of the excluded entries, in catalogue order.
    #[must_use]
    pub fn excluded_names(&self) -> Vec<&str> {
        self.excluded.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Look up a routable museum by identifier.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|entry| entry.stop.id == id)
    }

    /// Routable stops ordered by distance from `start`, nearest first.
    ///
    /// Equal distances keep catalogue order. Walking minutes cover a single
    /// leg from the start, without dwell time.
    pub fn by_distance_from(
        &self,
        start: &Stop,
        walking: &WalkingModel,
    ) -> Result<Vec<RankedStop>, CatalogueError> {
        let origin = start
            .routable_location()
            .ok_or(CatalogueError::UnlocatedStart { id: start.id })?;
        let mut ranked: Vec<RankedStop> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let location = entry.stop.routable_location()?;
                let distance = distance_km(origin, location);
                Some(RankedStop {
                    stop: entry.stop.clone(),
                    distance_km: distance,
                    walking_minutes: walking.walking_minutes(distance),
                })
            })
            .collect();
        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(ranked)
    }

    /// Resolve requested identifiers into stops, preserving request order.
    ///
    /// The start's identifier and repeated identifiers are skipped. Unknown
    /// identifiers and museums excluded for lack of coordinates are errors.
    pub fn select(&self, start: &Stop, ids: &[u64]) -> Result<Vec<Stop>, CatalogueError> {
        let mut chosen = HashSet::with_capacity(ids.len());
        let mut stops = Vec::with_capacity(ids.len());
        for &id in ids {
            if id == start.id || !chosen.insert(id) {
                continue;
            }
            stops.push(self.resolve(id)?);
        }
        Ok(stops)
    }

    fn resolve(&self, id: u64) -> Result<Stop, CatalogueError> {
        if let Some(entry) = self.get(id) {
            return Ok(entry.stop.clone());
        }
        Err(self.excluded.iter().find(|entry| entry.id == id).map_or(
            CatalogueError::UnknownStop { id },
            |excluded| CatalogueError::ExcludedStop {
                id,
                name: excluded.name.clone(),
                reason: excluded.reason,
            },
        ))
    }
}
