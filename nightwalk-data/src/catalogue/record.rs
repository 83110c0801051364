//! Wire format of catalogue entries.

use geo::Coord;
use serde::Deserialize;

use super::ExclusionReason;

/// One museum as it appears in the catalogue file.
///
/// Unknown fields such as images or opening notes are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MuseumRecord {
    pub(crate) id: u64,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) address: Option<String>,
    #[serde(default)]
    pub(crate) coords: Option<RecordCoords>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RecordCoords {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
}

impl MuseumRecord {
    /// The record's location, or the reason it has none usable.
    ///
    /// A zero latitude or longitude counts as unset, matching catalogues
    /// that fill blanks with `0`.
    pub(crate) fn location(&self) -> Result<Coord<f64>, ExclusionReason> {
        let Some(RecordCoords {
            lat: Some(lat),
            lng: Some(lng),
        }) = self.coords
        else {
            return Err(ExclusionReason::MissingCoordinates);
        };
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ExclusionReason::NonFiniteCoordinates);
        }
        if lat == 0.0 || lng == 0.0 {
            return Err(ExclusionReason::ZeroCoordinate);
        }
        Ok(Coord { x: lng, y: lat })
    }
}
