use geo::Coord;

/// A place a walker can visit.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. A stop
/// without a location can be listed but never routed.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nightwalk_core::Stop;
///
/// let stop = Stop::new(7, "Rijksmuseum", Coord { x: 4.8852, y: 52.3600 });
///
/// assert_eq!(stop.id, 7);
/// assert!(stop.is_routable());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Unique identifier within a planning request.
    pub id: u64,
    /// Human-readable name shown to the visitor.
    pub name: String,
    /// Geospatial position, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Coord<f64>>,
}

impl Stop {
    /// Construct a located `Stop`.
    pub fn new(id: u64, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            location: Some(location),
        }
    }

    /// Construct a `Stop` whose position is unknown.
    ///
    /// # Examples
    /// ```
    /// use nightwalk_core::Stop;
    ///
    /// let stop = Stop::unlocated(3, "Hidden courtyard");
    /// assert!(!stop.is_routable());
    /// ```
    pub fn unlocated(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: None,
        }
    }

    /// Construct a located `Stop` from latitude and longitude in degrees.
    ///
    /// # Examples
    /// ```
    /// use nightwalk_core::Stop;
    ///
    /// let dam = Stop::at(0, "Dam Square", 52.373055, 4.892222);
    /// let location = dam.location.expect("located");
    /// assert_eq!(location.y, 52.373055);
    /// assert_eq!(location.x, 4.892222);
    /// ```
    pub fn at(id: u64, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::new(id, name, Coord { x: lng, y: lat })
    }

    /// Return the location when both components are finite.
    #[must_use]
    pub fn routable_location(&self) -> Option<Coord<f64>> {
        self.location
            .filter(|coord| coord.x.is_finite() && coord.y.is_finite())
    }

    /// Whether the stop can take part in route optimisation.
    #[must_use]
    pub fn is_routable(&self) -> bool {
        self.routable_location().is_some()
    }
}
