//! Museum catalogue access for the Nightwalk tour planner.
//!
//! Responsibilities:
//! - Decode the JSON museum catalogue into routable [`Stop`]s.
//! - Set aside entries without usable coordinates and report them by name.
//! - Rank stops by distance from the tour start and resolve user selections.
//!
//! Boundaries:
//! - Do not encode routing or scheduling rules (live in `nightwalk-core`).
//!
//! Invariants:
//! - Every stop a [`Catalogue`] hands out has a finite, non-zero location.
//! - Identifiers are unique within a catalogue.
//!
//! [`Stop`]: nightwalk_core::Stop

#![forbid(unsafe_code)]

mod catalogue;
mod fs;

pub use catalogue::{
    Catalogue, CatalogueEntry, CatalogueError, DAM_SQUARE_ID, ExcludedEntry, ExclusionReason,
    RankedStop, dam_square,
};
