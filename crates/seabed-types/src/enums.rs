//! Enumeration types for the Seabed simulation.
//!
//! Covers the binary tile classification of the world grid, the closed set
//! of resource layers, and the [`Reading`] held by each resource cell.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

/// Classification of a single world tile.
///
/// Encoded in the world CSV as `0` (ocean) or `1` (land).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TileKind {
    /// Open water. Drills may operate here.
    Ocean,
    /// Dry land. Resource readings are masked out.
    Land,
}

impl TileKind {
    /// Decode the numeric tile code used in world snapshots.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Ocean),
            1 => Some(Self::Land),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Resource kinds
// ---------------------------------------------------------------------------

/// A resource layer that can be overlaid on the world.
///
/// Each kind has a lowercase slug used in configuration and in the
/// `/api/{resource}/{day}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ResourceKind {
    /// Crude oil deposits.
    Oil,
    /// Helium pockets.
    Helium,
    /// Precious metal nodules.
    Metals,
    /// Shipwreck salvage.
    Shipwreck,
    /// Coral reef density. Usually a preserved layer.
    Coral,
    /// Endangered species sightings. Usually a preserved layer.
    Species,
}

impl ResourceKind {
    /// Every resource kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Oil,
        Self::Helium,
        Self::Metals,
        Self::Shipwreck,
        Self::Coral,
        Self::Species,
    ];

    /// The URL and configuration slug for this kind.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Oil => "oil",
            Self::Helium => "helium",
            Self::Metals => "metals",
            Self::Shipwreck => "shipwreck",
            Self::Coral => "coral",
            Self::Species => "species",
        }
    }

    /// Look up a kind by its slug (case-insensitive).
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// The value recorded in a non-empty resource cell.
///
/// `Unknown` marks a row whose value column was blank in the source data.
/// It is kept distinct from an empty cell: an unknown cell can still be
/// visited by a drill, but ranks below every known value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reading {
    /// A measured value.
    Known(f64),
    /// The source row carried no value.
    Unknown,
}

impl Reading {
    /// The measured value, if any.
    pub const fn known(self) -> Option<f64> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }

    /// Ranking value: `Unknown` sorts as negative infinity.
    pub const fn rank(self) -> f64 {
        match self {
            Self::Known(value) => value,
            Self::Unknown => f64::NEG_INFINITY,
        }
    }

    /// Whether this is the `Unknown` sentinel.
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}
