//! Movement strategies for drills.
//!
//! A [`Strategy`] picks the next cell for a drill from its neighbourhood.
//! There are exactly two policies, so this is a closed enum rather than a
//! trait object.

use rand::Rng;
use rand::seq::IndexedRandom;
use seabed_types::{Coord, Reading};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Candidate cells a drill can move to, in enumeration order.
pub type Neighbourhood = Vec<(Coord, Reading)>;

/// How a drill chooses its next position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Move to the highest-valued cell. Ties go to the first candidate.
    #[default]
    Max,
    /// Move to a uniformly random candidate.
    Random,
}

impl Strategy {
    /// Pick a coordinate from `neighbourhood`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] if the neighbourhood is empty.
    pub fn choose<R: Rng + ?Sized>(
        self,
        neighbourhood: &[(Coord, Reading)],
        rng: &mut R,
    ) -> Result<Coord, CoreError> {
        let choice = match self {
            Self::Max => best_of(neighbourhood),
            Self::Random => neighbourhood.choose(rng).map(|(at, _)| *at),
        };
        choice.ok_or_else(|| {
            CoreError::InvalidState(format!("{self:?} strategy given an empty neighbourhood"))
        })
    }
}

fn best_of(neighbourhood: &[(Coord, Reading)]) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;
    for &(at, reading) in neighbourhood {
        match best {
            Some((_, top)) if reading.rank() <= top => {}
            _ => best = Some((at, reading.rank())),
        }
    }
    best.map(|(at, _)| at)
}
