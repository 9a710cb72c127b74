//! Daily resource series and snapshot file discovery.
//!
//! Each resource kind ships as one snapshot file per day, e.g.
//! `oil_data_day_1.csv` .. `oil_data_day_30.csv`. Files are discovered by a
//! filename pattern (`*` matches any run of characters, `?` any single
//! character) and ordered by the first run of digits in the filename, so
//! `day_10` sorts after `day_9`.

use std::path::{Path, PathBuf};

use seabed_types::ResourceKind;
use tracing::{info, warn};

use crate::error::WorldError;
use crate::resource_map::{self, ResourceMap};
use crate::world_grid::WorldGrid;

/// Ordered daily maps for one resource kind. Index 0 is the earliest day.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSeries {
    kind: ResourceKind,
    maps: Vec<ResourceMap>,
}

impl ResourceSeries {
    /// Wrap maps that are already in day order.
    pub const fn new(kind: ResourceKind, maps: Vec<ResourceMap>) -> Self {
        Self { kind, maps }
    }

    /// Discover and load every snapshot in `dir` matching `pattern`.
    ///
    /// A series with no matching files is returned empty.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Io`] if the directory cannot be listed, and
    /// [`WorldError::Parse`] if a matching filename carries no day number
    /// or any snapshot is malformed.
    pub fn load(
        dir: &Path,
        pattern: &str,
        kind: ResourceKind,
        width: usize,
        height: usize,
    ) -> Result<Self, WorldError> {
        let files = discover(dir, pattern)?;
        if files.is_empty() {
            warn!(dir = %dir.display(), pattern, resource = %kind, "No snapshot files matched");
        }

        let maps = files
            .iter()
            .map(|(_, path)| ResourceMap::load(path, kind, width, height))
            .collect::<Result<Vec<_>, _>>()?;

        info!(resource = %kind, days = maps.len(), "Resource series loaded");
        Ok(Self { kind, maps })
    }

    /// The resource kind of every map in the series.
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Number of days in the series.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether the series holds no days.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// All maps, earliest first.
    pub fn maps(&self) -> &[ResourceMap] {
        &self.maps
    }

    /// The map for a 1-indexed `day`.
    pub fn day(&self, day: usize) -> Option<&ResourceMap> {
        day.checked_sub(1).and_then(|index| self.maps.get(index))
    }

    /// Apply the land mask to every day.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DimensionMismatch`] if any map differs in size
    /// from the world.
    pub fn mask_land(&mut self, world: &WorldGrid) -> Result<(), WorldError> {
        for map in &mut self.maps {
            map.mask_land(world)?;
        }
        Ok(())
    }

    /// Average the whole series into one map.
    ///
    /// # Errors
    ///
    /// See [`resource_map::average`].
    pub fn average(&self) -> Result<ResourceMap, WorldError> {
        resource_map::average(&self.maps, self.kind)
    }
}

/// List the files in `dir` whose names match `pattern`, ordered by day.
///
/// Files with equal day numbers are ordered by path.
///
/// # Errors
///
/// Returns [`WorldError::Io`] if `dir` cannot be read, or
/// [`WorldError::Parse`] if a matching filename contains no digits.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<(u32, PathBuf)>, WorldError> {
    let io_err = |source| WorldError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !matches_pattern(pattern, name) {
            continue;
        }
        let day = day_number(name)
            .ok_or_else(|| WorldError::parse(&path, 0, "filename carries no day number"))?;
        files.push((day, path));
    }

    files.sort();
    Ok(files)
}

/// The first run of ASCII digits in `file_name`, parsed as a day number.
pub fn day_number(file_name: &str) -> Option<u32> {
    let start = file_name.find(|c: char| c.is_ascii_digit())?;
    let rest = file_name.get(start..)?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest.get(..end)?.parse().ok()
}

/// Match `name` against a wildcard `pattern` (`*` and `?`).
pub fn matches_pattern(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0_usize, 0_usize);
    // Position of the last `*` seen and the name index it was tried at.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match (pattern.get(p), name.get(n)) {
            (Some('*'), _) => {
                backtrack = Some((p, n));
                p = p.saturating_add(1);
            }
            (Some(pc), Some(nc)) if *pc == '?' || pc == nc => {
                p = p.saturating_add(1);
                n = n.saturating_add(1);
            }
            _ => match backtrack {
                Some((star, tried)) => {
                    let next = tried.saturating_add(1);
                    backtrack = Some((star, next));
                    p = star.saturating_add(1);
                    n = next;
                }
                None => return false,
            },
        }
    }

    pattern.get(p..).is_some_and(|rest| rest.iter().all(|c| *c == '*'))
}
