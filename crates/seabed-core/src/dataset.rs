//! Everything loaded from the data directory at startup.
//!
//! A [`Dataset`] owns the world grid and every configured resource series,
//! each already masked by land, plus the averaged map of each series. It is
//! read-only after construction and shared across requests.

use std::collections::BTreeMap;

use seabed_types::{LayerSummary, ResourceKind};
use seabed_world::{ResourceMap, ResourceSeries, WorldGrid};
use tracing::{info, warn};

use crate::config::DataConfig;
use crate::error::CoreError;

#[derive(Debug, Clone)]
struct Layer {
    series: ResourceSeries,
    average: ResourceMap,
}

/// The world plus its land-masked resource layers.
#[derive(Debug, Clone)]
pub struct Dataset {
    world: WorldGrid,
    layers: BTreeMap<ResourceKind, Layer>,
}

impl Dataset {
    /// Load the world and every configured layer from disk.
    ///
    /// Layers with no matching snapshot files are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::World`] if the world or any snapshot fails to
    /// load.
    pub fn load(config: &DataConfig) -> Result<Self, CoreError> {
        let world = WorldGrid::load(&config.world_path(), config.width, config.height)?;

        let mut series = Vec::with_capacity(config.layers.len());
        for layer in &config.layers {
            let loaded = ResourceSeries::load(
                &config.dir,
                &layer.pattern,
                layer.kind,
                config.width,
                config.height,
            )?;
            if loaded.is_empty() {
                warn!(resource = %layer.kind, pattern = %layer.pattern, "Layer skipped, no snapshots");
                continue;
            }
            series.push(loaded);
        }

        Self::from_parts(world, series)
    }

    /// Assemble a dataset from loaded parts, masking each series by land.
    ///
    /// Empty series are dropped; a kind given twice keeps the later series.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::World`] if any map does not match the world size.
    pub fn from_parts(world: WorldGrid, series: Vec<ResourceSeries>) -> Result<Self, CoreError> {
        let mut layers = BTreeMap::new();
        for mut series in series {
            if series.is_empty() {
                continue;
            }
            series.mask_land(&world)?;
            let average = series.average()?;
            let kind = series.kind();
            if layers.insert(kind, Layer { series, average }).is_some() {
                warn!(resource = %kind, "Layer configured twice, keeping the later one");
            }
        }

        info!(
            width = world.width(),
            height = world.height(),
            layers = layers.len(),
            "Dataset ready"
        );
        Ok(Self { world, layers })
    }

    /// The world grid.
    pub const fn world(&self) -> &WorldGrid {
        &self.world
    }

    /// Loaded layer kinds, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.layers.keys().copied()
    }

    /// Kind and day count of every loaded layer.
    pub fn summaries(&self) -> Vec<LayerSummary> {
        self.layers
            .iter()
            .map(|(kind, layer)| LayerSummary {
                resource: *kind,
                days: layer.series.len(),
            })
            .collect()
    }

    /// The full series for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the layer was not loaded.
    pub fn series(&self, kind: ResourceKind) -> Result<&ResourceSeries, CoreError> {
        self.layer(kind).map(|layer| &layer.series)
    }

    /// The map for `kind` on a 1-indexed `day`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown layer or a day outside
    /// the series.
    pub fn day(&self, kind: ResourceKind, day: usize) -> Result<&ResourceMap, CoreError> {
        let series = self.series(kind)?;
        series.day(day).ok_or_else(|| {
            CoreError::NotFound(format!(
                "{kind} day {day} (layer has days 1..={})",
                series.len()
            ))
        })
    }

    /// The averaged map for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the layer was not loaded.
    pub fn average(&self, kind: ResourceKind) -> Result<&ResourceMap, CoreError> {
        self.layer(kind).map(|layer| &layer.average)
    }

    fn layer(&self, kind: ResourceKind) -> Result<&Layer, CoreError> {
        self.layers
            .get(&kind)
            .ok_or_else(|| CoreError::NotFound(format!("resource layer {kind}")))
    }
}
