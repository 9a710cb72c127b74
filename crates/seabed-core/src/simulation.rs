//! Day-by-day drill orchestration.
//!
//! A [`DrillPlan`] is prepared once from the [`Dataset`] and the configured
//! scenario. It holds the target series, the optional preserved series, and
//! the *perceived* series the drills steer by (target minus preserved).
//!
//! Drill state never lives in the plan. Each caller starts its own
//! [`DrillRun`] from a seed and steps it forward, so replaying to day `n`
//! with the same seed always gives the same drills:
//!
//! - Day 1: drill 1 is placed on the best cell of the averaged perceived
//!   map; any further drills land on random populated cells.
//! - Day `n > 1`: every drill moves on perceived day `n`, collects target
//!   day `n`, and destroys preserved day `n` when that day exists.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use seabed_types::{DrillRecord, ResourceKind};
use seabed_world::{ResourceMap, ResourceSeries};
use tracing::debug;

use crate::config::DrillConfig;
use crate::dataset::Dataset;
use crate::drill::Drill;
use crate::error::CoreError;
use crate::strategy::Strategy;

/// The layers and policy one drill scenario runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Layer the drills collect.
    pub target: ResourceKind,
    /// Layer that discounts perceived value and is tallied as destroyed.
    pub preserve: Option<ResourceKind>,
    /// Number of drills, at least one.
    pub count: usize,
    /// Movement strategy shared by every drill.
    pub strategy: Strategy,
    /// Default seed for runs.
    pub seed: u64,
}

impl From<&DrillConfig> for Scenario {
    fn from(config: &DrillConfig) -> Self {
        Self {
            target: config.target,
            preserve: config.preserve,
            count: config.count,
            strategy: config.strategy,
            seed: config.seed,
        }
    }
}

/// Prepared, read-only maps for a scenario.
#[derive(Debug, Clone)]
pub struct DrillPlan {
    scenario: Scenario,
    target: ResourceSeries,
    preserve: Option<ResourceSeries>,
    perceived: Vec<ResourceMap>,
    anchor: ResourceMap,
}

/// The state of every drill after some day, owned by whoever is running it.
#[derive(Debug, Clone)]
pub struct DrillRun {
    day: usize,
    seed: u64,
    drills: Vec<Drill>,
    rng: SmallRng,
}

impl DrillRun {
    /// The 1-indexed day the drills reflect.
    pub const fn day(&self) -> usize {
        self.day
    }

    /// Seed the run was started with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The drills, in placement order.
    pub fn drills(&self) -> &[Drill] {
        &self.drills
    }

    /// Serialized drill states, in placement order.
    pub fn records(&self) -> Vec<DrillRecord> {
        self.drills.iter().map(Drill::record).collect()
    }
}

impl DrillPlan {
    /// Build the perceived series and anchor map for `scenario`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the target or preserved layer was
    /// not loaded, [`CoreError::InvalidState`] if `count` is zero, and
    /// [`CoreError::World`] if the preserved maps differ in size.
    pub fn prepare(dataset: &Dataset, scenario: Scenario) -> Result<Self, CoreError> {
        if scenario.count == 0 {
            return Err(CoreError::InvalidState(
                "a drill scenario needs at least one drill".to_owned(),
            ));
        }

        let target = dataset.series(scenario.target)?.clone();
        let preserve = scenario
            .preserve
            .map(|kind| dataset.series(kind).cloned())
            .transpose()?;

        let mut perceived = target.maps().to_vec();
        if let Some(preserve) = &preserve {
            for (map, discount) in perceived.iter_mut().zip(preserve.maps()) {
                map.mask_preserved(discount)?;
            }
        }
        let anchor = seabed_world::average(&perceived, scenario.target)?;

        Ok(Self {
            scenario,
            target,
            preserve,
            perceived,
            anchor,
        })
    }

    /// The scenario this plan runs.
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Number of simulated days available.
    pub fn days(&self) -> usize {
        self.target.len()
    }

    /// Place the drills for day 1.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] if the averaged perceived map has
    /// no populated cell to start on.
    pub fn start(&self, seed: u64) -> Result<DrillRun, CoreError> {
        let mut rng = SmallRng::seed_from_u64(seed);

        let anchor = self.anchor.max_cell().ok_or_else(|| {
            CoreError::InvalidState(format!("no {} anywhere to place a drill", self.scenario.target))
        })?;
        let candidates = self.anchor.present_cells();

        let mut drills = Vec::with_capacity(self.scenario.count);
        drills.push(Drill::new(anchor, self.scenario.strategy));
        for _ in 1..self.scenario.count {
            let start = candidates.choose(&mut rng).copied().unwrap_or(anchor);
            drills.push(Drill::new(start, self.scenario.strategy));
        }

        debug!(seed, drills = drills.len(), %anchor, "Drills placed");
        Ok(DrillRun {
            day: 1,
            seed,
            drills,
            rng,
        })
    }

    /// Advance `run` by one day.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the run is already on the last
    /// day, or [`CoreError::InvalidState`] if a drill is stranded.
    pub fn step(&self, run: &mut DrillRun) -> Result<(), CoreError> {
        let next = run.day.saturating_add(1);
        let index = run.day;

        let (Some(perceived), Some(target)) =
            (self.perceived.get(index), self.target.maps().get(index))
        else {
            return Err(CoreError::NotFound(format!(
                "day {next} (scenario has days 1..={})",
                self.days()
            )));
        };
        let preserve = self.preserve.as_ref().and_then(|p| p.maps().get(index));

        for (n, drill) in run.drills.iter_mut().enumerate() {
            drill.move_on(perceived, &mut run.rng)?;
            drill.collect(target)?;
            if let Some(preserve) = preserve {
                drill.destroy(preserve);
            }
            debug!(
                day = next,
                drill = n,
                position = %drill.position(),
                collected = drill.collected(),
                destroyed = drill.destroyed(),
                "Drill stepped"
            );
        }

        run.day = next;
        Ok(())
    }

    /// Start a fresh run and step it through the 1-indexed `day`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if `day` is zero or past the last
    /// snapshot, plus any error from [`Self::start`] or [`Self::step`].
    pub fn simulate_through(&self, day: usize, seed: u64) -> Result<DrillRun, CoreError> {
        if day == 0 || day > self.days() {
            return Err(CoreError::NotFound(format!(
                "day {day} (scenario has days 1..={})",
                self.days()
            )));
        }

        let mut run = self.start(seed)?;
        while run.day < day {
            self.step(&mut run)?;
        }
        Ok(run)
    }
}
