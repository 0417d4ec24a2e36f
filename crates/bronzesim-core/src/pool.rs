//! The aggregate resource pool.
//!
//! The gather path draws on a single integer per resource rather than
//! the per-cell chunk densities: the pool stands in for aggregate
//! availability, sized to the agent population, while the per-cell
//! densities keep driving map presentation and the chunk regeneration
//! semantics. One gathered unit costs 20 pool points.
//!
//! The pool is seeded with roughly thirty days of regeneration at scale
//! and renewed daily with the same seasonal multipliers as the chunk
//! pass.

use bronzesim_types::{Resource, Season};
use bronzesim_world::{RenewModel, season_multiplier};

/// Pool points consumed per gathered unit.
const POINTS_PER_UNIT: u64 = 20;
/// Days of regeneration the pool starts with.
const STOCK_DAYS: f64 = 30.0;
/// Pool points per unit of renewal rate.
const DENSITY_SPAN: f64 = 255.0;
/// Scale floor for tiny populations.
const MIN_SCALE: u64 = 1000;
/// Scale per agent.
const SCALE_PER_AGENT: u64 = 80;

/// Aggregate per-resource availability, in pool points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePool {
    amounts: [u64; Resource::COUNT],
    scale: u64,
}

impl ResourcePool {
    /// Seed the pool for a population: about [`STOCK_DAYS`] days of
    /// regeneration at `max(1000, 80 * agents)` scale.
    pub fn new(model: &RenewModel, agent_count: u32) -> Self {
        let scale = u64::from(agent_count)
            .saturating_mul(SCALE_PER_AGENT)
            .max(MIN_SCALE);
        let mut amounts = [0_u64; Resource::COUNT];
        for resource in Resource::ALL {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seeded =
                (f64::from(model.rate(resource)) * DENSITY_SPAN * STOCK_DAYS * scale as f64) as u64;
            if let Some(slot) = amounts.get_mut(resource.index()) {
                *slot = seeded;
            }
        }
        Self { amounts, scale }
    }

    /// Apply one day of seasonal regeneration.
    pub fn regenerate(&mut self, model: &RenewModel, season: Season) {
        for resource in Resource::ALL {
            let mul = season_multiplier(resource, season);
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let gain = (f64::from(model.rate(resource)) * f64::from(mul) * DENSITY_SPAN
                * self.scale as f64) as u64;
            if let Some(slot) = self.amounts.get_mut(resource.index()) {
                *slot = slot.saturating_add(gain);
            }
        }
    }

    /// Draw up to `want` units, limited by what the pool can cover.
    ///
    /// Returns the units actually taken; the pool loses 20 points each.
    pub fn take(&mut self, resource: Resource, want: u32) -> u32 {
        let Some(slot) = self.amounts.get_mut(resource.index()) else {
            return 0;
        };
        let affordable = slot.checked_div(POINTS_PER_UNIT).unwrap_or(0);
        let take = u64::from(want).min(affordable);
        // take <= *slot / 20, so the subtraction never saturates.
        *slot = slot.saturating_sub(take.saturating_mul(POINTS_PER_UNIT));
        #[allow(clippy::cast_possible_truncation)]
        let taken = take as u32;
        taken
    }

    /// Current pool points for a resource.
    pub fn amount(&self, resource: Resource) -> u64 {
        self.amounts.get(resource.index()).copied().unwrap_or(0)
    }

    /// The population scale factor the pool was sized with.
    pub const fn scale(&self) -> u64 {
        self.scale
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    fn model_with(resource: Resource, rate: f32) -> RenewModel {
        let mut rates = [0.0; Resource::COUNT];
        if let Some(slot) = rates.get_mut(resource.index()) {
            *slot = rate;
        }
        RenewModel::new(rates)
    }

    #[test]
    fn seeding_uses_the_population_scale() {
        // 0.25 is exactly representable, so the seeding is exact too.
        let model = model_with(Resource::Fish, 0.25);
        let pool = ResourcePool::new(&model, 220);
        // scale = max(1000, 220 * 80) = 17600
        assert_eq!(pool.scale(), 17600);
        // 0.25 * 255 * 30 * 17600 = 33_660_000
        assert_eq!(pool.amount(Resource::Fish), 33_660_000);
        assert_eq!(pool.amount(Resource::Wood), 0);
    }

    #[test]
    fn tiny_populations_use_the_scale_floor() {
        let model = model_with(Resource::Fish, 0.25);
        let pool = ResourcePool::new(&model, 1);
        assert_eq!(pool.scale(), 1000);
        // 0.25 * 255 * 30 * 1000 = 1_912_500
        assert_eq!(pool.amount(Resource::Fish), 1_912_500);
    }

    #[test]
    fn take_is_limited_by_the_pool() {
        let model = model_with(Resource::Fish, 0.25);
        let mut pool = ResourcePool::new(&model, 1);
        let before = pool.amount(Resource::Fish);
        let got = pool.take(Resource::Fish, 5);
        assert_eq!(got, 5);
        assert_eq!(pool.amount(Resource::Fish), before - 5 * 20);
    }

    #[test]
    fn take_caps_at_affordable_units() {
        let model = model_with(Resource::Tin, 0.25);
        let mut pool = ResourcePool::new(&model, 1);
        // 1_912_500 points cover exactly 95_625 units.
        assert_eq!(pool.take(Resource::Tin, 200_000), 95_625);
        assert_eq!(pool.amount(Resource::Tin), 0);
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let model = model_with(Resource::Fish, 0.0);
        let mut pool = ResourcePool::new(&model, 10);
        assert_eq!(pool.take(Resource::Fish, 3), 0);
        assert_eq!(pool.amount(Resource::Fish), 0);
    }

    #[test]
    fn winter_throttles_fish_and_grain_regeneration() {
        let mut rates = [0.0; Resource::COUNT];
        for resource in [Resource::Fish, Resource::Grain, Resource::Wood] {
            if let Some(slot) = rates.get_mut(resource.index()) {
                *slot = 0.10;
            }
        }
        let model = RenewModel::new(rates);
        let start = ResourcePool::new(&model, 1);
        let mut summer = start.clone();
        let mut winter = start.clone();
        summer.regenerate(&model, Season::Summer);
        winter.regenerate(&model, Season::Winter);

        let gain = |pool: &ResourcePool, r: Resource| pool.amount(r) - start.amount(r);
        // Winter slows fish to 70% and grain to 30% of the summer gain.
        assert!(gain(&winter, Resource::Fish) < gain(&summer, Resource::Fish));
        assert!(gain(&winter, Resource::Grain) < gain(&winter, Resource::Fish));
        assert!(gain(&winter, Resource::Grain) > 0);
        // Wood ignores the season.
        assert_eq!(gain(&winter, Resource::Wood), gain(&summer, Resource::Wood));
    }
}
