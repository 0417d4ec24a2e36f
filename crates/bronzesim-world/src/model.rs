//! Resource renewal rates and seasonal modifiers.
//!
//! A [`RenewModel`] holds the configured per-day renewal fraction for
//! every resource. Both regeneration paths consume it: the per-cell pass
//! over loaded chunks and the aggregate resource pool. Seasonal
//! multipliers throttle fish and grain outside their productive seasons;
//! every other resource renews at its flat rate year round.

use bronzesim_types::{Resource, Season};

/// Per-day renewal fraction for each resource kind.
///
/// A rate of `r` adds `r * 255` density points to a producing cell per
/// day (before the seasonal multiplier), and the matching amount scaled
/// by population to the aggregate pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenewModel {
    rates: [f32; Resource::COUNT],
}

impl RenewModel {
    /// Build a model from per-resource rates in ordinal order.
    pub const fn new(rates: [f32; Resource::COUNT]) -> Self {
        Self { rates }
    }

    /// The per-day renewal fraction for a resource.
    pub fn rate(&self, resource: Resource) -> f32 {
        self.rates.get(resource.index()).copied().unwrap_or(0.0)
    }
}

/// Seasonal throttle on a resource's renewal rate.
///
/// Fish slow to 70% in winter; grain drops to 30% in winter and 70% in
/// spring, with summer and autumn at full rate. All other resources are
/// unaffected by season.
pub const fn season_multiplier(resource: Resource, season: Season) -> f32 {
    match resource {
        Resource::Fish => match season {
            Season::Winter => 0.70,
            _ => 1.0,
        },
        Resource::Grain => match season {
            Season::Winter => 0.30,
            Season::Spring => 0.70,
            Season::Summer | Season::Autumn => 1.0,
        },
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(rate: f32) -> RenewModel {
        RenewModel::new([rate; Resource::COUNT])
    }

    #[test]
    fn rates_are_stored_per_resource() {
        let mut rates = [0.0; Resource::COUNT];
        if let Some(slot) = rates.get_mut(Resource::Wood.index()) {
            *slot = 0.03;
        }
        let model = RenewModel::new(rates);
        assert!((model.rate(Resource::Wood) - 0.03).abs() < f32::EPSILON);
        assert!(model.rate(Resource::Fish).abs() < f32::EPSILON);
    }

    #[test]
    fn fish_slow_in_winter_only() {
        assert!((season_multiplier(Resource::Fish, Season::Winter) - 0.70).abs() < f32::EPSILON);
        for season in [Season::Spring, Season::Summer, Season::Autumn] {
            assert!((season_multiplier(Resource::Fish, season) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn grain_tracks_the_growing_season() {
        assert!((season_multiplier(Resource::Grain, Season::Winter) - 0.30).abs() < f32::EPSILON);
        assert!((season_multiplier(Resource::Grain, Season::Spring) - 0.70).abs() < f32::EPSILON);
        assert!((season_multiplier(Resource::Grain, Season::Summer) - 1.0).abs() < f32::EPSILON);
        assert!((season_multiplier(Resource::Grain, Season::Autumn) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn other_resources_ignore_season() {
        for season in [Season::Spring, Season::Summer, Season::Autumn, Season::Winter] {
            assert!((season_multiplier(Resource::Copper, season) - 1.0).abs() < f32::EPSILON);
            assert!((season_multiplier(Resource::Religion, season) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn uniform_model_is_uniform() {
        let model = uniform(0.5);
        for resource in Resource::ALL {
            assert!((model.rate(resource) - 0.5).abs() < f32::EPSILON);
        }
    }
}
