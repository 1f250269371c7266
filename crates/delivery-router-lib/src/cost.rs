/// Default delivery price per kilometre, in COP.
pub const DEFAULT_COST_PER_KM: f64 = 1500.0;

/// Default average travel speed, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 60.0;

/// Pure mapping from a route distance to monetary cost and travel time.
///
/// Stateless apart from its two constants. An infinite distance (the
/// unreachable sentinel) propagates to an infinite cost and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    pub cost_per_km: f64,
    pub average_speed_kmh: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            cost_per_km: DEFAULT_COST_PER_KM,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

impl CostModel {
    /// Create a model with explicit constants.
    pub fn new(cost_per_km: f64, average_speed_kmh: f64) -> Self {
        Self {
            cost_per_km,
            average_speed_kmh,
        }
    }

    /// Monetary cost of travelling `distance` kilometres.
    pub fn cost(&self, distance: f64) -> f64 {
        distance * self.cost_per_km
    }

    /// Travel time in hours for `distance` kilometres at the average speed.
    pub fn time(&self, distance: f64) -> f64 {
        distance / self.average_speed_kmh
    }
}
