//! Search controller tuning.

use std::f64::consts::FRAC_PI_4;

use crate::error::SearchError;

/// Tuning parameters for a [`SearchController`](crate::SearchController).
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Radius range for search waypoints, meters. Default: 3 to 5.
    pub search_radius: (f64, f64),
    /// Radius range when no pickup point is available. Default: 1 to 3.
    pub pickup_radius: (f64, f64),
    /// Heading is jittered by up to this many radians either way.
    /// Default: pi/4.
    pub heading_jitter: f64,
    /// Distance at which the robot counts as having reached its waypoint.
    /// Default: 0.3.
    pub arrival_tolerance: f64,
    /// Calls that reuse the current waypoint before a new one is drawn.
    /// Default: 5.
    pub max_attempts: u32,
    /// Extra draws allowed when a candidate lands on a visited cell.
    /// Default: 8.
    pub redraw_limit: u32,
}

impl SearchConfig {
    /// Default search radius range.
    pub const DEFAULT_SEARCH_RADIUS: (f64, f64) = (3.0, 5.0);
    /// Default pickup fallback radius range.
    pub const DEFAULT_PICKUP_RADIUS: (f64, f64) = (1.0, 3.0);
    /// Default arrival tolerance.
    pub const DEFAULT_ARRIVAL_TOLERANCE: f64 = 0.3;
    /// Default attempt limit.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    /// Default redraw limit.
    pub const DEFAULT_REDRAW_LIMIT: u32 = 8;

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_range("search_radius", self.search_radius)?;
        check_range("pickup_radius", self.pickup_radius)?;
        if !self.heading_jitter.is_finite() || self.heading_jitter < 0.0 {
            return Err(SearchError::InvalidConfig {
                param: "heading_jitter",
                reason: format!("must be finite and >= 0, got {}", self.heading_jitter),
            });
        }
        if !self.arrival_tolerance.is_finite() || self.arrival_tolerance < 0.0 {
            return Err(SearchError::InvalidConfig {
                param: "arrival_tolerance",
                reason: format!("must be finite and >= 0, got {}", self.arrival_tolerance),
            });
        }
        if self.max_attempts == 0 {
            return Err(SearchError::InvalidConfig {
                param: "max_attempts",
                reason: format!("must be at least 1, got {}", self.max_attempts),
            });
        }
        Ok(())
    }
}

fn check_range(param: &'static str, (lo, hi): (f64, f64)) -> Result<(), SearchError> {
    if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo > hi {
        return Err(SearchError::InvalidConfig {
            param,
            reason: format!("expected 0 <= lo <= hi, got ({lo}, {hi})"),
        });
    }
    Ok(())
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            search_radius: Self::DEFAULT_SEARCH_RADIUS,
            pickup_radius: Self::DEFAULT_PICKUP_RADIUS,
            heading_jitter: FRAC_PI_4,
            arrival_tolerance: Self::DEFAULT_ARRIVAL_TOLERANCE,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            redraw_limit: Self::DEFAULT_REDRAW_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_radius_rejected() {
        let config = SearchConfig {
            search_radius: (5.0, 3.0),
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig {
                param: "search_radius",
                ..
            })
        ));
    }

    #[test]
    fn nan_jitter_rejected() {
        let config = SearchConfig {
            heading_jitter: f64::NAN,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_attempts_rejected() {
        let config = SearchConfig {
            max_attempts: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
