//! The search/pickup waypoint controller.
//!
//! # Attempt counter
//!
//! Each call to [`SearchController::do_work`] either repeats the current
//! waypoint or draws a new one:
//!
//! - Reaching the waypoint (within `arrival_tolerance`) resets the
//!   counter to 0.
//! - While `0 < attempts < max_attempts` the previous result is returned
//!   and the counter advances. A reported successful pickup pulls it back
//!   to 1.
//! - Otherwise the counter is set to 1 and a new waypoint is drawn.
//!
//! # Drawing a waypoint
//!
//! The base heading is `atan(y / x)` of the current location, kept from
//! the previous draw when `x == 0`. A candidate sits at a uniform radius
//! from the center location, at the base heading jittered uniformly by
//! up to `heading_jitter`. Candidates on visited cells are redrawn up to
//! `redraw_limit` times; the last candidate is used if all are visited.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::smallvec;
use tracing::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::point::{Point, Waypoints};
use crate::port::{NoPickups, PickupSource, StatusPort};

/// What the robot is looking for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Explore the area around the center.
    #[default]
    Search,
    /// Head to a pickup location.
    Pickup,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Pickup => write!(f, "pickup"),
        }
    }
}

/// Output of one controller step.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Waypoints to drive to, in order.
    pub waypoints: Waypoints,
    /// Gripper finger angle to hold while driving, radians.
    pub finger_angle: f64,
    /// Gripper wrist angle to hold while driving, radians.
    pub wrist_angle: f64,
    /// Whether the behaviour stack should reset.
    pub reset: bool,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            waypoints: Waypoints::new(),
            finger_angle: FRAC_PI_2,
            wrist_angle: FRAC_PI_4,
            reset: false,
        }
    }
}

/// Produces waypoints for searching and pickup.
pub struct SearchController {
    config: SearchConfig,
    mode: SearchMode,
    rng: ChaCha8Rng,
    current: Point,
    center: Point,
    heading: f64,
    attempts: u32,
    successful_pickup: bool,
    result: SearchResult,
    pickups: Box<dyn PickupSource>,
    status: Option<Box<dyn StatusPort>>,
}

/// Builder for [`SearchController`].
pub struct SearchControllerBuilder {
    config: SearchConfig,
    mode: SearchMode,
    pickups: Box<dyn PickupSource>,
    status: Option<Box<dyn StatusPort>>,
}

impl SearchControllerBuilder {
    /// Replace the whole tuning config.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the starting mode (default: search).
    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the pickup source (default: [`NoPickups`]).
    pub fn pickup_source(mut self, source: impl PickupSource + 'static) -> Self {
        self.pickups = Box::new(source);
        self
    }

    /// Consult and update grid status through `port`.
    pub fn status_port(mut self, port: impl StatusPort + 'static) -> Self {
        self.status = Some(Box::new(port));
        self
    }

    /// Build the controller, validating the config.
    pub fn build(self) -> Result<SearchController, SearchError> {
        self.config.validate()?;
        Ok(SearchController {
            rng: ChaCha8Rng::seed_from_u64(self.config.seed),
            config: self.config,
            mode: self.mode,
            current: Point::default(),
            center: Point::default(),
            heading: 0.0,
            attempts: 0,
            successful_pickup: false,
            result: SearchResult::default(),
            pickups: self.pickups,
            status: self.status,
        })
    }
}

impl SearchController {
    /// A builder with default tuning, search mode, no pickups and no grid.
    pub fn builder() -> SearchControllerBuilder {
        SearchControllerBuilder {
            config: SearchConfig::default(),
            mode: SearchMode::Search,
            pickups: Box::new(NoPickups),
            status: None,
        }
    }

    /// Advance one step and return the waypoint to follow.
    pub fn do_work(&mut self) -> SearchResult {
        if let Some(first) = self.result.waypoints.first() {
            if first.distance(&self.current) < self.config.arrival_tolerance {
                trace!(waypoint = %first, "waypoint reached");
                self.attempts = 0;
            }
        }

        if self.attempts > 0 && self.attempts < self.config.max_attempts {
            self.attempts += 1;
            if self.successful_pickup {
                self.successful_pickup = false;
                self.attempts = 1;
            }
            return self.result.clone();
        }

        self.attempts = 1;
        let next = match self.mode {
            SearchMode::Search => self.draw_waypoint(self.config.search_radius),
            SearchMode::Pickup => match self.pickups.next_pickup() {
                Some(pickup) => pickup,
                None => self.draw_waypoint(self.config.pickup_radius),
            },
        };
        debug!(mode = %self.mode, waypoint = %next, "new waypoint");
        self.result.waypoints = smallvec![next];
        self.result.clone()
    }

    /// Switch between searching and pickup.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// The current mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Update the robot's location and mark its cell visited.
    ///
    /// Grid errors are logged and otherwise ignored; navigation does not
    /// stop because the grid is unreachable.
    pub fn set_current_location(&mut self, location: Point) {
        self.current = location;
        if let Some(port) = self.status.as_mut() {
            if let Err(e) = port.mark_visited(location) {
                warn!(%location, error = %e, "could not mark cell visited");
            }
        }
    }

    /// Move the center, shifting the pending waypoint by the same delta.
    pub fn set_center_location(&mut self, center: Point) {
        let dx = center.x - self.center.x;
        let dy = center.y - self.center.y;
        self.center = center;
        if let Some(last) = self.result.waypoints.last_mut() {
            last.x += dx;
            last.y += dy;
        }
    }

    /// Report that a pickup succeeded.
    pub fn set_successful_pickup(&mut self) {
        self.successful_pickup = true;
    }

    /// Clear the reset request on the result.
    pub fn reset(&mut self) {
        self.result.reset = false;
    }

    /// The search controller always has work.
    pub fn has_work(&self) -> bool {
        true
    }

    /// The search controller never interrupts other behaviours.
    pub fn should_interrupt(&mut self) -> bool {
        false
    }

    /// Current value of the attempt counter.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The last produced result.
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// The current center location.
    pub fn center(&self) -> Point {
        self.center
    }

    fn draw_waypoint(&mut self, radius: (f64, f64)) -> Point {
        if self.current.x != 0.0 {
            self.heading = (self.current.y / self.current.x).atan();
        }
        let jitter = self.config.heading_jitter;

        let mut candidate = self.candidate(radius, jitter);
        for redraw in 0..self.config.redraw_limit {
            if !self.visited(candidate) {
                return candidate;
            }
            trace!(redraw, %candidate, "candidate on visited cell");
            candidate = self.candidate(radius, jitter);
        }
        if self.visited(candidate) {
            debug!(%candidate, "no unvisited candidate within redraw limit");
        }
        candidate
    }

    // Ranges are inclusive so a fixed radius or zero jitter is valid.
    fn candidate(&mut self, (lo, hi): (f64, f64), jitter: f64) -> Point {
        let r = self.rng.random_range(lo..=hi);
        let angle = self.heading + self.rng.random_range(-jitter..=jitter);
        self.center.offset_polar(r, angle)
    }

    fn visited(&mut self, at: Point) -> bool {
        let Some(port) = self.status.as_mut() else {
            return false;
        };
        port.is_visited(at).unwrap_or_else(|e| {
            warn!(%at, error = %e, "visited lookup failed");
            false
        })
    }
}
