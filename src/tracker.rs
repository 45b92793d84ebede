use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};
use thiserror::Error;

use crate::{
    cfg::Config,
    location::GeoLocation,
    prelude::{Duration, Epoch},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons for disregarding a batch of location samples.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    #[error("no location samples")]
    NoSamples,
    #[error("invalid horizontal accuracy {0}m")]
    InvalidAccuracy(f64),
    #[error("horizontal accuracy {0}m exceeds limit")]
    Inaccurate(f64),
    #[error("stale fix (age: {0})")]
    Stale(Duration),
    #[error("fix dated {0} in the future")]
    FutureFix(Duration),
}

/// Outcome of an accepted [LocationTracker::update].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrackerEvent {
    /// Very first fix ever stored
    Initial(GeoLocation),
    /// Fix stored, the user did not move significantly
    Updated(GeoLocation),
    /// Fix stored, the user moved further than [Config::reload_distance_m]:
    /// points of interest should be reloaded.
    Reload(GeoLocation),
}

impl TrackerEvent {
    /// Returns the [GeoLocation] that was stored
    pub fn location(&self) -> GeoLocation {
        match self {
            Self::Initial(fix) | Self::Updated(fix) | Self::Reload(fix) => *fix,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct State {
    user_location: Option<GeoLocation>,
    last_update: Option<Epoch>,
}

/// [LocationTracker] holds the last known good fix.
/// It is safe to share between threads: readers get snapshots by value
/// and updates are serialized.
#[derive(Debug, Default)]
pub struct LocationTracker {
    cfg: Config,
    state: RwLock<State>,
}

impl LocationTracker {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            state: RwLock::new(State::default()),
        }
    }

    /// [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    // poisoned locks are recovered, State only holds plain values
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Last known good fix
    pub fn user_location(&self) -> Option<GeoLocation> {
        self.read().user_location
    }

    /// Instant of the last accepted update
    pub fn last_update(&self) -> Option<Epoch> {
        self.read().last_update
    }

    /// Stores `fix` as last known good fix, with no filtering.
    pub fn set_user_location(&self, fix: GeoLocation, now: Epoch) {
        let mut state = self.write();
        state.user_location = Some(fix);
        state.last_update = Some(now);
    }

    /// Forgets the last known fix.
    pub fn reset(&self) {
        *self.write() = State::default();
    }

    /// Verifies that `fix` is accurate and recent enough at `now`.
    fn validate(&self, fix: &GeoLocation, now: Epoch) -> Result<(), Rejection> {
        if !fix.has_valid_accuracy() {
            return Err(Rejection::InvalidAccuracy(fix.horizontal_accuracy_m));
        }
        if fix.horizontal_accuracy_m > self.cfg.max_horizontal_accuracy_m {
            return Err(Rejection::Inaccurate(fix.horizontal_accuracy_m));
        }
        let age = fix.age(now);
        if age > self.cfg.max_sample_age {
            return Err(Rejection::Stale(age));
        }
        if -age > self.cfg.max_sample_age {
            return Err(Rejection::FutureFix(-age));
        }
        Ok(())
    }

    /// Merges a batch of location samples received at `now`.
    /// The best estimate of the batch is retained if it passes the
    /// accuracy and freshness criteria, otherwise the tracker is left untouched.
    pub fn update(&self, samples: &[GeoLocation], now: Epoch) -> Result<TrackerEvent, Rejection> {
        // samples of unknown accuracy would always rank first
        let valid = samples
            .iter()
            .filter(|fix| fix.has_valid_accuracy())
            .copied()
            .collect::<Vec<_>>();

        let fix = match GeoLocation::best_location_estimate(&valid) {
            Some(fix) => fix,
            None => GeoLocation::best_location_estimate(samples).ok_or(Rejection::NoSamples)?,
        };

        if let Err(e) = self.validate(&fix, now) {
            debug!("{} - ignoring fix {}: {}", now, fix.coordinate, e);
            return Err(e);
        }

        let mut state = self.write();

        let event = match state.user_location {
            Some(previous) => {
                let moved_m = previous.distance_m(&fix);
                if moved_m > self.cfg.reload_distance_m {
                    info!("{} - moved {:.1}m: reload", now, moved_m);
                    TrackerEvent::Reload(fix)
                } else {
                    TrackerEvent::Updated(fix)
                }
            },
            None => TrackerEvent::Initial(fix),
        };

        state.user_location = Some(fix);
        state.last_update = Some(now);

        debug!("{} - new fix {} (±{}m)", now, fix.coordinate, fix.horizontal_accuracy_m);
        Ok(event)
    }
}
