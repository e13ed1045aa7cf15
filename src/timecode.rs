//! GPS week and time-of-week stamping of reception times.
//!
//! Reception times are [hifitime::Epoch]s; the conversion to GPS week and
//! time-of-week is pluggable through [GpsClock] so decoders can be driven by
//! a receiver's own notion of GPS time.
use hifitime::{Duration, Epoch, TimeScale};

use crate::prelude::*;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Conversion of an absolute time to GPS week and nanoseconds into that week.
pub trait GpsClock: Send + Sync {
    /// Returns `(week, nanoseconds of week)` for `epoch`.
    ///
    /// # Errors
    /// [Error::UnsetTime] if `epoch` cannot be expressed as GPS time.
    fn week_and_nanos(&self, epoch: Epoch) -> Result<(u32, u64)>;
}

/// [GpsClock] backed by hifitime's GPST time scale.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gpst;

impl GpsClock for Gpst {
    fn week_and_nanos(&self, epoch: Epoch) -> Result<(u32, u64)> {
        // GPS weeks are unsigned; anything before 1980-01-06 is treated as unset
        if epoch.to_gpst_duration().is_negative() {
            return Err(Error::UnsetTime);
        }
        Ok(epoch.to_time_scale(TimeScale::GPST).to_time_of_week())
    }
}

/// GPS week number and whole seconds of week.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GpsTime {
    pub week: u32,
    pub tow: u32,
}

impl GpsTime {
    pub const SECONDS_PER_WEEK: u32 = 604_800;

    /// Round `nanos` into the week to whole seconds.
    ///
    /// `tolerance` is added before truncating so that timestamps a few
    /// milliseconds early land on the intended second. A result that reaches
    /// the end of the week rolls over to second 0 of the next week.
    #[must_use]
    pub fn from_week_nanos(week: u32, nanos: u64, tolerance: Duration) -> Self {
        let tolerance = u64::try_from(tolerance.total_nanoseconds()).unwrap_or(0);
        let secs = nanos.saturating_add(tolerance) / NANOS_PER_SECOND;
        if secs >= u64::from(Self::SECONDS_PER_WEEK) {
            return GpsTime {
                week: week.saturating_add(1),
                tow: 0,
            };
        }
        GpsTime {
            week,
            // bounded by SECONDS_PER_WEEK above
            tow: secs as u32,
        }
    }
}
