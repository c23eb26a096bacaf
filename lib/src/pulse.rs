// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::line::{HpdLine, Level};
use crate::reg::Register;
use crate::sched::Scheduler;
use crate::{Error, Result};
use std::cmp;
use std::thread;
use std::time::Duration;

/// The longest hold period that still requires realtime scheduling.
///
/// Pulses held for less than this are vulnerable to preemption jitter
/// under the default time-sharing scheduler, so the process is escalated
/// to realtime priority before they are driven.  Coarser pulses tolerate
/// ordinary scheduling.
pub const RT_PERIOD_MAX: Duration = Duration::from_micros(50_000);

/// A repeated deassert/assert pulse sequence on the HPD line.
///
/// Each cycle drives the line low for the deassert period then high for
/// the assert period.  After the final cycle the line is forced low if
/// the end level is [`Deasserted`], or left at the high level the loop
/// ended on if [`Asserted`].
///
/// [`Deasserted`]: ../line/enum.Level.html#variant.Deasserted
/// [`Asserted`]: ../line/enum.Level.html#variant.Asserted
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pulse {
    deassert_period: Duration,
    assert_period: Duration,
    count: u32,
    end_level: Level,
}

impl Pulse {
    /// Create a pulse sequence description.
    ///
    /// Both hold periods and the cycle count must be non-zero.
    pub fn new(
        deassert_period: Duration,
        assert_period: Duration,
        count: u32,
        end_level: Level,
    ) -> Result<Pulse> {
        if deassert_period.is_zero() {
            return Err(Error::InvalidArgument(
                "deassert period must be non-zero".to_string(),
            ));
        }
        if assert_period.is_zero() {
            return Err(Error::InvalidArgument(
                "assert period must be non-zero".to_string(),
            ));
        }
        if count == 0 {
            return Err(Error::InvalidArgument(
                "repeat count must be non-zero".to_string(),
            ));
        }
        Ok(Pulse {
            deassert_period,
            assert_period,
            count,
            end_level,
        })
    }

    /// Whether driving the sequence requires realtime scheduling.
    pub fn needs_rt(&self) -> bool {
        cmp::min(self.deassert_period, self.assert_period) <= RT_PERIOD_MAX
    }

    /// Drive the pulse sequence onto the line.
    ///
    /// Escalates the process priority via the scheduler first if the
    /// timing requires it, and fails without touching the line if the
    /// escalation is refused.
    ///
    /// Hold periods are enforced with plain blocking sleeps, so overshoot
    /// from the scheduler is tolerated rather than compensated for.
    /// There is no cancellation - the sequence runs to completion unless
    /// the process is killed, in which case the line is left wherever the
    /// interruption occurred.
    pub fn run<R, S>(&self, line: &mut HpdLine<R>, sched: &mut S) -> Result<()>
    where
        R: Register,
        S: Scheduler,
    {
        if self.needs_rt() {
            sched.escalate()?;
        }
        for _ in 0..self.count {
            line.unplug();
            thread::sleep(self.deassert_period);
            line.plug();
            thread::sleep(self.assert_period);
        }
        // every cycle ends high, so only LOW needs a final transition
        if self.end_level == Level::Deasserted {
            line.unplug();
        }
        Ok(())
    }
}
