// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, Result};
use std::io::Error as IoError;

/// Escalation of the process scheduling priority for timing sensitive
/// pulse sequences.
///
/// The production implementation is [`FifoScheduler`].  Tests substitute
/// an implementation that records or refuses the escalation.
///
/// [`FifoScheduler`]: struct.FifoScheduler.html
pub trait Scheduler {
    /// Request realtime scheduling priority for the calling process.
    ///
    /// Once escalated the process remains at realtime priority for its
    /// lifetime - there is no de-escalation.
    fn escalate(&mut self) -> Result<()>;
}

/// Switches the process to `SCHED_FIFO` at the highest priority.
///
/// Requires the privilege to set realtime scheduling, typically
/// `CAP_SYS_NICE` or root.
#[derive(Clone, Copy, Debug, Default)]
pub struct FifoScheduler;

impl Scheduler for FifoScheduler {
    fn escalate(&mut self) -> Result<()> {
        let priority = unsafe { libc::sched_get_priority_max(libc::SCHED_FIFO) };
        if priority == -1 {
            return Err(Error::Scheduler(IoError::last_os_error()));
        }
        let sp = libc::sched_param {
            sched_priority: priority,
        };
        match unsafe { libc::sched_setscheduler(0, libc::SCHED_FIFO, &sp) } {
            0 => Ok(()),
            _ => Err(Error::Scheduler(IoError::last_os_error())),
        }
    }
}
