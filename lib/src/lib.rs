// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library for driving the Hot-Plug-Detect (HPD) line of a display
//! connector on test boards that expose the line as a bit in a
//! memory-mapped GPIO register.
//!
//! The register is mapped from physical memory using the [`reg`] module.
//!
//! Plug and unplug events, and timed pulse sequences, are driven through
//! the [`line`] and [`pulse`] modules.
//!
//! [`reg`]: module@reg
//! [`line`]: module@line
//! [`pulse`]: module@pulse

use std::path::PathBuf;

/// Types and functions for driving the HPD line.
pub mod line;

/// Board specific details of the HPD control registers.
pub mod platform;

/// Timed pulse sequences on the HPD line.
///
/// The [`Pulse`] describes a repeated deassert/assert cycle and drives it
/// onto a [`HpdLine`], escalating to realtime scheduling when the timing
/// is too tight for the default scheduler.
///
/// [`Pulse`]: pulse/struct.Pulse.html
/// [`HpdLine`]: line/struct.HpdLine.html
pub mod pulse;

/// Raw access to the GPIO register containing the HPD control bit.
pub mod reg;

/// Process scheduling control for timing sensitive pulses.
pub mod sched;

/// Errors returned by [`hpdctl`] functions.
///
/// [`hpdctl`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error returned when there is a problem with an argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// The physical memory device could not be opened or mapped.
    #[error("\"{0}\": {1}")]
    MemDevice(PathBuf, #[source] std::io::Error),

    /// The process could not be switched to realtime scheduling.
    #[error("unable to set realtime priority: {0}")]
    Scheduler(#[source] std::io::Error),
}

/// The result for [`hpdctl`] functions.
///
/// [`hpdctl`]: crate
pub type Result<T> = std::result::Result<T, Error>;
