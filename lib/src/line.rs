// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::reg::Register;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// The logical level of the HPD line.
///
/// The control bit in the register is active-low, so the mapping between
/// the logical level and the register bit is inverted:
///
/// |                | Bit Clear | Bit Set |
/// |----------------|-----------|---------|
/// | **HPD line**   | Asserted  | Deasserted |
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// The line is low - the sink appears unplugged.
    #[default]
    Deasserted,
    /// The line is high - the sink appears plugged.
    Asserted,
}

impl Level {
    /// The level opposite the current level.
    pub fn not(&self) -> Level {
        match self {
            Level::Asserted => Level::Deasserted,
            Level::Deasserted => Level::Asserted,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Asserted => "asserted",
            Level::Deasserted => "deasserted",
        };
        write!(f, "{}", s)
    }
}

impl From<Level> for bool {
    fn from(l: Level) -> bool {
        match l {
            Level::Deasserted => false,
            Level::Asserted => true,
        }
    }
}

impl From<Level> for u8 {
    fn from(l: Level) -> u8 {
        match l {
            Level::Deasserted => 0,
            Level::Asserted => 1,
        }
    }
}

impl From<bool> for Level {
    fn from(b: bool) -> Level {
        match b {
            false => Level::Deasserted,
            true => Level::Asserted,
        }
    }
}

/// The HPD line within a GPIO register.
///
/// Layers the active-low HPD bit semantics over raw byte access to the
/// register.  Updates are read-modify-write, so bits in the register
/// other than the HPD control bit are left untouched.
#[derive(Debug)]
pub struct HpdLine<R: Register> {
    reg: R,
    mask: u8,
}

impl<R: Register> HpdLine<R> {
    /// Wrap the register containing the HPD control bit.
    ///
    /// The `mask` selects the active-low control bit within the register
    /// byte, as described by [`platform`].
    ///
    /// [`platform`]: ../platform/index.html
    pub fn new(reg: R, mask: u8) -> HpdLine<R> {
        HpdLine { reg, mask }
    }

    /// The current level of the line.
    pub fn level(&self) -> Level {
        // active-low, so bit set means unplugged
        (self.reg.read() & self.mask == 0).into()
    }

    /// Drive the line high, emulating a plug.
    pub fn plug(&mut self) {
        let byte = self.reg.read();
        self.reg.write(byte & !self.mask);
    }

    /// Drive the line low, emulating an unplug.
    pub fn unplug(&mut self) {
        let byte = self.reg.read();
        self.reg.write(byte | self.mask);
    }
}
