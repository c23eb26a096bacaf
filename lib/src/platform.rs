// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical addresses and bit masks for the HPD control registers on the
//! test board.
//!
//! The board exposes one control register per sink port in a block of
//! GPIO registers.  The HPD control bit within each register is
//! active-low: setting the bit drives the line low (unplugged), clearing
//! it drives the line high (plugged).

use std::fmt;

/// The default path of the physical memory device.
pub const MEM_DEV: &str = "/dev/mem";

/// The mask of the active-low HPD control bit within a port register.
pub const HPD_N_MASK: u8 = 0x01;

// base physical address of the HPD control register block
const HPD_BASE: u64 = 0xff21_a000;

/// A sink port on the test board with an HPD control register.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Port {
    /// The first DisplayPort input.
    Dp1,
    /// The second DisplayPort input.
    Dp2,
    /// The HDMI input.
    #[default]
    Hdmi,
}

impl Port {
    /// The physical address of the port's HPD control register.
    pub fn address(&self) -> u64 {
        let offset = match self {
            Port::Dp1 => 0x4,
            Port::Dp2 => 0x8,
            Port::Hdmi => 0xc,
        };
        HPD_BASE + offset
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Port::Dp1 => "DP1",
            Port::Dp2 => "DP2",
            Port::Hdmi => "HDMI",
        };
        write!(f, "{}", name)
    }
}
