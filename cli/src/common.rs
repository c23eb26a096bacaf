// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hpdctl::line::HpdLine;
use hpdctl::platform::{self, Port};
use hpdctl::reg::MemRegister;
use std::path::PathBuf;
use std::time::Duration;

// common command line parser options

/// Options to select the HPD control register.
#[derive(Debug, Parser)]
pub struct LineOpts {
    /// The physical memory device to map the register from.
    #[arg(
        long,
        value_name = "path",
        env = "HPDCTL_DEVICE",
        default_value = platform::MEM_DEV
    )]
    pub device: PathBuf,

    /// The sink port whose HPD line is driven.
    #[arg(
        short,
        long,
        value_name = "port",
        value_enum,
        default_value = "hdmi",
        ignore_case = true
    )]
    pub port: PortFlags,
}

impl LineOpts {
    /// Map the register and wrap it as the HPD line.
    pub fn open(&self) -> Result<HpdLine<MemRegister>> {
        let port: Port = self.port.into();
        let reg = MemRegister::map(&self.device, port.address())
            .with_context(|| format!("unable to map the {} HPD register", port))?;
        Ok(HpdLine::new(reg, platform::HPD_N_MASK))
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PortFlags {
    Dp1,
    Dp2,
    Hdmi,
}

impl From<PortFlags> for Port {
    fn from(p: PortFlags) -> Self {
        match p {
            PortFlags::Dp1 => Port::Dp1,
            PortFlags::Dp2 => Port::Dp2,
            PortFlags::Hdmi => Port::Hdmi,
        }
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParsePeriodError {
    #[error("'{0}' {1}")]
    ParseDigits(String, std::num::ParseIntError),
    #[error("'{0}' must be a positive number of microseconds")]
    Zero(String),
}

/// Parse a hold period as a decimal number of microseconds.
pub fn parse_period(s: &str) -> std::result::Result<Duration, ParsePeriodError> {
    let t = s
        .parse::<u64>()
        .map_err(|e| ParsePeriodError::ParseDigits(s.into(), e))?;
    if t == 0 {
        return Err(ParsePeriodError::Zero(s.into()));
    }
    Ok(Duration::from_micros(t))
}

pub fn emit_error(verbose: bool, e: &anyhow::Error) {
    eprintln!("{}", format_error(verbose, e));
}

pub fn format_error(verbose: bool, e: &anyhow::Error) -> String {
    if verbose {
        format!("{e:#}")
    } else {
        format!("{e}")
    }
}
