// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, LineOpts};
use anyhow::Result;
use clap::Parser;
use hpdctl::line::Level;
use hpdctl::pulse::Pulse;
use hpdctl::sched::FifoScheduler;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(alias("rp"))]
pub struct Opts {
    /// The time to hold the line deasserted in each cycle, in microseconds.
    #[arg(value_name = "deassert-period", value_parser = common::parse_period)]
    deassert_period: Duration,

    /// The time to hold the line asserted in each cycle, in microseconds.
    #[arg(value_name = "assert-period", value_parser = common::parse_period)]
    assert_period: Duration,

    /// The number of deassert/assert cycles to drive.
    #[arg(value_name = "count", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// The level to leave the line at, 0 for LOW or 1 for HIGH.
    ///
    /// Every cycle ends with the line high, so ending LOW forces one
    /// extra transition after the final cycle.
    #[arg(value_name = "end-level", value_parser = parse_end_level)]
    end_level: Level,

    #[command(flatten)]
    line_opts: LineOpts,
}

pub fn cmd(opts: &Opts) -> Result<()> {
    let pulse = Pulse::new(
        opts.deassert_period,
        opts.assert_period,
        opts.count,
        opts.end_level,
    )?;
    let mut line = opts.line_opts.open()?;
    pulse.run(&mut line, &mut FifoScheduler)?;
    Ok(())
}

/// Parse an end level, 0 for LOW or 1 for HIGH.
fn parse_end_level(s: &str) -> std::result::Result<Level, InvalidEndLevel> {
    match s {
        "0" => Ok(Level::Deasserted),
        "1" => Ok(Level::Asserted),
        _ => Err(InvalidEndLevel::new(s)),
    }
}

#[derive(Debug)]
struct InvalidEndLevel {
    value: String,
}

impl InvalidEndLevel {
    fn new<S: Into<String>>(value: S) -> InvalidEndLevel {
        InvalidEndLevel {
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidEndLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid end level: '{}' must be 0 or 1", self.value)
    }
}
impl Error for InvalidEndLevel {}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn end_level() {
            assert_eq!(parse_end_level("0").unwrap(), Level::Deasserted);
            assert_eq!(parse_end_level("1").unwrap(), Level::Asserted);
            assert_eq!(
                parse_end_level("2").unwrap_err().to_string(),
                "invalid end level: '2' must be 0 or 1"
            );
            assert_eq!(
                parse_end_level("low").unwrap_err().to_string(),
                "invalid end level: 'low' must be 0 or 1"
            );
        }

        #[test]
        fn valid_opts() {
            let opts = Opts::try_parse_from(["repeat_pulse", "100", "200", "5", "0"]).unwrap();
            assert_eq!(opts.deassert_period, Duration::from_micros(100));
            assert_eq!(opts.assert_period, Duration::from_micros(200));
            assert_eq!(opts.count, 5);
            assert_eq!(opts.end_level, Level::Deasserted);
        }

        #[test]
        fn missing_parameter() {
            assert!(Opts::try_parse_from(["repeat_pulse", "100", "200", "5"]).is_err());
        }

        #[test]
        fn extra_parameter() {
            assert!(Opts::try_parse_from(["repeat_pulse", "100", "200", "5", "1", "7"]).is_err());
        }

        #[test]
        fn zero_period() {
            assert!(Opts::try_parse_from(["repeat_pulse", "0", "200", "5", "1"]).is_err());
            assert!(Opts::try_parse_from(["repeat_pulse", "100", "0", "5", "1"]).is_err());
        }

        #[test]
        fn zero_count() {
            assert!(Opts::try_parse_from(["repeat_pulse", "100", "200", "0", "1"]).is_err());
        }

        #[test]
        fn bad_end_level() {
            assert!(Opts::try_parse_from(["repeat_pulse", "100", "200", "5", "2"]).is_err());
        }

        #[test]
        fn malformed_number() {
            // distinct parse error, not an atoi style fallback to zero
            assert!(Opts::try_parse_from(["repeat_pulse", "abc", "200", "5", "1"]).is_err());
        }
    }
}
