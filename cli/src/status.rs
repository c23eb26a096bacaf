// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::LineOpts;
use anyhow::Result;
use clap::Parser;
#[cfg(feature = "serde")]
use serde_derive::Serialize;

#[derive(Debug, Parser)]
#[command(alias("s"))]
pub struct Opts {
    #[command(flatten)]
    line_opts: LineOpts,

    /// Emit the status in JSON format.
    #[cfg(feature = "json")]
    #[arg(long)]
    pub json: bool,
}

pub fn cmd(opts: &Opts) -> Result<()> {
    let line = opts.line_opts.open()?;
    let status = Status {
        hpd: line.level().into(),
    };
    status.emit(opts);
    Ok(())
}

#[cfg_attr(feature = "serde", derive(Serialize))]
struct Status {
    hpd: u8,
}

impl Status {
    fn emit(&self, _opts: &Opts) {
        #[cfg(feature = "json")]
        if _opts.json {
            println!("{}", serde_json::to_string(self).unwrap());
            return;
        }
        println!("HPD={}", self.hpd);
    }
}
