// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::LineOpts;
use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Opts {
    #[command(flatten)]
    line_opts: LineOpts,
}

pub fn cmd(opts: &Opts) -> Result<()> {
    let mut line = opts.line_opts.open()?;
    line.unplug();
    Ok(())
}
