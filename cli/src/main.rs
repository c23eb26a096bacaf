// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for controlling the HPD line of a display connector.

use clap::Parser;
use std::process::ExitCode;

mod common;
mod plug;
mod repeat_pulse;
mod status;
mod unplug;

fn main() -> ExitCode {
    match Opts::try_parse() {
        Ok(opt) => {
            let res = match opt.cmd {
                Command::Status(cfg) => status::cmd(&cfg),
                Command::Plug(cfg) => plug::cmd(&cfg),
                Command::Unplug(cfg) => unplug::cmd(&cfg),
                Command::RepeatPulse(cfg) => repeat_pulse::cmd(&cfg),
            };
            match res {
                Ok(()) => return ExitCode::SUCCESS,
                Err(e) => common::emit_error(opt.verbose, &e),
            }
        }
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::FAILURE
}

#[derive(Parser)]
#[command(
    name = "hpdctl",
    about = "A utility to control the HPD line of a display connector on the test board.",
    version,
    propagate_version = true
)]
struct Opts {
    /// Provide more detailed error messages.
    #[arg(short = 'v', long, global = true, display_order = 800)]
    pub verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the current state of the HPD line.
    Status(status::Opts),

    /// Assert the HPD line, emulating a plug.
    Plug(plug::Opts),

    /// Deassert the HPD line, emulating an unplug.
    Unplug(unplug::Opts),

    /// Drive a sequence of timed pulses onto the HPD line.
    #[command(name = "repeat_pulse")]
    RepeatPulse(repeat_pulse::Opts),
}
