// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hpdctl::line::{HpdLine, Level};
use hpdctl::pulse::Pulse;
use hpdctl::reg::Register;
use hpdctl::sched::Scheduler;
use hpdctl::{Error, Result};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

const MASK: u8 = 0x01;

// a register that logs every write so transitions can be checked
#[derive(Clone, Default)]
struct FakeRegister(Rc<RefCell<Fake>>);

#[derive(Default)]
struct Fake {
    byte: u8,
    writes: Vec<u8>,
}

impl Register for FakeRegister {
    fn read(&self) -> u8 {
        self.0.borrow().byte
    }
    fn write(&mut self, byte: u8) {
        let mut f = self.0.borrow_mut();
        f.byte = byte;
        f.writes.push(byte);
    }
}

impl FakeRegister {
    fn levels(&self) -> Vec<Level> {
        self.0
            .borrow()
            .writes
            .iter()
            .map(|b| (b & MASK == 0).into())
            .collect()
    }

    fn level(&self) -> Level {
        (self.0.borrow().byte & MASK == 0).into()
    }
}

#[derive(Default)]
struct RecordingScheduler {
    escalations: usize,
}

impl Scheduler for RecordingScheduler {
    fn escalate(&mut self) -> Result<()> {
        self.escalations += 1;
        Ok(())
    }
}

struct RefusingScheduler;

impl Scheduler for RefusingScheduler {
    fn escalate(&mut self) -> Result<()> {
        Err(Error::Scheduler(io::Error::from_raw_os_error(libc::EPERM)))
    }
}

fn pulse(deassert_usec: u64, assert_usec: u64, count: u32, end_level: Level) -> Pulse {
    Pulse::new(
        Duration::from_micros(deassert_usec),
        Duration::from_micros(assert_usec),
        count,
        end_level,
    )
    .unwrap()
}

#[test]
fn cycles_then_forced_low() {
    let reg = FakeRegister::default();
    let mut line = HpdLine::new(reg.clone(), MASK);
    let mut sched = RecordingScheduler::default();

    pulse(100, 100, 5, Level::Deasserted)
        .run(&mut line, &mut sched)
        .unwrap();

    let mut expected = Vec::new();
    for _ in 0..5 {
        expected.push(Level::Deasserted);
        expected.push(Level::Asserted);
    }
    expected.push(Level::Deasserted);
    assert_eq!(reg.levels(), expected);
    assert_eq!(reg.level(), Level::Deasserted);
}

#[test]
fn cycles_then_left_high() {
    let reg = FakeRegister::default();
    let mut line = HpdLine::new(reg.clone(), MASK);
    let mut sched = RecordingScheduler::default();

    pulse(1000, 1000, 3, Level::Asserted)
        .run(&mut line, &mut sched)
        .unwrap();

    // no extra transition after the final cycle
    let mut expected = Vec::new();
    for _ in 0..3 {
        expected.push(Level::Deasserted);
        expected.push(Level::Asserted);
    }
    assert_eq!(reg.levels(), expected);
    assert_eq!(reg.level(), Level::Asserted);
}

#[test]
fn escalates_for_tight_timing() {
    let reg = FakeRegister::default();
    let mut line = HpdLine::new(reg.clone(), MASK);
    let mut sched = RecordingScheduler::default();

    pulse(100, 100, 1, Level::Asserted)
        .run(&mut line, &mut sched)
        .unwrap();

    assert_eq!(sched.escalations, 1);
}

#[test]
fn no_escalation_for_coarse_timing() {
    let reg = FakeRegister::default();
    let mut line = HpdLine::new(reg.clone(), MASK);
    let mut sched = RecordingScheduler::default();

    pulse(60_000, 60_000, 1, Level::Asserted)
        .run(&mut line, &mut sched)
        .unwrap();

    assert_eq!(sched.escalations, 0);
}

#[test]
fn refused_escalation_leaves_line_untouched() {
    let reg = FakeRegister::default();
    let mut line = HpdLine::new(reg.clone(), MASK);

    let err = pulse(100, 100, 5, Level::Deasserted)
        .run(&mut line, &mut RefusingScheduler)
        .unwrap_err();

    assert!(matches!(err, Error::Scheduler(_)));
    assert!(reg.0.borrow().writes.is_empty());
}
