extern crate mc24xx;

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use log::{info, Level, LevelFilter, Metadata, Record};
use mc24xx::adapters::ram::MemoryBus;
use mc24xx::demo::Harness;
use mc24xx::*;

const MY_ADDR: Address = 37;
const MY_PAYLOAD: [u8; 1] = [0xa5];

struct StderrLogger;
static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Button that reads as pressed once it has been polled `presses_after` times,
/// and as released again after `hold` more polls.
struct SimButton {
    polls: Cell<usize>,
    presses_after: usize,
    hold: usize,
}

impl SimButton {
    fn new(presses_after: usize, hold: usize) -> Self {
        Self {
            polls: Cell::new(0),
            presses_after,
            hold,
        }
    }
}

impl InputPin for SimButton {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        Ok(polls > self.presses_after && polls <= self.presses_after + self.hold)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

struct ConsoleLed;

impl OutputPin for ConsoleLed {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        println!("LED off");
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        println!("LED on");
        Ok(())
    }
}

struct StdDelay;

impl DelayMs<u32> for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}

fn main() {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(LevelFilter::Trace))
        .ok();

    let bus = MemoryBus::<128, 8>::default();
    let mut eeprom = Eeprom::new(bus, StdDelay, Config::default());
    let mut harness = Harness::new(SimButton::new(1_000, 1_000), ConsoleLed).unwrap();

    info!("waiting for button");
    harness
        .write_on_trigger(&mut eeprom, MY_ADDR, &MY_PAYLOAD)
        .unwrap();

    let mut buf = [0; 1];
    let (_, led) = harness.release();
    let mut harness = Harness::new(SimButton::new(10, 10), led).unwrap();
    harness
        .read_on_trigger(&mut eeprom, MY_ADDR, &mut buf)
        .unwrap();
    info!("read back {:02x?} @{}", buf, MY_ADDR);

    let (bus, _) = eeprom.release();
    for line in bus.memory().chunks(16) {
        println!("{:02x?}", line);
    }
}
