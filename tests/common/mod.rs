#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use mc24xx::adapters::ram::MemoryBus;
use mc24xx::*;

pub const DEVICE: u8 = 0x50;
pub const SIZE: usize = 128;
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Read { addr: Address, len: usize },
    Write { addr: Address, data: Vec<u8> },
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Reference device that records every transaction and can be told to
/// NACK the n-th write.
pub struct RecordingBus {
    pub inner: MemoryBus<SIZE, PAGE_SIZE>,
    pub log: Log,
    pub fail_on_write: Option<usize>,
    writes: usize,
}

impl Bus for RecordingBus {
    type Error = ();

    fn read_from(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        assert_eq!(width, AddressWidth::Eight);
        self.log.borrow_mut().push(Event::Read {
            addr,
            len: buf.len(),
        });
        self.inner.read_from(device, addr, width, buf)
    }

    fn write_to(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        assert_eq!(width, AddressWidth::Eight);
        self.writes += 1;
        if self.fail_on_write == Some(self.writes) {
            return Err(());
        }
        self.log.borrow_mut().push(Event::Write {
            addr,
            data: data.to_vec(),
        });
        self.inner.write_to(device, addr, width, data)
    }
}

pub struct RecordingDelay {
    pub log: Log,
}

impl DelayMs<u32> for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

pub type TestEeprom = Eeprom<RecordingBus, RecordingDelay>;

pub fn create_eeprom(config: Config) -> (TestEeprom, Log) {
    create_failing_eeprom(config, None)
}

pub fn create_failing_eeprom(config: Config, fail_on_write: Option<usize>) -> (TestEeprom, Log) {
    let log = Log::default();
    let bus = RecordingBus {
        inner: MemoryBus::new(DEVICE, [0xff; SIZE]),
        log: log.clone(),
        fail_on_write,
        writes: 0,
    };
    let delay = RecordingDelay { log: log.clone() };
    (Eeprom::new(bus, delay, config), log)
}

pub fn reference_eeprom() -> (TestEeprom, Log) {
    create_eeprom(Config::new(DEVICE, MC24XX01))
}

pub fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}

pub fn written(log: &Log) -> Vec<(Address, Vec<u8>)> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Write { addr, data } => Some((*addr, data.clone())),
            _ => None,
        })
        .collect()
}
