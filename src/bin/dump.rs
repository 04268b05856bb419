extern crate mc24xx;

use embedded_hal::blocking::delay::DelayMs;
use mc24xx::adapters::ram::MemoryBus;
use mc24xx::*;
use std::io::*;

const SIZE: usize = 8 * 1024;
const PAGE_SIZE: usize = 32;

struct NoDelay;

impl DelayMs<u32> for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

fn main() {
    let config = Config::new(0x50, MC24XX64);
    let mut eeprom = Eeprom::new(MemoryBus::<SIZE, PAGE_SIZE>::default(), NoDelay, config);

    if std::env::args().any(|arg| arg == "--wipe") {
        eeprom.wipe().unwrap();
    }

    for (idx, addr) in (0..SIZE).step_by(1000).enumerate() {
        eeprom.write(addr, &[idx as u8; 48]).unwrap();
    }

    let (bus, _) = eeprom.release();
    stdout().write_all(bus.memory()).ok();
}
