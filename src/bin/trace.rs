extern crate mc24xx;

use embedded_hal::blocking::delay::DelayMs;
use mc24xx::adapters::ram::MemoryBus;
use mc24xx::*;

const SIZE: usize = 128;
const PAGE_SIZE: usize = 8;

struct TraceBus {
    inner: MemoryBus<SIZE, PAGE_SIZE>,
}

impl Bus for TraceBus {
    type Error = ();

    fn read_from(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.inner.read_from(device, addr, width, buf)?;
        println!(
            "R: {:3} [0x{:03x}..0x{:03x}] {:02x?}",
            buf.len(),
            addr,
            addr + buf.len(),
            if buf.len() > 16 { &buf[..16] } else { buf }
        );
        Ok(())
    }

    fn write_to(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        println!(
            "W: {:3} [0x{:03x}..0x{:03x}] {:02x?}",
            data.len(),
            addr,
            addr + data.len(),
            data
        );
        self.inner.write_to(device, addr, width, data)
    }
}

struct TraceDelay;

impl DelayMs<u32> for TraceDelay {
    fn delay_ms(&mut self, ms: u32) {
        println!("D: {}ms", ms);
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}

fn main() {
    let bus = TraceBus {
        inner: MemoryBus::default(),
    };
    let mut eeprom = Eeprom::new(bus, TraceDelay, Config::default());

    eeprom.write(6, &[0xaa, 0xbb, 0xcc, 0xdd]).unwrap();
    eeprom.write(37, &[0xa5]).unwrap();
    eeprom.write(3, b"lorem ipsum dolor sit").unwrap();

    let mut buf = [0; 24];
    eeprom.read(0, &mut buf).unwrap();

    eeprom.wipe().unwrap();
}
