use embedded_hal::blocking::delay::DelayMs;
use log::{debug, trace, warn};

use crate::config::{Config, Overflow, ERASED_BYTE, MAX_PAGE_SIZE};
use crate::{Address, Bus, DeviceGeometry, Error, PageChunks};

static ERASED_PAGE: [u8; MAX_PAGE_SIZE] = [ERASED_BYTE; MAX_PAGE_SIZE];

pub struct Eeprom<B: Bus, D: DelayMs<u32>> {
    bus: B,
    delay: D,
    config: Config,
}

impl<B, D, E> Eeprom<B, D>
where
    B: Bus<Error = E>,
    D: DelayMs<u32>,
{
    pub fn new(bus: B, delay: D, config: Config) -> Self {
        Self { bus, delay, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn geometry(&self) -> DeviceGeometry {
        self.config.geometry
    }

    pub fn capacity(&self) -> usize {
        self.config.geometry.total_bytes()
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    pub fn read(&mut self, addr: Address, buf: &mut [u8]) -> Result<(), Error<E>> {
        if buf.is_empty() {
            return Ok(());
        }
        self.check_range(addr, buf.len())?;

        let width = self.config.geometry.address_width();
        self.bus
            .read_from(self.config.device_address, addr, width, buf)
            .map_err(Error::BusError)
    }

    pub fn read_byte(&mut self, addr: Address) -> Result<u8, Error<E>> {
        let mut buf = [0];
        self.read(addr, &mut buf)?;
        Ok(buf[0])
    }

    /// Stops at the first failing page; pages written before it stay written.
    pub fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error<E>> {
        if data.is_empty() {
            return Ok(());
        }
        self.check_range(addr, data.len())?;

        let page_size = self.config.geometry.bytes_per_page();
        for (chunk_addr, range) in PageChunks::new(addr, data.len(), page_size) {
            self.write_page(chunk_addr, &data[range])?;
        }
        Ok(())
    }

    pub fn write_byte(&mut self, addr: Address, byte: u8) -> Result<(), Error<E>> {
        self.write(addr, &[byte])
    }

    pub fn wipe(&mut self) -> Result<(), Error<E>> {
        let geometry = self.config.geometry;
        let erased = &ERASED_PAGE[..geometry.bytes_per_page()];

        debug!("wipe: {} pages", geometry.page_count());
        for page in 0..geometry.page_count() {
            self.write(geometry.page_start(page), erased)?;
        }
        Ok(())
    }

    fn write_page(&mut self, addr: Address, chunk: &[u8]) -> Result<(), Error<E>> {
        trace!("page write: {}\t@{}..{}", chunk.len(), addr, addr.wrapping_add(chunk.len()));

        let width = self.config.geometry.address_width();
        self.bus
            .write_to(self.config.device_address, addr, width, chunk)
            .map_err(Error::BusError)?;
        self.delay.delay_ms(self.config.write_cycle_ms);
        Ok(())
    }

    fn check_range(&self, addr: Address, len: usize) -> Result<(), Error<E>> {
        match self.config.overflow {
            Overflow::Wrap => Ok(()),
            Overflow::Reject if self.config.geometry.contains(addr, len) => Ok(()),
            Overflow::Reject => {
                warn!(
                    "rejected access: {}\t@{} past {}",
                    len,
                    addr,
                    self.config.geometry.total_bytes()
                );
                Err(Error::OutOfRange)
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<B, D, E> Eeprom<B, D>
where
    B: Bus<Error = E>,
    D: DelayMs<u32>,
{
    pub fn write_object<T: serde::Serialize, const SIZE: usize>(
        &mut self,
        addr: Address,
        val: &T,
    ) -> Result<usize, Error<E>> {
        let mut buf = [0; SIZE];
        let bytes = postcard::to_slice(val, &mut buf).map_err(|_| Error::SerializationError)?;
        self.write(addr, bytes)?;
        Ok(bytes.len())
    }

    /// Reads at most `SIZE` bytes.
    pub fn read_object<T: serde::de::DeserializeOwned, const SIZE: usize>(
        &mut self,
        addr: Address,
    ) -> Result<T, Error<E>> {
        let len = match self.config.overflow {
            Overflow::Wrap => SIZE,
            Overflow::Reject => usize::min(SIZE, self.capacity().saturating_sub(addr)),
        };
        if len == 0 {
            return Err(Error::OutOfRange);
        }

        let mut buf = [0; SIZE];
        self.read(addr, &mut buf[..len])?;
        postcard::from_bytes(&buf[..len]).map_err(|_| Error::SerializationError)
    }
}
