use crate::adapters::*;
use crate::config::{DEFAULT_DEVICE_ADDRESS, ERASED_BYTE};

/// Writes roll over within their page, reads over the whole array.
pub struct MemoryBus<const SIZE: usize, const PAGE_SIZE: usize> {
    pub device_address: u8,
    pub memory: [u8; SIZE],
}

impl<const SIZE: usize, const PAGE_SIZE: usize> Default for MemoryBus<SIZE, PAGE_SIZE> {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_ADDRESS, [ERASED_BYTE; SIZE])
    }
}

impl<const SIZE: usize, const PAGE_SIZE: usize> MemoryBus<SIZE, PAGE_SIZE> {
    pub fn new(device_address: u8, memory: [u8; SIZE]) -> Self {
        assert!(SIZE > 0 && PAGE_SIZE > 0 && SIZE % PAGE_SIZE == 0);
        Self {
            device_address,
            memory,
        }
    }

    pub fn memory(&self) -> &[u8; SIZE] {
        &self.memory
    }

    pub fn release(self) -> [u8; SIZE] {
        self.memory
    }

    fn locate(addr: Address, width: AddressWidth) -> usize {
        (addr & width.mask()) % SIZE
    }
}

impl<const SIZE: usize, const PAGE_SIZE: usize> Bus for MemoryBus<SIZE, PAGE_SIZE> {
    type Error = ();

    fn read_from(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        if device != self.device_address {
            return Err(());
        }

        let start = Self::locate(addr, width);
        for (idx, byte) in buf.iter_mut().enumerate() {
            *byte = self.memory[(start + idx) % SIZE];
        }
        Ok(())
    }

    fn write_to(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        if device != self.device_address {
            return Err(());
        }

        let start = Self::locate(addr, width);
        let page = start - start % PAGE_SIZE;
        for (idx, byte) in data.iter().enumerate() {
            self.memory[page + (start % PAGE_SIZE + idx) % PAGE_SIZE] = *byte;
        }
        Ok(())
    }
}
