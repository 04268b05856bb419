use crate::geometry::{DeviceGeometry, MC24XX01};

/// Write-cycle time of the 24xx family, from the datasheet.
pub const WRITE_CYCLE_MS: u32 = 5;

pub const ERASED_BYTE: u8 = 0xff;

/// Also bounds a single bus payload.
pub const MAX_PAGE_SIZE: usize = 256;

/// 24xx parts with A0..A2 tied low.
pub const DEFAULT_DEVICE_ADDRESS: u8 = 0x50;

/// What to do with accesses reaching past the end of the device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Overflow {
    Reject,
    Wrap,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub device_address: u8,
    pub geometry: DeviceGeometry,
    pub write_cycle_ms: u32,
    pub overflow: Overflow,
}

impl Config {
    pub const fn new(device_address: u8, geometry: DeviceGeometry) -> Self {
        assert!(device_address < 0x80);
        Self {
            device_address,
            geometry,
            write_cycle_ms: WRITE_CYCLE_MS,
            overflow: Overflow::Reject,
        }
    }

    pub const fn with_write_cycle_ms(mut self, write_cycle_ms: u32) -> Self {
        self.write_cycle_ms = write_cycle_ms;
        self
    }

    pub const fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_ADDRESS, MC24XX01)
    }
}
