use byteorder::{BigEndian, ByteOrder};

use crate::config::MAX_PAGE_SIZE;
use crate::Address;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressWidth {
    Eight,
    Sixteen,
}

impl AddressWidth {
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    pub const fn bytes(&self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
        }
    }

    /// Highest address the encoding can carry.
    pub const fn mask(&self) -> usize {
        match self {
            Self::Eight => 0xff,
            Self::Sixteen => 0xffff,
        }
    }

    pub fn encode(&self, addr: Address, buf: &mut [u8]) -> usize {
        match self {
            Self::Eight => buf[0] = addr as u8,
            Self::Sixteen => BigEndian::write_u16(&mut buf[..2], addr as u16),
        };
        self.bytes()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeviceGeometry {
    page_count: usize,
    bytes_per_page: usize,
    address_width: AddressWidth,
}

// Microchip 24xx family
pub const MC24XX01: DeviceGeometry = DeviceGeometry::new(16, 8, AddressWidth::Eight);
pub const MC24XX02: DeviceGeometry = DeviceGeometry::new(32, 8, AddressWidth::Eight);
pub const MC24XX64: DeviceGeometry = DeviceGeometry::new(256, 32, AddressWidth::Sixteen);

impl DeviceGeometry {
    pub const fn new(page_count: usize, bytes_per_page: usize, address_width: AddressWidth) -> Self {
        assert!(page_count > 0);
        assert!(bytes_per_page > 0 && bytes_per_page <= MAX_PAGE_SIZE);
        assert!(page_count * bytes_per_page - 1 <= address_width.mask());

        Self {
            page_count,
            bytes_per_page,
            address_width,
        }
    }

    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    pub const fn bytes_per_page(&self) -> usize {
        self.bytes_per_page
    }

    pub const fn address_width(&self) -> AddressWidth {
        self.address_width
    }

    pub const fn total_bytes(&self) -> usize {
        self.page_count * self.bytes_per_page
    }

    pub const fn page_offset(&self, addr: Address) -> usize {
        addr % self.bytes_per_page
    }

    pub const fn page_start(&self, page: usize) -> Address {
        page * self.bytes_per_page
    }

    pub fn contains(&self, addr: Address, len: usize) -> bool {
        addr.checked_add(len)
            .filter(|end| *end <= self.total_bytes())
            .is_some()
    }
}
