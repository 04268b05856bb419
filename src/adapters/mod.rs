use crate::{Address, AddressWidth};

pub mod i2c;
pub mod ram;

pub trait Bus {
    type Error;

    fn read_from(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    fn write_to(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}
