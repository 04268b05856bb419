use core::fmt::Debug;

use embedded_hal::blocking::i2c;

use crate::adapters::*;
use crate::config::MAX_PAGE_SIZE;

const MAX_ADDR_BYTES: usize = 2;

pub enum Error<I2C: i2c::Write + i2c::WriteRead> {
    WriteError(<I2C as i2c::Write>::Error),
    WriteReadError(<I2C as i2c::WriteRead>::Error),
    PayloadOverflow,
}

impl<I2C: i2c::Write + i2c::WriteRead> Debug for Error<I2C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WriteError(_) => write!(f, "I2C Write Error"),
            Self::WriteReadError(_) => write!(f, "I2C WriteRead Error"),
            Self::PayloadOverflow => write!(f, "Payload Overflow"),
        }
    }
}

#[derive(Debug)]
pub struct I2cBus<I2C: i2c::Write + i2c::WriteRead> {
    i2c: I2C,
}

impl<I2C: i2c::Write + i2c::WriteRead> I2cBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: i2c::Write + i2c::WriteRead> Bus for I2cBus<I2C> {
    type Error = Error<I2C>;

    fn read_from(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut cmd_buf = [0; MAX_ADDR_BYTES];
        let cmd_len = width.encode(addr, &mut cmd_buf);

        self.i2c
            .write_read(device, &cmd_buf[..cmd_len], buf)
            .map_err(Error::WriteReadError)
    }

    fn write_to(
        &mut self,
        device: u8,
        addr: Address,
        width: AddressWidth,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        if data.len() > MAX_PAGE_SIZE {
            return Err(Error::PayloadOverflow);
        }

        let mut frame = [0; MAX_ADDR_BYTES + MAX_PAGE_SIZE];
        let cmd_len = width.encode(addr, &mut frame);
        let frame_len = cmd_len + data.len();
        frame[cmd_len..frame_len].copy_from_slice(data);

        self.i2c
            .write(device, &frame[..frame_len])
            .map_err(Error::WriteError)
    }
}
