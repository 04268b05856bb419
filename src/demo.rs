use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::{Address, Bus, Eeprom};

#[derive(Debug, PartialEq)]
pub enum HarnessError<E, BE, LE> {
    EepromError(crate::Error<E>),
    ButtonError(BE),
    LedError(LE),
}

/// Blocks until `predicate` reports `true`.
pub fn wait_until<E, F: FnMut() -> Result<bool, E>>(mut predicate: F) -> Result<(), E> {
    while !predicate()? {}
    Ok(())
}

pub fn wait_until_high<P: InputPin>(pin: &P) -> Result<(), P::Error> {
    wait_until(|| pin.is_high())
}

pub fn wait_until_low<P: InputPin>(pin: &P) -> Result<(), P::Error> {
    wait_until(|| pin.is_low())
}

pub struct Harness<BTN: InputPin, LED: OutputPin> {
    button: BTN,
    led: LED,
}

impl<BTN: InputPin, LED: OutputPin> Harness<BTN, LED> {
    pub fn new(button: BTN, mut led: LED) -> Result<Self, LED::Error> {
        led.set_low()?;
        Ok(Self { button, led })
    }

    pub fn release(self) -> (BTN, LED) {
        (self.button, self.led)
    }

    pub fn write_on_trigger<B, D, E>(
        &mut self,
        eeprom: &mut Eeprom<B, D>,
        addr: Address,
        payload: &[u8],
    ) -> Result<(), HarnessError<E, BTN::Error, LED::Error>>
    where
        B: Bus<Error = E>,
        D: DelayMs<u32>,
    {
        wait_until_high(&self.button).map_err(HarnessError::ButtonError)?;
        eeprom
            .write(addr, payload)
            .map_err(HarnessError::EepromError)?;
        self.led.set_high().map_err(HarnessError::LedError)
    }

    pub fn read_on_trigger<B, D, E>(
        &mut self,
        eeprom: &mut Eeprom<B, D>,
        addr: Address,
        buf: &mut [u8],
    ) -> Result<(), HarnessError<E, BTN::Error, LED::Error>>
    where
        B: Bus<Error = E>,
        D: DelayMs<u32>,
    {
        wait_until_high(&self.button).map_err(HarnessError::ButtonError)?;
        self.led.set_high().map_err(HarnessError::LedError)?;
        eeprom.read(addr, buf).map_err(HarnessError::EepromError)?;
        wait_until_low(&self.button).map_err(HarnessError::ButtonError)?;
        self.led.set_low().map_err(HarnessError::LedError)
    }
}
