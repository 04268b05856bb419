#![no_std]

mod eeprom;
mod geometry;
mod pages;

pub mod adapters;
pub mod config;
pub mod demo;

pub use adapters::Bus;
pub use config::{Config, Overflow};
pub use eeprom::*;
pub use geometry::*;
pub use pages::*;

pub type Address = usize;

#[derive(Debug, PartialEq)]
pub enum Error<E> {
    BusError(E),
    OutOfRange,
    #[cfg(feature = "serde")]
    SerializationError,
}
