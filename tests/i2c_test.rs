use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use mc24xx::adapters::i2c::{Error as I2cError, I2cBus};
use mc24xx::*;

#[derive(Debug, Clone, PartialEq)]
enum Frame {
    Write(u8, Vec<u8>),
    WriteRead(u8, Vec<u8>, usize),
}

#[derive(Default)]
struct MockI2c {
    frames: Vec<Frame>,
    response: Vec<u8>,
    nack: bool,
}

impl i2c::Write for MockI2c {
    type Error = &'static str;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.nack {
            return Err("nack");
        }
        self.frames.push(Frame::Write(address, bytes.to_vec()));
        Ok(())
    }
}

impl i2c::WriteRead for MockI2c {
    type Error = &'static str;

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        if self.nack {
            return Err("nack");
        }
        self.frames
            .push(Frame::WriteRead(address, bytes.to_vec(), buffer.len()));
        buffer.copy_from_slice(&self.response[..buffer.len()]);
        Ok(())
    }
}

struct NoDelay;

impl DelayMs<u32> for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

fn create_eeprom(geometry: DeviceGeometry) -> Eeprom<I2cBus<MockI2c>, NoDelay> {
    Eeprom::new(
        I2cBus::new(MockI2c::default()),
        NoDelay,
        Config::new(0x50, geometry),
    )
}

#[test]
fn test_write_frames_eight_bit() {
    let mut eeprom = create_eeprom(MC24XX01);
    eeprom.write(6, &[0xaa, 0xbb, 0xcc, 0xdd]).unwrap();

    let (mut bus, _) = eeprom.release();
    assert_eq!(
        bus.i2c_mut().frames,
        vec![
            Frame::Write(0x50, vec![0x06, 0xaa, 0xbb]),
            Frame::Write(0x50, vec![0x08, 0xcc, 0xdd]),
        ]
    );
}

#[test]
fn test_write_frames_sixteen_bit() {
    let mut eeprom = create_eeprom(MC24XX64);
    eeprom.write(0x12fe, &[1, 2, 3]).unwrap();

    let frames = eeprom.release().0.release().frames;
    assert_eq!(
        frames,
        vec![
            Frame::Write(0x50, vec![0x12, 0xfe, 1, 2]),
            Frame::Write(0x50, vec![0x13, 0x00, 3]),
        ]
    );
}

#[test]
fn test_read_frame() {
    let mut eeprom = create_eeprom(MC24XX64);
    eeprom.bus_mut().i2c_mut().response = vec![9, 8, 7, 6];

    let mut buf = [0; 3];
    eeprom.read(0x0102, &mut buf).unwrap();
    assert_eq!(buf, [9, 8, 7]);

    let frames = eeprom.release().0.release().frames;
    assert_eq!(frames, vec![Frame::WriteRead(0x50, vec![0x01, 0x02], 3)]);
}

#[test]
fn test_bus_errors_pass_through() {
    let mut eeprom = create_eeprom(MC24XX01);
    eeprom.bus_mut().i2c_mut().nack = true;

    let err = eeprom.write(0, &[1]).unwrap_err();
    assert!(matches!(err, Error::BusError(I2cError::WriteError("nack"))));

    let err = eeprom.read(0, &mut [0; 1]).unwrap_err();
    assert!(matches!(err, Error::BusError(I2cError::WriteReadError("nack"))));
}

#[test]
fn test_payload_overflow() {
    let mut bus = I2cBus::new(MockI2c::default());
    let err = bus
        .write_to(0x50, 0, AddressWidth::Sixteen, &[0; 257])
        .unwrap_err();
    assert!(matches!(err, I2cError::PayloadOverflow));
    assert!(bus.release().frames.is_empty());
}
