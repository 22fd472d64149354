//! # Driver for the SparkFun Qwiic Twist RGB Rotary Encoder
//!
//! ## External Links
//!
//! - [Official Hardware Repository]
//! - [Official Arduino Library]
//! - [Official Product Site]
//! - [Hookup Guide]
//!
//! [Official Hardware Repository]: https://github.com/sparkfun/Qwiic_Twist
//! [Official Arduino Library]: https://github.com/sparkfun/SparkFun_Qwiic_Twist_Arduino_Library
//! [Official Product Site]: https://www.sparkfun.com/products/15083
//! [Hookup Guide]: https://learn.sparkfun.com/tutorials/qwiic-twist-hookup-guide
use core::num::TryFromIntError;
use embedded_hal::i2c::I2c;
use fugit::{ExtU32, MillisDurationU32};
use num_enum::IntoPrimitive;
use smart_leds_trait::RGB8;

const REG_STATUS: u8 = 0x01;
const REG_VERSION: u8 = 0x02;
const REG_COUNT: u8 = 0x05;
const REG_DIFFERENCE: u8 = 0x07;
const REG_LAST_ENCODER_EVENT: u8 = 0x09;
const REG_LAST_BUTTON_EVENT: u8 = 0x0B;
const REG_RED: u8 = 0x0D;
const REG_GREEN: u8 = 0x0E;
const REG_BLUE: u8 = 0x0F;
const REG_CONNECT_RED: u8 = 0x10;
const REG_CONNECT_GREEN: u8 = 0x12;
const REG_CONNECT_BLUE: u8 = 0x14;
const REG_TURN_INT_TIMEOUT: u8 = 0x16;
const REG_CHANGE_ADDRESS: u8 = 0x18;
const REG_LIMIT: u8 = 0x19;

/// Status register bit masks.  All three events accumulate in the one
/// register; each accessor clears only its own bit.
#[derive(Clone, Copy, Debug, IntoPrimitive)]
#[repr(u8)]
enum StatusBit {
    EncoderMoved = 0b0000_0001,
    ButtonPressed = 0b0000_0010,
    ButtonClicked = 0b0000_0100,
}

pub struct Twist<I2C> {
    i2c: I2C,
    address: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    TryFromIntError(TryFromIntError),
    I2cError(E),
    UnexpectedDevice,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::I2cError(error)
    }
}

use crate::{Driver, WhoAmI};
impl<I2C: I2c> Driver<I2C, Error<I2C::Error>> for Twist<I2C> {
    fn new_inner(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    fn init_inner(mut self) -> Result<Self, Error<I2C::Error>> {
        if self.whoami()? != Self::EXPECTED_WHOAMI {
            return Err(Error::UnexpectedDevice);
        }
        Ok(self)
    }
}

use crate::SetAddressError;
impl<I2C: I2c> Twist<I2C> {
    /// Returns whether the device acknowledges its address.  Issues an
    /// empty write so no device state is touched.
    pub fn connected(&mut self) -> bool {
        self.i2c.write(self.address, &[]).is_ok()
    }

    /// Commands the device to move to `new_address`.  The handle follows
    /// on success; a failed write leaves both the device and the handle
    /// on the old address.
    pub fn set_address(&mut self, new_address: u8) -> Result<(), SetAddressError<I2C::Error>> {
        if !(0x08..=0x77).contains(&new_address) {
            return Err(SetAddressError::ArgumentError);
        }
        self.i2c
            .write(self.address, &[REG_CHANGE_ADDRESS, new_address])
            .map_err(SetAddressError::I2cError)?;
        self.address = new_address;
        Ok(())
    }

    /// Returns the number of ticks the knob has been twisted.
    pub fn count(&mut self) -> Result<i16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c.write_read(self.address, &[REG_COUNT], &mut data)?;
        Ok(i16::from_le_bytes(data))
    }

    pub fn set_count(&mut self, count: i16) -> Result<(), I2C::Error> {
        let bytes: [u8; 2] = i16::to_le_bytes(count);
        self.i2c
            .write(self.address, &[REG_COUNT, bytes[0], bytes[1]])?;
        Ok(())
    }

    /// Returns the count at which the counter wraps to zero.  0 means
    /// wrapping is disabled.
    pub fn limit(&mut self) -> Result<u16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c.write_read(self.address, &[REG_LIMIT], &mut data)?;
        Ok(u16::from_le_bytes(data))
    }

    pub fn set_limit(&mut self, limit: u16) -> Result<(), I2C::Error> {
        let bytes: [u8; 2] = u16::to_le_bytes(limit);
        self.i2c
            .write(self.address, &[REG_LIMIT, bytes[0], bytes[1]])?;
        Ok(())
    }

    /// Returns the ticks accumulated since the last check.  With `clear`
    /// the register is zeroed in a second transaction; ticks arriving
    /// between the read and the clear are lost.
    pub fn difference(&mut self, clear: bool) -> Result<i16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_DIFFERENCE], &mut data)?;
        if clear {
            self.i2c.write(self.address, &[REG_DIFFERENCE, 0, 0])?;
        }
        Ok(i16::from_le_bytes(data))
    }

    /// Returns whether the button is currently held down, then clears
    /// the pressed bit.  The clicked and moved bits are untouched.
    pub fn is_pressed(&mut self) -> Result<bool, I2C::Error> {
        self.take_status_bit(StatusBit::ButtonPressed)
    }

    /// Returns whether the button has been clicked since the last check,
    /// then clears the clicked bit.
    pub fn is_clicked(&mut self) -> Result<bool, I2C::Error> {
        self.take_status_bit(StatusBit::ButtonClicked)
    }

    /// Returns whether the knob has been twisted since the last check,
    /// then clears the moved bit.
    pub fn is_moved(&mut self) -> Result<bool, I2C::Error> {
        self.take_status_bit(StatusBit::EncoderMoved)
    }

    // Read-modify-write on the shared status register.  The two
    // transactions are not atomic; an event landing between them on the
    // same bit is absorbed into the clear.
    fn take_status_bit(&mut self, bit: StatusBit) -> Result<bool, I2C::Error> {
        let mask = u8::from(bit);
        let mut data: [u8; 1] = [0; 1];
        self.i2c
            .write_read(self.address, &[REG_STATUS], &mut data)?;
        self.i2c
            .write(self.address, &[REG_STATUS, data[0] & !mask])?;
        Ok(data[0] & mask != 0)
    }

    /// Clears the moved, clicked and pressed bits in one write.
    pub fn clear_interrupts(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[REG_STATUS, 0])?;
        Ok(())
    }

    /// Returns the time since the knob was last twisted, up to 65535ms.
    pub fn time_since_last_movement(
        &mut self,
        clear: bool,
    ) -> Result<MillisDurationU32, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_LAST_ENCODER_EVENT], &mut data)?;
        if clear {
            self.i2c
                .write(self.address, &[REG_LAST_ENCODER_EVENT, 0, 0])?;
        }
        Ok(u32::from(u16::from_le_bytes(data)).millis())
    }

    /// Returns the time since the button was last pressed or released,
    /// up to 65535ms.
    pub fn time_since_last_press(&mut self, clear: bool) -> Result<MillisDurationU32, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_LAST_BUTTON_EVENT], &mut data)?;
        if clear {
            self.i2c
                .write(self.address, &[REG_LAST_BUTTON_EVENT, 0, 0])?;
        }
        Ok(u32::from(u16::from_le_bytes(data)).millis())
    }

    /// Returns how long the firmware waits after the last tick before
    /// asserting the interrupt pin.
    pub fn turn_interrupt_timeout(&mut self) -> Result<MillisDurationU32, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_TURN_INT_TIMEOUT], &mut data)?;
        Ok(u32::from(u16::from_le_bytes(data)).millis())
    }

    pub fn set_turn_interrupt_timeout(
        &mut self,
        timeout: MillisDurationU32,
    ) -> Result<(), Error<I2C::Error>> {
        let bytes: [u8; 2] = u16::to_le_bytes(
            timeout
                .to_millis()
                .try_into()
                .map_err(Error::TryFromIntError)?,
        );
        self.i2c
            .write(self.address, &[REG_TURN_INT_TIMEOUT, bytes[0], bytes[1]])?;
        Ok(())
    }

    /// Returns the firmware version as a (major, minor) tuple.
    pub fn firmware(&mut self) -> Result<(u8, u8), I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_VERSION], &mut data)?;
        Ok((data[0], data[1]))
    }

    /// Sets all three LED channels in one write.  The firmware lays the
    /// bulk payload out blue, green, red starting at the red register.
    pub fn set_color(&mut self, color: RGB8) -> Result<(), I2C::Error> {
        self.i2c
            .write(self.address, &[REG_RED, color.b, color.g, color.r])?;
        Ok(())
    }

    pub fn set_red(&mut self, red: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[REG_RED, red])?;
        Ok(())
    }

    pub fn set_green(&mut self, green: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[REG_GREEN, green])?;
        Ok(())
    }

    pub fn set_blue(&mut self, blue: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[REG_BLUE, blue])?;
        Ok(())
    }

    pub fn red(&mut self) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0; 1];
        self.i2c.write_read(self.address, &[REG_RED], &mut data)?;
        Ok(data[0])
    }

    pub fn green(&mut self) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0; 1];
        self.i2c.write_read(self.address, &[REG_GREEN], &mut data)?;
        Ok(data[0])
    }

    pub fn blue(&mut self) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0; 1];
        self.i2c.write_read(self.address, &[REG_BLUE], &mut data)?;
        Ok(data[0])
    }

    /// Sets the per-tick brightness delta for all three channels in one
    /// write.  Negative values brighten as the knob turns down.  The
    /// bulk payload is big-endian per value; the single-channel setters
    /// below are little-endian.  The firmware expects exactly this.
    pub fn connect_color(&mut self, red: i16, green: i16, blue: i16) -> Result<(), I2C::Error> {
        let r: [u8; 2] = i16::to_be_bytes(red);
        let g: [u8; 2] = i16::to_be_bytes(green);
        let b: [u8; 2] = i16::to_be_bytes(blue);
        self.i2c.write(
            self.address,
            &[REG_CONNECT_RED, r[0], r[1], g[0], g[1], b[0], b[1]],
        )?;
        Ok(())
    }

    pub fn connect_red(&mut self, red: i16) -> Result<(), I2C::Error> {
        let bytes: [u8; 2] = i16::to_le_bytes(red);
        self.i2c
            .write(self.address, &[REG_CONNECT_RED, bytes[0], bytes[1]])?;
        Ok(())
    }

    pub fn connect_green(&mut self, green: i16) -> Result<(), I2C::Error> {
        let bytes: [u8; 2] = i16::to_le_bytes(green);
        self.i2c
            .write(self.address, &[REG_CONNECT_GREEN, bytes[0], bytes[1]])?;
        Ok(())
    }

    pub fn connect_blue(&mut self, blue: i16) -> Result<(), I2C::Error> {
        let bytes: [u8; 2] = i16::to_le_bytes(blue);
        self.i2c
            .write(self.address, &[REG_CONNECT_BLUE, bytes[0], bytes[1]])?;
        Ok(())
    }

    pub fn red_connect(&mut self) -> Result<i16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_CONNECT_RED], &mut data)?;
        Ok(i16::from_le_bytes(data))
    }

    pub fn green_connect(&mut self) -> Result<i16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_CONNECT_GREEN], &mut data)?;
        Ok(i16::from_le_bytes(data))
    }

    pub fn blue_connect(&mut self) -> Result<i16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[REG_CONNECT_BLUE], &mut data)?;
        Ok(i16::from_le_bytes(data))
    }
}


pub mod compat;
pub mod whoami;
