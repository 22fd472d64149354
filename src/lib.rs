#![no_std]
#![doc = include_str!("../README.md")]

use embedded_hal::i2c::I2c;

/// Failure modes of an address-change command: the transaction itself
/// failed, or the requested address is outside `0x08..=0x77`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetAddressError<E> {
    I2cError(E),
    ArgumentError,
}

#[derive(Debug)]
pub struct OutOfRange;

pub trait Driver<I2C: I2c, T> {
    fn address_check(address: u8) -> Result<(), OutOfRange> {
        if (0x08..=0x77).contains(&address) {
            Ok(())
        } else {
            Err(OutOfRange)
        }
    }
    fn new_inner(i2c: I2C, address: u8) -> Self;

    /// The entry point for a [`Driver`].  Expects [`I2c`] (obtainable from target platform HAL)
    /// and an I2C device address in the range `0x08..=0x77`.  This provides a handle that does not
    /// initialize the hardware.  Initialization is deferred to [`Driver::init`].
    ///
    /// # Errors
    ///
    /// [`OutOfRange`]: address is ouside of the allowed range `0x08..=0x77`
    fn new(i2c: I2C, address: u8) -> Result<Self, OutOfRange>
    where
        Self: Sized,
    {
        Self::address_check(address)?;
        Ok(Self::new_inner(i2c, address))
    }
    fn init_inner(self) -> Result<Self, T>
    where
        Self: Sized,
    {
        Ok(self)
    }

    /// Initializes the hardware.  For the Twist this verifies the device
    /// is present and answering with the expected ID before any other
    /// traffic.
    ///
    /// # Errors
    ///
    /// `T`: a device dependent error type for any problems encountered during initialization.
    fn init(self) -> Result<Self, T>
    where
        Self: Sized,
    {
        self.init_inner()
    }
}

/// Read back a fixed device ID so a misconfigured address fails fast
/// instead of silently driving the wrong peripheral.
pub trait WhoAmI<I2C: I2c, T: core::cmp::Eq> {
    const EXPECTED_WHOAMI: T;

    fn whoami(&mut self) -> Result<T, I2C::Error>;
}

pub mod twist;
