//! Sentinel-returning accessors matching the [SparkFun Arduino library].
//!
//! Each getter collapses a transport failure into the fixed value the
//! Arduino API returns (-1, 0 or 0xFFFF depending on the accessor), so
//! sketches ported from C++ behave identically.  The sentinels are
//! ambiguous with legitimate readings near the boundaries; new code
//! should prefer the `Result` accessors on [`Twist`].
//!
//! [SparkFun Arduino library]: https://github.com/sparkfun/SparkFun_Qwiic_Twist_Arduino_Library

use crate::twist::Twist;
use embedded_hal::i2c::I2c;

impl<I2C: I2c> Twist<I2C> {
    /// [`Twist::count`], returning -1 on failure.  A counter sitting at
    /// -1 is indistinguishable from a failed read here.
    pub fn get_count(&mut self) -> i16 {
        self.count().unwrap_or(-1)
    }

    /// [`Twist::limit`], returning 0xFFFF on failure.
    pub fn get_limit(&mut self) -> u16 {
        self.limit().unwrap_or(u16::MAX)
    }

    /// [`Twist::difference`], returning 0 on failure.
    pub fn get_diff(&mut self, clear: bool) -> i16 {
        self.difference(clear).unwrap_or(0)
    }

    /// [`Twist::time_since_last_movement`] in raw milliseconds,
    /// returning 0xFFFF on failure.  A knob untouched for exactly
    /// 65535ms reads the same.
    pub fn time_since_last_movement_ms(&mut self, clear: bool) -> u16 {
        self.time_since_last_movement(clear)
            .map_or(u16::MAX, |elapsed| {
                elapsed.to_millis().try_into().unwrap_or(u16::MAX)
            })
    }

    /// [`Twist::time_since_last_press`] in raw milliseconds, returning
    /// 0xFFFF on failure.
    pub fn time_since_last_press_ms(&mut self, clear: bool) -> u16 {
        self.time_since_last_press(clear)
            .map_or(u16::MAX, |elapsed| {
                elapsed.to_millis().try_into().unwrap_or(u16::MAX)
            })
    }

    /// [`Twist::firmware`] packed little-endian as the Arduino API
    /// reads it, returning 0 on failure.  0 is never a shipped version.
    pub fn get_version(&mut self) -> u16 {
        self.firmware()
            .map_or(0, |(major, minor)| u16::from_le_bytes([major, minor]))
    }

    /// [`Twist::turn_interrupt_timeout`] in raw milliseconds, returning
    /// 0 on failure.
    pub fn get_int_timeout(&mut self) -> u16 {
        self.turn_interrupt_timeout().map_or(0, |timeout| {
            timeout.to_millis().try_into().unwrap_or(u16::MAX)
        })
    }

    /// [`Twist::red`], returning 0 on failure.
    pub fn get_red(&mut self) -> u8 {
        self.red().unwrap_or(0)
    }

    /// [`Twist::green`], returning 0 on failure.
    pub fn get_green(&mut self) -> u8 {
        self.green().unwrap_or(0)
    }

    /// [`Twist::blue`], returning 0 on failure.
    pub fn get_blue(&mut self) -> u8 {
        self.blue().unwrap_or(0)
    }

    /// [`Twist::red_connect`], returning 0 on failure.
    pub fn get_red_connect(&mut self) -> i16 {
        self.red_connect().unwrap_or(0)
    }

    /// [`Twist::green_connect`], returning 0 on failure.
    pub fn get_green_connect(&mut self) -> i16 {
        self.green_connect().unwrap_or(0)
    }

    /// [`Twist::blue_connect`], returning 0 on failure.
    pub fn get_blue_connect(&mut self) -> i16 {
        self.blue_connect().unwrap_or(0)
    }
}
