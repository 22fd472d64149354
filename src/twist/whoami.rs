use crate::{twist::Twist, WhoAmI};
use embedded_hal::i2c::I2c;

const REG_ID: u8 = 0x00;

impl<I2C: I2c> WhoAmI<I2C, u8> for Twist<I2C> {
    const EXPECTED_WHOAMI: u8 = 0x5C;

    fn whoami(&mut self) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0];
        self.i2c.write_read(self.address, &[REG_ID], &mut data)?;
        Ok(data[0])
    }
}
