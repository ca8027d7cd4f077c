use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::bits;
use crate::conf::RegisterBits;
use crate::Error;

/// Time the sensor's state machine needs after a configuration write
pub(crate) const SETTLE_MS: u8 = 20;

/// One die on the bus: single-byte register access plus settling delay
pub(crate) struct Device<I2C, D> {
    pub(crate) i2c: I2C,
    pub(crate) delay: D,
    pub(crate) address: u8,
}

impl<I2C, D, E> Device<I2C, D>
    where I2C: WriteRead<Error = E> + Write<Error = E>,
          D: DelayMs<u8>
{
    pub(crate) fn read_register(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut buffer)?;
        Ok(buffer[0])
    }

    pub(crate) fn write_register(&mut self, reg: u8, byte: u8) -> Result<(), Error<E>> {
        self.i2c.write(self.address, &[reg, byte])?;
        Ok(())
    }

    pub(crate) fn modify_register<F>(&mut self, reg: u8, f: F) -> Result<(), Error<E>>
        where F: FnOnce(u8) -> u8
    {
        let r = self.read_register(reg)?;
        self.write_register(reg, f(r))
    }

    pub(crate) fn write_register_with_mask<RB>(&mut self,
                                               reg: u8,
                                               v: RB)
                                               -> Result<(), Error<E>>
        where RB: RegisterBits
    {
        self.modify_register(reg, |r| bits::insert(r, v.value(), RB::WIDTH, RB::SHIFT))
    }

    pub(crate) fn read_field<RB>(&mut self, reg: u8) -> Result<RB, Error<E>>
        where RB: RegisterBits
    {
        let raw = bits::extract(self.read_register(reg)?, RB::WIDTH, RB::SHIFT);
        RB::from_value(raw).ok_or(Error::InvalidRegisterValue(raw))
    }

    /// Reads a two's-complement word split over the `low` and `high`
    /// registers; `first_low` picks which half goes on the bus first
    pub(crate) fn read_word(&mut self,
                            low: u8,
                            high: u8,
                            first_low: bool)
                            -> Result<i16, Error<E>> {
        let (l, h) = if first_low {
            let l = self.read_register(low)?;
            (l, self.read_register(high)?)
        } else {
            let h = self.read_register(high)?;
            (self.read_register(low)?, h)
        };
        Ok(combine(h, l))
    }

    pub(crate) fn settle(&mut self) {
        self.delay.delay_ms(SETTLE_MS);
    }
}

/// Big-endian combine of two bytes into a two's-complement word
pub(crate) fn combine(high: u8, low: u8) -> i16 {
    ((cast::u16(high) << 8) | cast::u16(low)) as i16
}
