use core::fmt;

use cast::i64;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::bits;
use crate::conf::{AccelConfig, AccelMode, AccelRange};
use crate::datasheet::AccelerometerDatasheet;
use crate::rw::Device;
use crate::units::Force;
use crate::{Error, SensorVariant};

/// `CTRL_REG1_A` at open: 100 Hz output data rate, normal power, X/Y/Z on
const CTRL_REG1_ENABLE: u8 = 0x57;

/// Low-power flag in `CTRL_REG1_A`, high-resolution flag in `CTRL_REG4_A`
const MODE_FLAG_SHIFT: u8 = 3;

/// Multiplier from raw output counts to [`Force`] for a mode and range
///
/// Each literal is `lsb_in_g * EARTH_GRAVITY` truncated to an integer, kept
/// unshifted so it can be checked against the datasheet sensitivity; the
/// mode's output alignment shift is applied on lookup.
///
/// [`Force`]: ./units/struct.Force.html
pub fn scale(mode: AccelMode, range: AccelRange) -> i64 {
    let unshifted: i64 = match (mode, range) {
        (AccelMode::LowPower, AccelRange::_2G) => 153_277_939,
        (AccelMode::LowPower, AccelRange::_4G) => 306_555_879,
        (AccelMode::LowPower, AccelRange::_8G) => 613_111_758,
        (AccelMode::LowPower, AccelRange::_16G) => 1_839_531_407,
        (AccelMode::Normal, AccelRange::_2G) => 38_245_935,
        (AccelMode::Normal, AccelRange::_4G) => 76_688_003,
        (AccelMode::Normal, AccelRange::_8G) => 153_277_939,
        (AccelMode::Normal, AccelRange::_16G) => 459_931_885,
        (AccelMode::HighResolution, AccelRange::_2G) => 9_610_517,
        (AccelMode::HighResolution, AccelRange::_4G) => 19_122_967,
        (AccelMode::HighResolution, AccelRange::_8G) => 38_245_935,
        (AccelMode::HighResolution, AccelRange::_16G) => 114_933_938,
    };
    unshifted >> mode.output_shift()
}

/// LSM303 accelerometer handle
pub struct Accelerometer<I2C, D> {
    dev: Device<I2C, D>,
    variant: SensorVariant,
    datasheet: AccelerometerDatasheet,
    mode: AccelMode,
    range: AccelRange,
}

impl<I2C, D, E> Accelerometer<I2C, D>
    where I2C: WriteRead<Error = E> + Write<Error = E>,
          D: DelayMs<u8>
{
    /// Opens the accelerometer: enables it, checks the chip id and applies
    /// the configured range and mode
    pub fn new(i2c: I2C, delay: D, config: &AccelConfig) -> Result<Self, Error<E>> {
        let (variant, datasheet, address) = config.resolve();
        let mut accel = Accelerometer { dev: Device { i2c, delay, address },
                                        variant,
                                        datasheet,
                                        mode: config.mode.unwrap_or_default(),
                                        range: config.range.unwrap_or_default() };

        #[cfg(feature = "defmt")]
        defmt::debug!("opening {} accelerometer at {=u8:#x}", variant, address);

        accel.dev
             .write_register(datasheet.ctrl_reg1, CTRL_REG1_ENABLE)?;

        let chip_id = accel.dev.read_register(datasheet.who_am_i)?;
        if chip_id != datasheet.chip_id {
            #[cfg(feature = "defmt")]
            defmt::warn!("accelerometer id {=u8:#x}, expected {=u8:#x}",
                         chip_id,
                         datasheet.chip_id);
            return Err(Error::SensorNotDetected { variant, found: chip_id });
        }

        accel.set_range(accel.range)?;
        accel.set_mode(accel.mode)?;

        Ok(accel)
    }

    /// Raw output counts, left-aligned in 16 bits
    pub fn sense_raw(&mut self) -> Result<(i16, i16, i16), Error<E>> {
        let ds = self.datasheet;
        let x = self.dev.read_word(ds.out_x_l, ds.out_x_h, true)?;
        let y = self.dev.read_word(ds.out_y_l, ds.out_y_h, true)?;
        let z = self.dev.read_word(ds.out_z_l, ds.out_z_h, true)?;
        Ok((x, y, z))
    }

    /// Acceleration acting on one kilogram, per axis
    pub fn sense(&mut self) -> Result<(Force, Force, Force), Error<E>> {
        let (x, y, z) = self.sense_raw()?;
        let multiplier = scale(self.mode, self.range);
        Ok((Force(i64(x) * multiplier),
            Force(i64(y) * multiplier),
            Force(i64(z) * multiplier)))
    }

    /// Reads the operating mode back from the device
    pub fn get_mode(&mut self) -> Result<AccelMode, Error<E>> {
        let ctrl1 = self.dev.read_register(self.datasheet.ctrl_reg1)?;
        let low_power = bits::extract(ctrl1, 1, MODE_FLAG_SHIFT);
        let ctrl4 = self.dev.read_register(self.datasheet.ctrl_reg4)?;
        let high_resolution = bits::extract(ctrl4, 1, MODE_FLAG_SHIFT);

        let value = (low_power << 1) | high_resolution;
        AccelMode::from_value(value).ok_or(Error::InvalidRegisterValue(value))
    }

    /// Sets the operating mode
    ///
    /// Writes the low-power flag, then the high-resolution flag, waiting
    /// 20 ms after each.
    pub fn set_mode(&mut self, mode: AccelMode) -> Result<(), Error<E>> {
        self.dev.modify_register(self.datasheet.ctrl_reg1, |r| {
                    bits::insert(r, mode.low_power(), 1, MODE_FLAG_SHIFT)
                })?;
        self.dev.settle();

        self.dev.modify_register(self.datasheet.ctrl_reg4, |r| {
                    bits::insert(r, mode.high_resolution(), 1, MODE_FLAG_SHIFT)
                })?;
        self.dev.settle();

        #[cfg(feature = "defmt")]
        defmt::debug!("accelerometer mode {}", mode);

        self.mode = mode;
        Ok(())
    }

    /// Reads the full scale back from the device
    pub fn get_range(&mut self) -> Result<AccelRange, Error<E>> {
        self.dev.read_field(self.datasheet.ctrl_reg4)
    }

    /// Sets the full scale
    pub fn set_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        self.dev
            .write_register_with_mask(self.datasheet.ctrl_reg4, range)?;
        self.dev.settle();

        #[cfg(feature = "defmt")]
        defmt::debug!("accelerometer range {}", range);

        self.range = range;
        Ok(())
    }
}

impl<I2C, D> Accelerometer<I2C, D> {
    /// Last mode successfully written
    pub fn mode(&self) -> AccelMode {
        self.mode
    }

    /// Last range successfully written
    pub fn range(&self) -> AccelRange {
        self.range
    }

    /// Family member this handle was opened as
    pub fn variant(&self) -> SensorVariant {
        self.variant
    }

    /// Bus address in use
    pub fn address(&self) -> u8 {
        self.dev.address
    }

    /// Register map in use
    pub fn datasheet(&self) -> &AccelerometerDatasheet {
        &self.datasheet
    }

    /// Destroys the handle and returns the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.dev.i2c, self.dev.delay)
    }
}

impl<I2C, D> fmt::Display for Accelerometer<I2C, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("LSM303 accelerometer")
    }
}
