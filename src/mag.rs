use core::fmt;

use cast::i64;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::bits;
use crate::conf::{MagConfig, MagGain, MagRate, RegisterBits, TEMP_ENABLE};
use crate::datasheet::MagnetometerDatasheet;
use crate::rw::Device;
use crate::units::{Temperature, CELSIUS, ZERO_CELSIUS};
use crate::{Error, SensorVariant};

/// Mode register value selecting continuous conversion
const MR_CONTINUOUS: u8 = 0x00;

/// LSM303 magnetometer handle, also giving access to the temperature sensor
/// on the same die
pub struct Magnetometer<I2C, D> {
    dev: Device<I2C, D>,
    variant: SensorVariant,
    datasheet: MagnetometerDatasheet,
    gain: MagGain,
    rate: MagRate,
}

impl<I2C, D, E> Magnetometer<I2C, D>
    where I2C: WriteRead<Error = E> + Write<Error = E>,
          D: DelayMs<u8>
{
    /// Opens the magnetometer: starts continuous conversion, checks the chip
    /// id and applies the configured gain and rate
    pub fn new(i2c: I2C, delay: D, config: &MagConfig) -> Result<Self, Error<E>> {
        let (variant, datasheet, address) = config.resolve();
        let mut mag = Magnetometer { dev: Device { i2c, delay, address },
                                     variant,
                                     datasheet,
                                     gain: config.gain.unwrap_or_default(),
                                     rate: config.rate.unwrap_or_default() };

        #[cfg(feature = "defmt")]
        defmt::debug!("opening {} magnetometer at {=u8:#x}", variant, address);

        mag.dev.write_register(datasheet.mr, MR_CONTINUOUS)?;

        let chip_id = mag.dev.read_register(datasheet.who_am_i)?;
        if chip_id != datasheet.chip_id {
            #[cfg(feature = "defmt")]
            defmt::warn!("magnetometer id {=u8:#x}, expected {=u8:#x}",
                         chip_id,
                         datasheet.chip_id);
            return Err(Error::SensorNotDetected { variant, found: chip_id });
        }

        mag.set_gain(mag.gain)?;
        mag.set_rate(mag.rate)?;

        Ok(mag)
    }

    /// Raw output counts per axis
    ///
    /// Each axis is read low byte then high byte, X, Y, Z, at whatever
    /// registers the datasheet places them.
    pub fn sense_raw(&mut self) -> Result<(i16, i16, i16), Error<E>> {
        let ds = self.datasheet;
        let x = self.dev.read_word(ds.out_x_l, ds.out_x_h, true)?;
        let y = self.dev.read_word(ds.out_y_l, ds.out_y_h, true)?;
        let z = self.dev.read_word(ds.out_z_l, ds.out_z_h, true)?;
        Ok((x, y, z))
    }

    /// Sets the gain (full scale)
    ///
    /// Gains whose code does not fit the datasheet's gain field are refused
    /// before touching the bus.
    pub fn set_gain(&mut self, gain: MagGain) -> Result<(), Error<E>> {
        let width = self.datasheet.gain_width;
        if bits::extract(gain.value(), width, 0) != gain.value() {
            return Err(Error::UnsupportedGain(gain));
        }
        self.dev.modify_register(self.datasheet.crb, |r| {
                    bits::insert(r, gain.value(), width, MagGain::SHIFT)
                })?;
        self.dev.settle();

        #[cfg(feature = "defmt")]
        defmt::debug!("magnetometer gain {}", gain);

        self.gain = gain;
        Ok(())
    }

    /// Reads the gain back from configuration register B
    pub fn get_gain(&mut self) -> Result<MagGain, Error<E>> {
        let crb = self.dev.read_register(self.datasheet.crb)?;
        let raw = bits::extract(crb, self.datasheet.gain_width, MagGain::SHIFT);
        MagGain::from_value(raw).ok_or(Error::InvalidRegisterValue(raw))
    }

    /// Sets the output data rate
    ///
    /// Configuration register A is overwritten as a whole: only the rate
    /// field and the temperature enable bit (always set) are kept.
    pub fn set_rate(&mut self, rate: MagRate) -> Result<(), Error<E>> {
        let cra = bits::insert(TEMP_ENABLE, rate.value(), MagRate::WIDTH, MagRate::SHIFT);
        self.dev.write_register(self.datasheet.cra, cra)?;
        self.dev.settle();

        #[cfg(feature = "defmt")]
        defmt::debug!("magnetometer rate {}", rate);

        self.rate = rate;
        Ok(())
    }

    /// Reads the output data rate back from configuration register A
    pub fn get_rate(&mut self) -> Result<MagRate, Error<E>> {
        self.dev.read_field(self.datasheet.cra)
    }

    /// Relative temperature in eighths of a degree Celsius
    ///
    /// - Resolution: 12-bit
    pub fn sense_relative_temperature_raw(&mut self) -> Result<i16, Error<E>> {
        let ds = self.datasheet;
        let t = self.dev.read_word(ds.temp_out_l, ds.temp_out_h, false)?;
        Ok(t >> 4)
    }

    /// Temperature sensor measurement
    ///
    /// The sensor is not calibrated: only differences between readings are
    /// meaningful. Adding about 20 °C gets close to the absolute value on
    /// most parts; no offset is applied here.
    pub fn sense_relative_temperature(&mut self) -> Result<Temperature, Error<E>> {
        let eighths = self.sense_relative_temperature_raw()?;
        Ok(Temperature(i64(eighths) * CELSIUS.nanokelvin() / 8) + ZERO_CELSIUS)
    }
}

impl<I2C, D> Magnetometer<I2C, D> {
    /// Last gain successfully written
    pub fn gain(&self) -> MagGain {
        self.gain
    }

    /// Last rate successfully written
    pub fn rate(&self) -> MagRate {
        self.rate
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
    pub fn datasheet(&self) -> &MagnetometerDatasheet {
        &self.datasheet
    }

    /// Destroys the handle and returns the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.dev.i2c, self.dev.delay)
    }
}

impl<I2C, D> fmt::Display for Magnetometer<I2C, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("LSM303 magnetometer")
    }
}
