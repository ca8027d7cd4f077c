//! A platform agnostic driver to interface with the LSM303 family of
//! accelerometer + magnetometer + temperature sensors (LSM303DLHC,
//! LSM303AGR and LSM303C)
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! The two dies are opened as independent handles: an [`Accelerometer`] and a
//! [`Magnetometer`]. The temperature sensor shares the magnetometer die and is
//! read through the [`Magnetometer`] handle.
//!
//! ```no_run
//! # fn example<I2C, E, D>(i2c: I2C, delay: D) -> Result<(), lsm303::Error<E>>
//! # where I2C: embedded_hal::blocking::i2c::Write<Error = E>
//! #         + embedded_hal::blocking::i2c::WriteRead<Error = E>,
//! #       D: embedded_hal::blocking::delay::DelayMs<u8>
//! # {
//! use lsm303::{AccelConfig, AccelRange, Accelerometer, SensorVariant};
//!
//! let mut accel = Accelerometer::new(i2c,
//!                                    delay,
//!                                    AccelConfig::new().variant(SensorVariant::Dlhc)
//!                                                      .range(AccelRange::_8G))?;
//! let (x, y, z) = accel.sense()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![deny(missing_docs)]
#![no_std]

mod accel;
pub mod bits;
mod conf;
pub mod datasheet;
mod mag;
mod rw;
pub mod units;

use core::fmt;

pub use accel::{scale, Accelerometer};
pub use conf::{AccelConfig, AccelMode, AccelRange, MagConfig, MagGain, MagRate};
pub use datasheet::{AccelerometerDatasheet, MagnetometerDatasheet};
pub use mag::Magnetometer;
pub use units::{Force, Temperature};

/// Member of the LSM303 family; selects the register maps
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorVariant {
    /// LSM303DLHC
    #[default]
    Dlhc,
    /// LSM303AGR
    Agr,
    /// LSM303C
    C,
}

impl fmt::Display for SensorVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
                        SensorVariant::Dlhc => "LSM303DLHC",
                        SensorVariant::Agr => "LSM303AGR",
                        SensorVariant::C => "LSM303C",
                    })
    }
}

/// Driver errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed
    Bus(E),
    /// The identification register did not hold the expected byte
    SensorNotDetected {
        /// Family member that was being opened
        variant: SensorVariant,
        /// Byte read from the identification register
        found: u8,
    },
    /// A configuration register holds a pattern with no symbolic meaning
    InvalidRegisterValue(u8),
    /// The gain does not fit the gain field of this part
    UnsupportedGain(MagGain),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::SensorNotDetected { variant, found } => {
                write!(f, "no {} detected (id register read {:#04x})", variant, found)
            }
            Error::InvalidRegisterValue(v) => write!(f, "invalid register value {:#04x}", v),
            Error::UnsupportedGain(g) => write!(f, "gain {} not supported by this part", g),
        }
    }
}
