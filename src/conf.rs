use core::fmt;

use crate::datasheet::{AccelerometerDatasheet, MagnetometerDatasheet};
use crate::SensorVariant;

/// A symbolic value stored as a right-aligned field of one register
pub(crate) trait RegisterBits: Sized + Copy {
    /// Field width in bits
    const WIDTH: u8;
    /// Position of the field's least significant bit
    const SHIFT: u8;

    fn value(&self) -> u8;
    fn from_value(value: u8) -> Option<Self>;
}

/// Accelerometer operating mode
///
/// Encoded on two bits: bit 0 is the high-resolution flag (`CTRL_REG4_A`
/// bit 3), bit 1 the low-power flag (`CTRL_REG1_A` bit 3).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelMode {
    /// Normal mode, 10-bit output
    #[default]
    Normal = 0b00,
    /// High resolution mode, 12-bit output
    HighResolution = 0b01,
    /// Low power mode, 8-bit output
    LowPower = 0b10,
}

impl AccelMode {
    pub(crate) fn value(&self) -> u8 {
        *self as u8
    }

    pub(crate) fn from_value(value: u8) -> Option<Self> {
        match value {
            0b00 => Some(AccelMode::Normal),
            0b01 => Some(AccelMode::HighResolution),
            0b10 => Some(AccelMode::LowPower),
            _ => None,
        }
    }

    pub(crate) fn high_resolution(&self) -> u8 {
        self.value() & 0x01
    }

    pub(crate) fn low_power(&self) -> u8 {
        (self.value() >> 1) & 0x01
    }

    /// Number of unused low bits in the left-aligned 16-bit output word
    pub fn output_shift(&self) -> u8 {
        match self {
            AccelMode::LowPower => 8,
            AccelMode::Normal => 6,
            AccelMode::HighResolution => 4,
        }
    }
}

impl fmt::Display for AccelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
                        AccelMode::Normal => "normal",
                        AccelMode::HighResolution => "high resolution",
                        AccelMode::LowPower => "low power",
                    })
    }
}

/// Acceleration full scale
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum AccelRange {
    /// +/- 2g
    _2G = 0,
    /// +/- 4g
    #[default]
    _4G = 1,
    /// +/- 8g
    _8G = 2,
    /// +/- 16g
    _16G = 3,
}

impl RegisterBits for AccelRange {
    const WIDTH: u8 = 2;
    const SHIFT: u8 = 4;

    fn value(&self) -> u8 {
        *self as u8
    }

    fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(AccelRange::_2G),
            1 => Some(AccelRange::_4G),
            2 => Some(AccelRange::_8G),
            3 => Some(AccelRange::_16G),
            _ => None,
        }
    }
}

impl fmt::Display for AccelRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
                        AccelRange::_2G => "2G",
                        AccelRange::_4G => "4G",
                        AccelRange::_8G => "8G",
                        AccelRange::_16G => "16G",
                    })
    }
}

/// Magnetometer full scale (gain)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum MagGain {
    /// +/- 1.3 gauss
    _1_3_Ga = 0,
    /// +/- 1.9 gauss
    _1_9_Ga = 1,
    /// +/- 2.5 gauss
    _2_5_Ga = 2,
    /// +/- 4.0 gauss
    #[default]
    _4_0_Ga = 3,
    /// +/- 4.7 gauss
    _4_7_Ga = 4,
    /// +/- 5.6 gauss
    _5_6_Ga = 5,
    /// +/- 8.1 gauss
    _8_1_Ga = 6,
}

impl RegisterBits for MagGain {
    const WIDTH: u8 = 3;
    const SHIFT: u8 = 5;

    fn value(&self) -> u8 {
        *self as u8
    }

    fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(MagGain::_1_3_Ga),
            1 => Some(MagGain::_1_9_Ga),
            2 => Some(MagGain::_2_5_Ga),
            3 => Some(MagGain::_4_0_Ga),
            4 => Some(MagGain::_4_7_Ga),
            5 => Some(MagGain::_5_6_Ga),
            6 => Some(MagGain::_8_1_Ga),
            _ => None,
        }
    }
}

impl fmt::Display for MagGain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
                        MagGain::_1_3_Ga => "1.3",
                        MagGain::_1_9_Ga => "1.9",
                        MagGain::_2_5_Ga => "2.5",
                        MagGain::_4_0_Ga => "4.0",
                        MagGain::_4_7_Ga => "4.7",
                        MagGain::_5_6_Ga => "5.6",
                        MagGain::_8_1_Ga => "8.1",
                    })
    }
}

/// Magnetometer output data rate
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum MagRate {
    /// 0.75 Hz
    _0_75_Hz = 0,
    /// 1.5 Hz
    _1_5_Hz = 1,
    /// 3.0 Hz
    _3_0_Hz = 2,
    /// 7.5 Hz
    _7_5_Hz = 3,
    /// 15 Hz
    _15_Hz = 4,
    /// 30 Hz
    #[default]
    _30_Hz = 5,
    /// 75 Hz
    _75_Hz = 6,
    /// 220 Hz
    _220_Hz = 7,
}

impl RegisterBits for MagRate {
    const WIDTH: u8 = 3;
    const SHIFT: u8 = 2;

    fn value(&self) -> u8 {
        *self as u8
    }

    fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(MagRate::_0_75_Hz),
            1 => Some(MagRate::_1_5_Hz),
            2 => Some(MagRate::_3_0_Hz),
            3 => Some(MagRate::_7_5_Hz),
            4 => Some(MagRate::_15_Hz),
            5 => Some(MagRate::_30_Hz),
            6 => Some(MagRate::_75_Hz),
            7 => Some(MagRate::_220_Hz),
            _ => None,
        }
    }
}

impl fmt::Display for MagRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
                        MagRate::_0_75_Hz => "0.75",
                        MagRate::_1_5_Hz => "1.5",
                        MagRate::_3_0_Hz => "3.0",
                        MagRate::_7_5_Hz => "7.5",
                        MagRate::_15_Hz => "15",
                        MagRate::_30_Hz => "30",
                        MagRate::_75_Hz => "75",
                        MagRate::_220_Hz => "220",
                    })
    }
}

/// Temperature sensor enable, `CRA_REG_M` bit 7. Always written as set.
pub(crate) const TEMP_ENABLE: u8 = 0x80;

/// Configuration applied when opening an [`Accelerometer`]
///
/// [`Accelerometer`]: ./struct.Accelerometer.html
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    pub(crate) variant: Option<SensorVariant>,
    pub(crate) address: Option<u8>,
    pub(crate) mode: Option<AccelMode>,
    pub(crate) range: Option<AccelRange>,
    pub(crate) datasheet: Option<AccelerometerDatasheet>,
}

impl AccelConfig {
    /// Creates accelerometer configuration with the default
    /// [`SensorVariant`] (DLHC), [`AccelMode`] (normal) and [`AccelRange`]
    /// (4G).
    ///
    /// [`SensorVariant`]: ./enum.SensorVariant.html
    /// [`AccelMode`]: ./enum.AccelMode.html
    /// [`AccelRange`]: ./enum.AccelRange.html
    pub fn new() -> Self {
        AccelConfig { variant: None,
                      address: None,
                      mode: None,
                      range: None,
                      datasheet: None }
    }

    /// Selects the LSM303 family member, and with it the register map
    pub fn variant(&mut self, variant: SensorVariant) -> &mut Self {
        self.variant = Some(variant);
        self
    }

    /// Overrides the 7-bit bus address of the datasheet
    pub fn address(&mut self, address: u8) -> &mut Self {
        self.address = Some(address);
        self
    }

    /// Sets the initial operating mode ([`AccelMode`])
    ///
    /// [`AccelMode`]: ./enum.AccelMode.html
    pub fn mode(&mut self, mode: AccelMode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the initial full scale ([`AccelRange`])
    ///
    /// [`AccelRange`]: ./enum.AccelRange.html
    pub fn range(&mut self, range: AccelRange) -> &mut Self {
        self.range = Some(range);
        self
    }

    /// Supplies a complete register map, taking precedence over `variant`
    pub fn datasheet(&mut self, datasheet: AccelerometerDatasheet) -> &mut Self {
        self.datasheet = Some(datasheet);
        self
    }

    pub(crate) fn resolve(&self) -> (SensorVariant, AccelerometerDatasheet, u8) {
        let variant = self.variant.unwrap_or_default();
        let datasheet =
            self.datasheet
                .unwrap_or_else(|| AccelerometerDatasheet::for_variant(variant));
        let address = self.address.unwrap_or(datasheet.address);
        (variant, datasheet, address)
    }
}

/// Configuration applied when opening a [`Magnetometer`]
///
/// [`Magnetometer`]: ./struct.Magnetometer.html
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    pub(crate) variant: Option<SensorVariant>,
    pub(crate) address: Option<u8>,
    pub(crate) gain: Option<MagGain>,
    pub(crate) rate: Option<MagRate>,
    pub(crate) datasheet: Option<MagnetometerDatasheet>,
}

impl MagConfig {
    /// Creates magnetometer configuration with the default
    /// [`SensorVariant`] (DLHC), [`MagGain`] (4.0 gauss) and [`MagRate`]
    /// (30 Hz).
    ///
    /// [`SensorVariant`]: ./enum.SensorVariant.html
    /// [`MagGain`]: ./enum.MagGain.html
    /// [`MagRate`]: ./enum.MagRate.html
    pub fn new() -> Self {
        MagConfig { variant: None,
                    address: None,
                    gain: None,
                    rate: None,
                    datasheet: None }
    }

    /// Selects the LSM303 family member, and with it the register map
    pub fn variant(&mut self, variant: SensorVariant) -> &mut Self {
        self.variant = Some(variant);
        self
    }

    /// Overrides the 7-bit bus address of the datasheet
    pub fn address(&mut self, address: u8) -> &mut Self {
        self.address = Some(address);
        self
    }

    /// Sets the initial gain ([`MagGain`])
    ///
    /// [`MagGain`]: ./enum.MagGain.html
    pub fn gain(&mut self, gain: MagGain) -> &mut Self {
        self.gain = Some(gain);
        self
    }

    /// Sets the initial output data rate ([`MagRate`])
    ///
    /// [`MagRate`]: ./enum.MagRate.html
    pub fn rate(&mut self, rate: MagRate) -> &mut Self {
        self.rate = Some(rate);
        self
    }

    /// Supplies a complete register map, in case a new family member
    /// appears. Takes precedence over `variant`.
    pub fn datasheet(&mut self, datasheet: MagnetometerDatasheet) -> &mut Self {
        self.datasheet = Some(datasheet);
        self
    }

    pub(crate) fn resolve(&self) -> (SensorVariant, MagnetometerDatasheet, u8) {
        let variant = self.variant.unwrap_or_default();
        let datasheet =
            self.datasheet
                .unwrap_or_else(|| MagnetometerDatasheet::for_variant(variant));
        let address = self.address.unwrap_or(datasheet.address);
        (variant, datasheet, address)
    }
}
