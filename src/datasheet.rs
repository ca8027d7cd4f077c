//! Register maps of the supported LSM303 variants

use crate::SensorVariant;

/// Accelerometer bus address used by the DLHC and AGR parts.
pub const ACCEL_ADDRESS: u8 = 0x19;
/// Accelerometer bus address used by the LSM303C.
pub const ACCEL_ADDRESS_C: u8 = 0x1D;
/// Magnetometer bus address, identical on every variant.
pub const MAG_ADDRESS: u8 = 0x1E;

/// Accelerometer registers and identification of one silicon variant
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerometerDatasheet {
    /// 7-bit bus address
    pub address: u8,
    /// Chip identification register (`WHO_AM_I_A`)
    pub who_am_i: u8,
    /// Byte expected in `who_am_i`
    pub chip_id: u8,
    /// `CTRL_REG1_A`: output data rate, low-power enable, axis enables
    pub ctrl_reg1: u8,
    /// `CTRL_REG4_A`: full scale and high-resolution enable
    pub ctrl_reg4: u8,
    /// `OUT_X_L_A`
    pub out_x_l: u8,
    /// `OUT_X_H_A`
    pub out_x_h: u8,
    /// `OUT_Y_L_A`
    pub out_y_l: u8,
    /// `OUT_Y_H_A`
    pub out_y_h: u8,
    /// `OUT_Z_L_A`
    pub out_z_l: u8,
    /// `OUT_Z_H_A`
    pub out_z_h: u8,
}

/// Magnetometer and temperature registers and identification of one silicon
/// variant
///
/// The register numbers are authoritative: output and temperature registers
/// are not laid out the same way on every part.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagnetometerDatasheet {
    /// 7-bit bus address
    pub address: u8,
    /// Register read to identify the chip
    pub who_am_i: u8,
    /// Byte expected in `who_am_i`
    pub chip_id: u8,
    /// Configuration register A: temperature enable and output data rate
    pub cra: u8,
    /// Configuration register B: gain
    pub crb: u8,
    /// Width of the gain field at bit 5 of `crb`; higher bits are reserved
    pub gain_width: u8,
    /// Mode register
    pub mr: u8,
    /// `OUT_X_H_M`
    pub out_x_h: u8,
    /// `OUT_X_L_M`
    pub out_x_l: u8,
    /// `OUT_Z_H_M`
    pub out_z_h: u8,
    /// `OUT_Z_L_M`
    pub out_z_l: u8,
    /// `OUT_Y_H_M`
    pub out_y_h: u8,
    /// `OUT_Y_L_M`
    pub out_y_l: u8,
    /// `TEMP_OUT_H_M`
    pub temp_out_h: u8,
    /// `TEMP_OUT_L_M`
    pub temp_out_l: u8,
}

impl AccelerometerDatasheet {
    /// Register map of the accelerometer die of `variant`
    pub const fn for_variant(variant: SensorVariant) -> Self {
        let dlhc = AccelerometerDatasheet { address: ACCEL_ADDRESS,
                                            who_am_i: 0x0F,
                                            chip_id: 0x33,
                                            ctrl_reg1: 0x20,
                                            ctrl_reg4: 0x23,
                                            out_x_l: 0x28,
                                            out_x_h: 0x29,
                                            out_y_l: 0x2A,
                                            out_y_h: 0x2B,
                                            out_z_l: 0x2C,
                                            out_z_h: 0x2D };
        match variant {
            SensorVariant::Dlhc | SensorVariant::Agr => dlhc,
            SensorVariant::C => AccelerometerDatasheet { address: ACCEL_ADDRESS_C,
                                                         chip_id: 0x41,
                                                         ..dlhc },
        }
    }
}

impl MagnetometerDatasheet {
    /// Register map of the magnetometer die of `variant`
    pub const fn for_variant(variant: SensorVariant) -> Self {
        match variant {
            // No identification register on the DLHC; IRA_REG_M always
            // reads 0b0100_1000 and stands in for one.
            SensorVariant::Dlhc => MagnetometerDatasheet { address: MAG_ADDRESS,
                                                           who_am_i: 0x0A,
                                                           chip_id: 0x48,
                                                           cra: 0x00,
                                                           crb: 0x01,
                                                           gain_width: 3,
                                                           mr: 0x02,
                                                           out_x_h: 0x03,
                                                           out_x_l: 0x04,
                                                           out_z_h: 0x05,
                                                           out_z_l: 0x06,
                                                           out_y_h: 0x07,
                                                           out_y_l: 0x08,
                                                           temp_out_h: 0x31,
                                                           temp_out_l: 0x32 },
            SensorVariant::Agr => MagnetometerDatasheet { address: MAG_ADDRESS,
                                                          who_am_i: 0x4F,
                                                          chip_id: 0x40,
                                                          cra: 0x60,
                                                          crb: 0x61,
                                                          gain_width: 3,
                                                          mr: 0x02,
                                                          out_x_l: 0x68,
                                                          out_x_h: 0x69,
                                                          out_y_l: 0x6A,
                                                          out_y_h: 0x6B,
                                                          out_z_l: 0x6C,
                                                          out_z_h: 0x6D,
                                                          temp_out_h: 0x31,
                                                          temp_out_l: 0x32 },
            // CTRL_REG1_M / CTRL_REG2_M / CTRL_REG3_M; temperature low byte
            // sits below the high byte on this part. FS in CTRL_REG2_M is
            // bits 5-6 only, bit 7 is reserved.
            SensorVariant::C => MagnetometerDatasheet { address: MAG_ADDRESS,
                                                        who_am_i: 0x0F,
                                                        chip_id: 0x3D,
                                                        cra: 0x20,
                                                        crb: 0x21,
                                                        gain_width: 2,
                                                        mr: 0x22,
                                                        out_x_l: 0x28,
                                                        out_x_h: 0x29,
                                                        out_y_l: 0x2A,
                                                        out_y_h: 0x2B,
                                                        out_z_l: 0x2C,
                                                        out_z_h: 0x2D,
                                                        temp_out_h: 0x2F,
                                                        temp_out_l: 0x2E },
        }
    }
}

impl Default for AccelerometerDatasheet {
    fn default() -> Self {
        Self::for_variant(SensorVariant::default())
    }
}

impl Default for MagnetometerDatasheet {
    fn default() -> Self {
        Self::for_variant(SensorVariant::default())
    }
}
