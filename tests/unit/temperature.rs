//! Relative temperature through the magnetometer handle

use crate::common::{open_mag, read, BusError};
use lsm303::units::{Temperature, CELSIUS, ZERO_CELSIUS};
use lsm303::{Error, SensorVariant};

const ADDR: u8 = 0x1E;

#[test]
fn relative_temperature_is_uncorrected() {
    let (mut mag, bus, _) = open_mag(SensorVariant::Dlhc);
    bus.script_reads(ADDR, 0x31, &[0x00, 0x00, 0xFF]);
    bus.script_reads(ADDR, 0x32, &[0x00, 0x80, 0x80]);

    assert_eq!(mag.sense_relative_temperature(), Ok(ZERO_CELSIUS));
    assert_eq!(mag.sense_relative_temperature(), Ok(ZERO_CELSIUS + CELSIUS));
    assert_eq!(mag.sense_relative_temperature(), Ok(ZERO_CELSIUS - CELSIUS));
}

#[test]
fn high_byte_is_read_first() {
    let (mut mag, bus, _) = open_mag(SensorVariant::Dlhc);
    bus.set_register(ADDR, 0x31, 0x01);
    bus.set_register(ADDR, 0x32, 0x00);

    assert_eq!(mag.sense_relative_temperature_raw(), Ok(16));
    assert_eq!(bus.operations(), vec![read(ADDR, 0x31, 0x01), read(ADDR, 0x32, 0x00)]);
}

#[test]
fn variant_c_low_register_sits_below_high() {
    let (mut mag, bus, _) = open_mag(SensorVariant::C);
    bus.set_register(ADDR, 0x2F, 0xFF);
    bus.set_register(ADDR, 0x2E, 0x80);

    assert_eq!(mag.sense_relative_temperature_raw(), Ok(-8));
    assert_eq!(bus.operations(), vec![read(ADDR, 0x2F, 0xFF), read(ADDR, 0x2E, 0x80)]);
}

#[test]
fn raw_is_twelve_bit_signed() {
    let (mut mag, bus, _) = open_mag(SensorVariant::Dlhc);
    bus.script_reads(ADDR, 0x31, &[0x7F, 0x80, 0x00]);
    bus.script_reads(ADDR, 0x32, &[0xF0, 0x00, 0x0F]);

    assert_eq!(mag.sense_relative_temperature_raw(), Ok(2047));
    assert_eq!(mag.sense_relative_temperature_raw(), Ok(-2048));
    // bits below the 12-bit value are dropped
    assert_eq!(mag.sense_relative_temperature_raw(), Ok(0));
}

#[test]
fn one_count_is_an_eighth_of_a_degree() {
    let (mut mag, bus, _) = open_mag(SensorVariant::Dlhc);
    bus.set_register(ADDR, 0x31, 0x00);
    bus.set_register(ADDR, 0x32, 0x10);

    let t = mag.sense_relative_temperature().unwrap();
    assert_eq!(t, ZERO_CELSIUS + Temperature(125_000_000));
    assert_eq!(t - ZERO_CELSIUS, Temperature(CELSIUS.nanokelvin() / 8));
}

#[test]
fn bus_failure_between_bytes() {
    let (mut mag, bus, _) = open_mag(SensorVariant::Dlhc);
    bus.fail_after(1);
    assert_eq!(mag.sense_relative_temperature(), Err(Error::Bus(BusError)));
    assert_eq!(bus.operations().len(), 1);
}
