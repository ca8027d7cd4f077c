//! Both dies opened on one bus

use crate::common::{MockBus, MockDelay, Operation};
use lsm303::units::ZERO_CELSIUS;
use lsm303::{AccelConfig, AccelMode, AccelRange, Accelerometer, MagConfig, MagGain, Magnetometer, SensorVariant};

fn addr_of(op: &Operation) -> u8 {
    match *op {
        Operation::Read { addr, .. } | Operation::Write { addr, .. } => addr,
    }
}

#[test]
fn accelerometer_and_magnetometer_share_a_bus() {
    let bus = MockBus::new();
    bus.set_id_register(0x19, 0x0F, 0x33);
    bus.set_id_register(0x1E, 0x0A, 0x48);
    let delay = MockDelay::new();

    let mut accel = Accelerometer::new(bus.clone(),
                                       delay.clone(),
                                       AccelConfig::new().range(AccelRange::_8G)
                                                         .mode(AccelMode::HighResolution))
        .expect("accelerometer should open");
    let opened_accel = bus.operations().len();
    assert!(bus.operations().iter().all(|op| addr_of(op) == 0x19));

    let mut mag = Magnetometer::new(bus.clone(), delay.clone(), MagConfig::new().gain(MagGain::_8_1_Ga))
        .expect("magnetometer should open");
    assert!(bus.operations()[opened_accel..].iter().all(|op| addr_of(op) == 0x1E));

    bus.set_register(0x19, 0x2D, 0x40);
    bus.set_register(0x1E, 0x05, 0x10);

    let (_, _, az) = accel.sense_raw().unwrap();
    let (_, _, mz) = mag.sense_raw().unwrap();
    assert_eq!(az, 0x4000);
    assert_eq!(mz, 0x1000);

    assert_eq!(accel.get_range(), Ok(AccelRange::_8G));
    assert_eq!(accel.get_mode(), Ok(AccelMode::HighResolution));
    assert_eq!(mag.get_gain(), Ok(MagGain::_8_1_Ga));
    assert_eq!(mag.sense_relative_temperature(), Ok(ZERO_CELSIUS));

    // 3 settles for the accelerometer, 2 for the magnetometer
    assert_eq!(delay.calls().len(), 5);
}

#[test]
fn lsm303c_pair() {
    let bus = MockBus::new();
    bus.set_id_register(0x1D, 0x0F, 0x41);
    bus.set_id_register(0x1E, 0x0F, 0x3D);

    let accel = Accelerometer::new(bus.clone(), MockDelay::new(), AccelConfig::new().variant(SensorVariant::C))
        .expect("accelerometer should open");
    let mag = Magnetometer::new(bus.clone(), MockDelay::new(), MagConfig::new().variant(SensorVariant::C))
        .expect("magnetometer should open");

    assert_eq!(accel.address(), 0x1D);
    assert_eq!(mag.address(), 0x1E);
    // temperature enabled on the magnetometer's CTRL_REG1_M
    assert_eq!(bus.register(0x1E, 0x20) & 0x80, 0x80);
}
