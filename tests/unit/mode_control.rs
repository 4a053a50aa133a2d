//! Unit tests for operating mode control

use crate::common::{create_mock_driver, MockDelay, MockInterface, RecordingDelay};
use bno055::{Bno055Driver, Error, OperatingMode};

#[test]
fn test_driver_starts_in_ndof() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(driver.mode().unwrap(), OperatingMode::Ndof);
    assert_eq!(interface.mode(), OperatingMode::Ndof);
}

#[test]
fn test_set_mode_goes_through_config() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_mode(OperatingMode::AccOnly).unwrap();

    assert_eq!(
        interface.mode_writes(),
        vec![OperatingMode::Config, OperatingMode::AccOnly]
    );
    assert_eq!(driver.mode().unwrap(), OperatingMode::AccOnly);
}

#[test]
fn test_set_config_mode_writes_once() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_mode(OperatingMode::Config).unwrap();

    assert_eq!(interface.mode_writes(), vec![OperatingMode::Config]);
}

#[test]
fn test_set_mode_settle_times() {
    let interface = MockInterface::new();
    let delay = RecordingDelay::new();
    let mut driver = Bno055Driver::new(interface, delay.clone()).unwrap();
    delay.clear();

    driver.set_mode(OperatingMode::Amg).unwrap();
    assert_eq!(delay.waits(), vec![20, 10]);

    delay.clear();
    driver.set_mode(OperatingMode::Config).unwrap();
    assert_eq!(delay.waits(), vec![20]);
}

#[test]
fn test_mode_is_read_from_device() {
    let (mut driver, interface) = create_mock_driver();

    // Changed behind the driver's back
    interface.set_mode(OperatingMode::Compass);
    assert_eq!(driver.mode().unwrap(), OperatingMode::Compass);
}

#[test]
fn test_mode_upper_nibble_ignored() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(bno055::Page::Page0, 0x3D, 0xF7);
    assert_eq!(driver.mode().unwrap(), OperatingMode::Amg);
}

#[test]
fn test_undefined_mode_value() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(bno055::Page::Page0, 0x3D, 0x0E);
    assert!(matches!(driver.mode(), Err(Error::InvalidModeValue(0x0E))));
}

#[test]
fn test_with_mode_restores_previous_mode() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_mode(OperatingMode::MagGyro).unwrap();
    interface.clear_operations();

    let seen = driver
        .with_mode(OperatingMode::Config, |d| d.mode())
        .unwrap();

    assert_eq!(seen, OperatingMode::Config);
    assert_eq!(interface.mode(), OperatingMode::MagGyro);
    assert_eq!(
        interface.mode_writes(),
        vec![
            OperatingMode::Config,
            OperatingMode::Config,
            OperatingMode::MagGyro
        ]
    );
}

#[test]
fn test_with_mode_restores_on_body_failure() {
    let (mut driver, interface) = create_mock_driver();

    let result: Result<(), _> =
        driver.with_mode(OperatingMode::Config, |_| Err(Error::InvalidConfig));

    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert_eq!(interface.mode(), OperatingMode::Ndof);
}

#[test]
fn test_with_mode_body_error_wins_over_restore_error() {
    let (mut driver, interface) = create_mock_driver();
    let iface = interface.clone();

    let result: Result<(), _> = driver.with_mode(OperatingMode::Config, |_| {
        // Restore will fail as well
        iface.fail_next_write();
        Err(Error::InvalidConfig)
    });

    assert!(matches!(result, Err(Error::InvalidConfig)));
}

#[test]
fn test_with_mode_reports_restore_failure() {
    let (mut driver, interface) = create_mock_driver();
    let iface = interface.clone();

    let result = driver.with_mode(OperatingMode::Config, |_| {
        iface.fail_next_write();
        Ok(42)
    });

    assert!(matches!(result, Err(Error::Bus(_))));
}

#[test]
fn test_with_mode_nested() {
    let (mut driver, interface) = create_mock_driver();

    let inner = driver
        .with_mode(OperatingMode::AccGyro, |d| {
            d.with_mode(OperatingMode::Config, |d| d.mode())?;
            d.mode()
        })
        .unwrap();

    assert_eq!(inner, OperatingMode::AccGyro);
    assert_eq!(interface.mode(), OperatingMode::Ndof);
}

#[test]
fn test_mode_read_failure_skips_body() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_next_read();

    let mut ran = false;
    let result = driver.with_mode(OperatingMode::Config, |_| {
        ran = true;
        Ok(())
    });

    assert!(result.is_err());
    assert!(!ran);
    assert_eq!(interface.write_count(), 0);
}

#[test]
fn test_mock_delay_driver_construction() {
    // Plain construction path used by most tests
    let driver = Bno055Driver::new(MockInterface::new(), MockDelay);
    assert!(driver.is_ok());
}
