//! Unit tests for error handling and recovery

use crate::common::{create_mock_driver, MockError};
use bno055::{Error, OperatingMode, Page};

#[test]
fn test_read_failure_basic() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    assert!(matches!(
        driver.chip_id(),
        Err(Error::Bus(MockError::Communication))
    ));
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.temperature().is_err());

    // Only a single operation fails
    interface.set_temperature(21);
    assert_eq!(driver.temperature().unwrap(), 21);
}

#[test]
fn test_write_failure_basic() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();

    assert!(matches!(
        driver.set_mode(OperatingMode::AccOnly),
        Err(Error::Bus(MockError::Communication))
    ));
}

#[test]
fn test_write_failure_recovery() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    assert!(driver.set_mode(OperatingMode::AccOnly).is_err());

    driver.set_mode(OperatingMode::AccOnly).unwrap();
    assert_eq!(driver.mode().unwrap(), OperatingMode::AccOnly);
}

#[test]
fn test_page_switch_failure_propagation() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_page_switch(true);

    assert!(matches!(
        driver.accel_config(),
        Err(Error::Bus(MockError::PageSwitch))
    ));
    assert!(!interface.was_read(0x00..=0x7F));

    interface.fail_page_switch(false);
    assert!(driver.accel_config().is_ok());
}

#[test]
fn test_page0_access_unaffected_by_page_switch_failure() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_page_switch(true);

    // Page 0 registers are read without touching PAGE_ID
    assert_eq!(driver.chip_id().unwrap(), 0xA0);
    assert!(driver.calibration_status().is_ok());
}

#[test]
fn test_invalid_mode_value_on_device() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(Page::Page0, 0x3D, 0x0E);

    assert!(matches!(driver.mode(), Err(Error::InvalidModeValue(0x0E))));
    // Gated reads need the mode and fail the same way
    assert!(matches!(
        driver.acceleration(),
        Err(Error::InvalidModeValue(0x0E))
    ));
}

#[test]
fn test_error_during_calibration_write() {
    let (mut driver, interface) = create_mock_driver();

    // The mode read succeeds, the switch to CONFIG fails
    interface.fail_next_write();
    assert!(driver.set_accel_offsets([1, 2, 3]).is_err());

    // The previous mode was restored
    assert_eq!(interface.mode(), OperatingMode::Ndof);
    assert_eq!(interface.get_samples(0x55, 3), vec![0, 0, 0]);
}

#[test]
fn test_consecutive_failures() {
    let (mut driver, interface) = create_mock_driver();

    for _ in 0..3 {
        interface.fail_next_read();
        assert!(driver.euler_angles().is_err());
    }

    assert!(driver.euler_angles().unwrap().is_some());
}

#[test]
fn test_error_state_isolation() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.calibration_status().is_err());

    // A failed read leaves no state behind
    assert_eq!(interface.write_count(), 0);
    assert!(driver.calibration_status().is_ok());
    assert_eq!(driver.mode().unwrap(), OperatingMode::Ndof);
}
