//! Unit tests for axis remapping

use crate::common::create_mock_driver;
use bno055::{Axis, AxisRemap, AxisSign, Error, OperatingMode, Page, Placement};

#[test]
fn test_power_on_remap() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.axis_remap().unwrap(), AxisRemap::default());
}

#[test]
fn test_remap_round_trip() {
    let (mut driver, interface) = create_mock_driver();
    let remap = AxisRemap {
        x: Axis::Z,
        y: Axis::X,
        z: Axis::Y,
        x_sign: AxisSign::Negative,
        y_sign: AxisSign::Positive,
        z_sign: AxisSign::Negative,
    };

    driver.set_axis_remap(remap).unwrap();

    assert_eq!(driver.axis_remap().unwrap(), remap);
    assert_eq!(interface.get_register(Page::Page0, 0x41), remap.config_bits());
    assert_eq!(interface.get_register(Page::Page0, 0x42), remap.sign_bits());
    assert_eq!(interface.mode(), OperatingMode::Ndof);
}

#[test]
fn test_placement_preset_registers() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_axis_remap(AxisRemap::placement(Placement::P6))
        .unwrap();

    assert_eq!(interface.get_register(Page::Page0, 0x41), 0x21);
    assert_eq!(interface.get_register(Page::Page0, 0x42), 0x07);
}

#[test]
fn test_duplicate_axes_rejected_before_write() {
    let (mut driver, interface) = create_mock_driver();
    let remap = AxisRemap {
        z: Axis::X,
        ..AxisRemap::default()
    };

    assert!(matches!(
        driver.set_axis_remap(remap),
        Err(Error::InvalidConfig)
    ));
    assert_eq!(interface.write_count(), 0);
}

#[test]
fn test_remap_read_matches_register_codec() {
    let (mut driver, interface) = create_mock_driver();

    // Reserved high bits are set on the second pair
    for (config, sign) in [(0x24, 0x00), (0xE1, 0xFD), (0x12, 0x03)] {
        interface.set_register(Page::Page0, 0x41, config);
        interface.set_register(Page::Page0, 0x42, sign);

        assert_eq!(
            Some(driver.axis_remap().unwrap()),
            AxisRemap::from_registers(config, sign)
        );
    }
}

#[test]
fn test_invalid_axis_code_on_device() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(Page::Page0, 0x41, 0x34);

    assert!(matches!(driver.axis_remap(), Err(Error::InvalidConfig)));
}

#[test]
fn test_remap_read_needs_no_mode_switch() {
    let (mut driver, interface) = create_mock_driver();

    driver.axis_remap().unwrap();
    assert!(interface.mode_writes().is_empty());
}

#[test]
fn test_remap_write_from_non_fusion_mode() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_mode(OperatingMode::AccMag).unwrap();

    driver
        .set_axis_remap(AxisRemap::placement(Placement::P3))
        .unwrap();

    assert_eq!(
        driver.axis_remap().unwrap(),
        AxisRemap::placement(Placement::P3)
    );
    assert_eq!(interface.mode(), OperatingMode::AccMag);
}
