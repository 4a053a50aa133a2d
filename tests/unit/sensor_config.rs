//! Unit tests for page-1 sensor configuration

use crate::common::create_mock_driver;
use crate::common::mock_interface::MockInterface;
use crate::common::test_utils::{
    create_mock_driver_with_config, test_accel_config, test_gyro_config, test_mag_config,
    MockDriver,
};
use bno055::{
    AccelBandwidth, AccelConfig, AccelPowerMode, AccelRange, DriverConfig, Error, GyroBandwidth,
    GyroConfig, GyroPowerMode, GyroRange, MagConfig, MagDataRate, MagOperationMode, MagPowerMode,
    OperatingMode, Page,
};

fn non_fusion_driver() -> (MockDriver, MockInterface) {
    let (mut driver, interface) = create_mock_driver();
    driver.set_mode(OperatingMode::Amg).unwrap();
    interface.clear_operations();
    (driver, interface)
}

#[test]
fn test_power_on_configuration() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.accel_config().unwrap(), AccelConfig::default());
    assert_eq!(driver.gyro_config().unwrap(), GyroConfig::default());
    assert_eq!(driver.mag_config().unwrap(), MagConfig::default());
}

#[test]
fn test_setters_rejected_in_fusion_mode() {
    let (mut driver, interface) = create_mock_driver();

    assert!(matches!(
        driver.set_accel_range(AccelRange::G16),
        Err(Error::InvalidMode(OperatingMode::Ndof))
    ));
    assert!(matches!(
        driver.set_gyro_config(test_gyro_config()),
        Err(Error::InvalidMode(OperatingMode::Ndof))
    ));
    assert!(matches!(
        driver.set_mag_power_mode(MagPowerMode::Sleep),
        Err(Error::InvalidMode(OperatingMode::Ndof))
    ));

    assert_eq!(interface.write_count(), 0);
}

#[test]
fn test_every_fusion_mode_rejects_setters() {
    let (mut driver, interface) = create_mock_driver();

    for mode in [
        OperatingMode::ImuPlus,
        OperatingMode::Compass,
        OperatingMode::M4g,
        OperatingMode::NdofFmcOff,
    ] {
        driver.set_mode(mode).unwrap();
        interface.clear_operations();
        assert!(matches!(
            driver.set_accel_config(test_accel_config()),
            Err(Error::InvalidMode(m)) if m == mode
        ));
        assert_eq!(interface.write_count(), 0);
    }
}

#[test]
fn test_getters_allowed_in_fusion_mode() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.accel_range().unwrap(), AccelRange::G4);
    assert_eq!(driver.gyro_range().unwrap(), GyroRange::Dps2000);
    assert_eq!(driver.mag_data_rate().unwrap(), MagDataRate::Hz20);
}

#[test]
fn test_set_accel_range_writes_page1() {
    let (mut driver, interface) = non_fusion_driver();

    driver.set_accel_range(AccelRange::G16).unwrap();

    assert_eq!(interface.get_register(Page::Page1, 0x08), 0x0F);
    assert_eq!(interface.page_switch_count(), 2);
    assert_eq!(interface.current_page(), Page::Page0);
    assert_eq!(driver.accel_range().unwrap(), AccelRange::G16);
}

#[test]
fn test_accel_fields_preserve_each_other() {
    let (mut driver, interface) = non_fusion_driver();

    driver.set_accel_bandwidth(AccelBandwidth::Hz1000).unwrap();
    driver.set_accel_power_mode(AccelPowerMode::LowPower1).unwrap();

    assert_eq!(driver.accel_range().unwrap(), AccelRange::G4);
    assert_eq!(driver.accel_bandwidth().unwrap(), AccelBandwidth::Hz1000);
    assert_eq!(driver.accel_power_mode().unwrap(), AccelPowerMode::LowPower1);
    assert_eq!(interface.get_register(Page::Page1, 0x08), 0b010_111_01);
}

#[test]
fn test_accel_config_round_trip() {
    let (mut driver, interface) = non_fusion_driver();

    driver.set_accel_config(test_accel_config()).unwrap();

    assert_eq!(interface.get_register(Page::Page1, 0x08), 0x12);
    assert_eq!(driver.accel_config().unwrap(), test_accel_config());
}

#[test]
fn test_gyro_config_round_trip() {
    let (mut driver, interface) = non_fusion_driver();

    driver.set_gyro_config(test_gyro_config()).unwrap();

    assert_eq!(interface.get_register(Page::Page1, 0x0A), 0x1A);
    assert_eq!(interface.get_register(Page::Page1, 0x0B), 0x00);
    assert_eq!(driver.gyro_config().unwrap(), test_gyro_config());
    // Both registers written inside a single page-1 scope
    assert_eq!(interface.page_switch_count(), 2 + 2);
}

#[test]
fn test_gyro_single_fields() {
    let (mut driver, interface) = non_fusion_driver();

    driver.set_gyro_range(GyroRange::Dps125).unwrap();
    driver.set_gyro_bandwidth(GyroBandwidth::Hz12).unwrap();
    driver
        .set_gyro_power_mode(GyroPowerMode::AdvancedPowerSave)
        .unwrap();

    assert_eq!(interface.get_register(Page::Page1, 0x0A), 0b00_101_100);
    assert_eq!(interface.get_register(Page::Page1, 0x0B), 0x04);
    assert_eq!(driver.gyro_range().unwrap(), GyroRange::Dps125);
    assert_eq!(driver.gyro_bandwidth().unwrap(), GyroBandwidth::Hz12);
    assert_eq!(
        driver.gyro_power_mode().unwrap(),
        GyroPowerMode::AdvancedPowerSave
    );
}

#[test]
fn test_reserved_gyro_range_code() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(Page::Page1, 0x0A, 0x07);

    assert!(matches!(driver.gyro_range(), Err(Error::InvalidConfig)));
    assert!(matches!(driver.gyro_config(), Err(Error::InvalidConfig)));
    assert_eq!(interface.current_page(), Page::Page0);
}

#[test]
fn test_mag_config_round_trip() {
    let (mut driver, interface) = non_fusion_driver();

    driver.set_mag_config(test_mag_config()).unwrap();

    assert_eq!(interface.get_register(Page::Page1, 0x09), 0x1B);
    assert_eq!(driver.mag_config().unwrap(), test_mag_config());
}

#[test]
fn test_mag_single_fields() {
    let (mut driver, _interface) = non_fusion_driver();

    driver.set_mag_data_rate(MagDataRate::Hz30).unwrap();
    driver
        .set_mag_operation_mode(MagOperationMode::LowPower)
        .unwrap();
    driver.set_mag_power_mode(MagPowerMode::Suspend).unwrap();

    assert_eq!(
        driver.mag_config().unwrap(),
        MagConfig {
            data_rate: MagDataRate::Hz30,
            operation_mode: MagOperationMode::LowPower,
            power_mode: MagPowerMode::Suspend,
        }
    );
}

#[test]
fn test_getter_restores_page_on_read_failure() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_next_read();

    assert!(driver.accel_range().is_err());
    assert_eq!(interface.current_page(), Page::Page0);
}

#[test]
fn test_config_applied_during_init() {
    let (mut driver, interface) = create_mock_driver_with_config(DriverConfig {
        mode: OperatingMode::Amg,
        accel: Some(test_accel_config()),
        gyro: Some(test_gyro_config()),
        mag: Some(test_mag_config()),
        ..DriverConfig::default()
    });

    assert_eq!(interface.get_register(Page::Page1, 0x08), 0x12);
    assert_eq!(interface.get_register(Page::Page1, 0x09), 0x1B);
    assert_eq!(interface.get_register(Page::Page1, 0x0A), 0x1A);
    assert_eq!(driver.mode().unwrap(), OperatingMode::Amg);
    assert_eq!(interface.current_page(), Page::Page0);
}

#[test]
fn test_init_keeps_power_on_config_by_default() {
    let (_driver, interface) = create_mock_driver();

    assert_eq!(interface.get_register(Page::Page1, 0x08), 0x0D);
    assert_eq!(interface.get_register(Page::Page1, 0x09), 0x6D);
    assert_eq!(interface.get_register(Page::Page1, 0x0A), 0x38);
}
