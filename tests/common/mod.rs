//! Common test utilities and mock implementations

#![allow(dead_code)]


pub use mock_interface::{MockError, MockInterface, Operation};
pub use mock_serial::{ScriptedSerial, SerialChip};
pub use test_utils::{
    assert_float_eq, create_mock_driver, create_mock_driver_with_config, MockDelay,
    RecordingDelay,
};
