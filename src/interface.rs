//! Bus interface implementations for the BNO055
//!
//! This module provides implementations of the `device-driver` register interface
//! for the two host interfaces of the BNO055:
//!
//! - [`I2cInterface`]: plain register-addressed I2C access
//! - [`SerialInterface`]: the UART command/response protocol (`PS1 = 0`, `PS0 = 1`)
//!
//! Both present the same logical register interface to the driver, so every
//! operation of [`Bno055Driver`](crate::Bno055Driver) works over either transport.
//! [`Transport`] adds the timing and error classification the reset sequence
//! needs.

use crate::I2C_ADDRESS_COM3_LOW;

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};

/// Transport properties the driver relies on beyond plain register access
///
/// Custom register interfaces can implement this with the defaults, which
/// describe a transport that fails fast and only reports link-level errors.
pub trait Transport: RegisterInterface<AddressType = u8> {
    /// Upper bound in milliseconds on the time a failed single-byte read can
    /// block before it returns its error
    const FAILED_READ_MS: u32 = 0;

    /// True if `error` is a link-level failure that a chip rebooting in the
    /// middle of the transfer can cause, as opposed to an explicit rejection
    /// or a caller mistake
    fn is_link_error(error: &Self::Error) -> bool {
        let _ = error;
        true
    }
}

/// Largest payload accepted by the I2C interface in a single write
pub const I2C_MAX_PAYLOAD: usize = 32;

/// I2C interface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError<E> {
    /// Error reported by the I2C peripheral
    Bus(E),
    /// Write payload exceeds [`I2C_MAX_PAYLOAD`] (contains the payload length)
    PayloadTooLong(usize),
}

/// I2C interface for the BNO055
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x28, COM3 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Bno055Driver::new(interface, delay)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_COM3_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x29, COM3 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_COM3_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address used for every transaction
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = I2cError<E>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c
            .write_read(self.address, &[address], read_data)
            .map_err(I2cError::Bus)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let len = write_data.len();
        if len > I2C_MAX_PAYLOAD {
            return Err(I2cError::PayloadTooLong(len));
        }

        // Register address followed by the payload, sent as one bus write
        let mut buffer = [0u8; I2C_MAX_PAYLOAD + 1];
        buffer[0] = address;
        buffer[1..=len].copy_from_slice(write_data);

        self.i2c
            .write(self.address, &buffer[..=len])
            .map_err(I2cError::Bus)
    }
}

impl<I2C, E> Transport for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    fn is_link_error(error: &Self::Error) -> bool {
        // A NACK from a chip that is already rebooting shows up as a bus error
        matches!(error, I2cError::Bus(_))
    }
}

/// Start byte of every request frame
const START_BYTE: u8 = 0xAA;
/// Request type: register write
const WRITE_REQUEST: u8 = 0x00;
/// Request type: register read
const READ_REQUEST: u8 = 0x01;
/// Header of a status response (write acknowledge or read failure)
const STATUS_HEADER: u8 = 0xEE;
/// Header of a successful read response
const READ_HEADER: u8 = 0xBB;

/// Largest register block that can be transferred in one frame
pub const SERIAL_MAX_PAYLOAD: usize = 128;
/// Number of read requests issued before a read fails
pub const SERIAL_READ_ATTEMPTS: usize = 3;
/// Response window for one read request, in milliseconds
pub const SERIAL_READ_TIMEOUT_MS: u32 = 100;
/// Response window for a write request, in milliseconds
pub const SERIAL_WRITE_TIMEOUT_MS: u32 = 250;

const POLL_INTERVAL_MS: u32 = 1;

/// Status codes reported by the BNO055 in `0xEE` response frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseStatus {
    /// Write completed
    WriteSuccess = 0x01,
    /// Internal read failed
    ReadFail = 0x02,
    /// Internal write failed
    WriteFail = 0x03,
    /// Register address outside the register map
    RegmapInvalidAddress = 0x04,
    /// Register is read-only
    RegmapWriteDisabled = 0x05,
    /// Request did not start with 0xAA
    WrongStartByte = 0x06,
    /// Receive buffer overrun
    BusOverRunError = 0x07,
    /// Requested length above the maximum
    MaxLengthError = 0x08,
    /// Requested length below the minimum
    MinLengthError = 0x09,
    /// Inter-character timeout while receiving the request
    ReceiveCharacterTimeout = 0x0A,
}

impl ResponseStatus {
    /// Decode a status byte, returning `None` for undocumented codes
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::WriteSuccess),
            0x02 => Some(Self::ReadFail),
            0x03 => Some(Self::WriteFail),
            0x04 => Some(Self::RegmapInvalidAddress),
            0x05 => Some(Self::RegmapWriteDisabled),
            0x06 => Some(Self::WrongStartByte),
            0x07 => Some(Self::BusOverRunError),
            0x08 => Some(Self::MaxLengthError),
            0x09 => Some(Self::MinLengthError),
            0x0A => Some(Self::ReceiveCharacterTimeout),
            _ => None,
        }
    }
}

/// Serial interface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError<E> {
    /// Error reported by the underlying byte stream
    Io(E),
    /// No complete response arrived within the response window
    Timeout,
    /// The device answered with a non-success status (contains the status byte)
    Status(u8),
    /// Payload length outside 1..=128 bytes (contains the requested length)
    InvalidLength(usize),
}

impl<E> SerialError<E> {
    /// Decoded device status, if this error carries one
    #[must_use]
    pub const fn status(&self) -> Option<ResponseStatus> {
        match self {
            Self::Status(code) => ResponseStatus::from_code(*code),
            _ => None,
        }
    }
}

/// UART interface for the BNO055
///
/// Frames every register access with the BNO055 serial protocol:
///
/// | request | bytes |
/// |---|---|
/// | write | `AA 00 <reg> <len> <data...>` → `EE 01` |
/// | read | `AA 01 <reg> <len>` → `BB <len> <data...>` |
///
/// Failed requests are answered with `EE <status>`. Responses are collected by
/// polling the stream in 1 ms steps. Reads are re-issued up to
/// [`SERIAL_READ_ATTEMPTS`] times because the device may drop a request that
/// arrives while it is busy. Writes are not repeated.
///
/// The stream must be configured for 115200 baud, 8N1.
pub struct SerialInterface<S, D> {
    serial: S,
    delay: D,
}

impl<S, D> SerialInterface<S, D> {
    /// Create a new serial interface over a byte stream and a delay provider
    ///
    /// # Example
    /// ```ignore
    /// let interface = SerialInterface::new(uart, uart_delay);
    /// let mut imu = Bno055Driver::new(interface, delay)?;
    /// ```
    pub const fn new(serial: S, delay: D) -> Self {
        Self { serial, delay }
    }

    /// Consume the interface and return the byte stream and delay provider
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }
}

impl<S, D> SerialInterface<S, D>
where
    S: Read + Write + ReadReady,
    D: DelayNs,
{
    /// Discard bytes left over from an earlier, abandoned response
    fn drain(&mut self) -> Result<(), SerialError<S::Error>> {
        let mut scratch = [0u8; 16];
        while self.serial.read_ready().map_err(SerialError::Io)? {
            if self.serial.read(&mut scratch).map_err(SerialError::Io)? == 0 {
                break;
            }
        }
        Ok(())
    }

    fn send(&mut self, header: [u8; 4], payload: &[u8]) -> Result<(), SerialError<S::Error>> {
        self.drain()?;
        self.serial.write_all(&header).map_err(SerialError::Io)?;
        if !payload.is_empty() {
            self.serial.write_all(payload).map_err(SerialError::Io)?;
        }
        self.serial.flush().map_err(SerialError::Io)
    }

    /// Collect response bytes until `buf` is full, a status frame is complete,
    /// or `timeout_ms` elapses. Returns the number of bytes received.
    fn receive(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, SerialError<S::Error>> {
        let mut received = 0;
        let mut waited = 0;

        loop {
            while received < buf.len() && self.serial.read_ready().map_err(SerialError::Io)? {
                let n = self
                    .serial
                    .read(&mut buf[received..])
                    .map_err(SerialError::Io)?;
                if n == 0 {
                    break;
                }
                received += n;
            }

            let status_frame = received >= 2 && buf[0] == STATUS_HEADER;
            if received == buf.len() || status_frame || waited >= timeout_ms {
                return Ok(received);
            }

            self.delay.delay_ms(POLL_INTERVAL_MS);
            waited += POLL_INTERVAL_MS;
        }
    }
}

fn frame_length<E>(len: usize) -> Result<u8, SerialError<E>> {
    if len == 0 || len > SERIAL_MAX_PAYLOAD {
        return Err(SerialError::InvalidLength(len));
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(len as u8)
}

impl<S, D> RegisterInterface for SerialInterface<S, D>
where
    S: Read + Write + ReadReady,
    D: DelayNs,
{
    type Error = SerialError<S::Error>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // The frame carries the byte count instead
        let len = frame_length(read_data.len())?;
        let expected = read_data.len() + 2;

        let mut response = [0u8; SERIAL_MAX_PAYLOAD + 2];
        let mut received = 0;

        for _attempt in 1..=SERIAL_READ_ATTEMPTS {
            self.send([START_BYTE, READ_REQUEST, address, len], &[])?;
            received = self.receive(&mut response[..expected], SERIAL_READ_TIMEOUT_MS)?;

            if received == expected && response[0] == READ_HEADER && response[1] == len {
                read_data.copy_from_slice(&response[2..expected]);
                return Ok(());
            }

            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Serial read of 0x{:02X} failed (attempt {}/{}, {} bytes received)",
                address,
                _attempt,
                SERIAL_READ_ATTEMPTS,
                received
            );
        }

        if received < 2 || response[0] == READ_HEADER {
            Err(SerialError::Timeout)
        } else {
            Err(SerialError::Status(response[1]))
        }
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // The frame carries the byte count instead
        let len = frame_length(write_data.len())?;

        self.send([START_BYTE, WRITE_REQUEST, address, len], write_data)?;

        let mut response = [0u8; 2];
        let received = self.receive(&mut response, SERIAL_WRITE_TIMEOUT_MS)?;
        if received < 2 {
            return Err(SerialError::Timeout);
        }
        if response[0] != STATUS_HEADER || response[1] != ResponseStatus::WriteSuccess as u8 {
            return Err(SerialError::Status(response[1]));
        }
        Ok(())
    }
}

impl<S, D> Transport for SerialInterface<S, D>
where
    S: Read + Write + ReadReady,
    D: DelayNs,
{
    #[allow(clippy::cast_possible_truncation)]
    const FAILED_READ_MS: u32 = SERIAL_READ_ATTEMPTS as u32 * SERIAL_READ_TIMEOUT_MS;

    fn is_link_error(error: &Self::Error) -> bool {
        // A status frame is the chip answering, so it is not a reboot symptom
        matches!(error, SerialError::Io(_) | SerialError::Timeout)
    }
}
