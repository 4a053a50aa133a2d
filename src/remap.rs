//! Axis remapping
//!
//! The BNO055 can re-route its internal X/Y/Z axes and flip their signs so the
//! reported frame matches the mounting orientation of the board
//! (datasheet section 3.4). Both registers are writable only in configuration
//! mode; the driver takes care of switching modes.

/// Physical source axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Physical X axis
    X = 0,
    /// Physical Y axis
    Y = 1,
    /// Physical Z axis
    Z = 2,
}

impl Axis {
    /// Decode a 2-bit axis code. Code 3 is not a valid axis.
    #[must_use]
    pub const fn from_bits(value: u8) -> Option<Self> {
        match value & 0x03 {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }
}

/// Direction of a remapped axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisSign {
    /// Axis keeps its direction
    #[default]
    Positive = 0,
    /// Axis is inverted
    Negative = 1,
}

impl AxisSign {
    const fn from_bit(set: bool) -> Self {
        if set {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// Mounting placements from datasheet table 3-4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placement {
    /// P0
    P0,
    /// P1 (power-on default)
    P1,
    /// P2
    P2,
    /// P3
    P3,
    /// P4
    P4,
    /// P5
    P5,
    /// P6
    P6,
    /// P7
    P7,
}

/// Axis remap configuration (`AXIS_MAP_CONFIG` + `AXIS_MAP_SIGN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRemap {
    /// Source axis reported as X
    pub x: Axis,
    /// Source axis reported as Y
    pub y: Axis,
    /// Source axis reported as Z
    pub z: Axis,
    /// Sign of the reported X axis
    pub x_sign: AxisSign,
    /// Sign of the reported Y axis
    pub y_sign: AxisSign,
    /// Sign of the reported Z axis
    pub z_sign: AxisSign,
}

impl Default for AxisRemap {
    fn default() -> Self {
        Self::placement(Placement::P1)
    }
}

impl AxisRemap {
    /// Remap for one of the datasheet mounting placements
    #[must_use]
    pub const fn placement(placement: Placement) -> Self {
        let (config, sign) = match placement {
            Placement::P0 => (0x21, 0x04),
            Placement::P1 => (0x24, 0x00),
            Placement::P2 => (0x24, 0x06),
            Placement::P3 => (0x21, 0x02),
            Placement::P4 => (0x24, 0x03),
            Placement::P5 => (0x21, 0x01),
            Placement::P6 => (0x21, 0x07),
            Placement::P7 => (0x24, 0x05),
        };

        // Table entries only use valid, distinct axis codes
        match Self::from_registers(config, sign) {
            Some(remap) => remap,
            None => Self {
                x: Axis::X,
                y: Axis::Y,
                z: Axis::Z,
                x_sign: AxisSign::Positive,
                y_sign: AxisSign::Positive,
                z_sign: AxisSign::Positive,
            },
        }
    }

    /// Decode `AXIS_MAP_CONFIG` and `AXIS_MAP_SIGN`
    ///
    /// Returns `None` if any axis field holds the undefined code 3.
    #[must_use]
    pub const fn from_registers(config: u8, sign: u8) -> Option<Self> {
        let (Some(x), Some(y), Some(z)) = (
            Axis::from_bits(config),
            Axis::from_bits(config >> 2),
            Axis::from_bits(config >> 4),
        ) else {
            return None;
        };

        Some(Self {
            x,
            y,
            z,
            x_sign: AxisSign::from_bit(sign & 0x04 != 0),
            y_sign: AxisSign::from_bit(sign & 0x02 != 0),
            z_sign: AxisSign::from_bit(sign & 0x01 != 0),
        })
    }

    /// `AXIS_MAP_CONFIG` value: X in bits 1:0, Y in bits 3:2, Z in bits 5:4
    #[must_use]
    pub const fn config_bits(&self) -> u8 {
        (self.z as u8) << 4 | (self.y as u8) << 2 | self.x as u8
    }

    /// `AXIS_MAP_SIGN` value: X sign in bit 2, Y in bit 1, Z in bit 0
    #[must_use]
    pub const fn sign_bits(&self) -> u8 {
        (self.x_sign.is_negative() as u8) << 2
            | (self.y_sign.is_negative() as u8) << 1
            | self.z_sign.is_negative() as u8
    }

    /// True if X, Y and Z take their data from three different source axes
    ///
    /// The chip does not check this; a remap with repeated axes produces
    /// meaningless fusion output.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        let (x, y, z) = (self.x as u8, self.y as u8, self.z as u8);
        x != y && y != z && x != z
    }
}
