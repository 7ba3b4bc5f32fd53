/* embcordic | fixed.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Q3.28 signed fixed-point numbers */

/******************************************************************************/

use core::fmt;
use core::ops::{Add, Neg, Sub};

/******************************************************************************/

/// Signed Q3.28 fixed-point value
///
/// 1 sign bit, 3 integer bits and 28 fraction bits in a 32-bit container.
/// The represented real value is `bits * 2^-28`, which covers `[-8, 8)` with a
/// resolution of `2^-28`. Angles are expressed in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Fixed(i32);

impl Fixed {
    /// Number of fraction bits
    pub const FRAC_BITS: u32 = 28;

    /// 0
    pub const ZERO: Self = Self(0);
    /// 1
    pub const ONE: Self = Self(1 << Self::FRAC_BITS);
    /// -8, smallest representable value
    pub const MIN: Self = Self(i32::MIN);
    /// 8 - 2^-28, largest representable value
    pub const MAX: Self = Self(i32::MAX);

    /// π
    pub const PI: Self = Self(0x3243f6a8);
    /// π / 2
    pub const FRAC_PI_2: Self = Self(Self::PI.0 >> 1);
    /// π / 4
    pub const FRAC_PI_4: Self = Self(Self::PI.0 >> 2);
    /// 3π / 2
    pub const FRAC_3PI_2: Self = Self(3 * Self::FRAC_PI_2.0);
    /// 2π
    pub const TAU: Self = Self(Self::PI.0 << 1);

    /// Multiplier converting the raw encoding into a real value
    const SCALE: f64 = 1.0 / (1u32 << Self::FRAC_BITS) as f64;

    /// Builds a value from its raw Q3.28 encoding
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the raw Q3.28 encoding
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Converts a real value, rounding half away from zero
    ///
    /// Values outside of `[-8, 8)` saturate. Usable in constant expressions:
    /// ```
    /// use embcordic::Fixed;
    ///
    /// const HALF: Fixed = Fixed::from_f64(0.5);
    /// assert_eq!(HALF.to_bits(), 1 << 27);
    /// ```
    pub const fn from_f64(x: f64) -> Self {
        let scaled = x / Self::SCALE;
        let rounded = if scaled < 0.0 { scaled - 0.5 } else { scaled + 0.5 };
        Self(rounded as i32)
    }

    /// Converts to a real value
    pub const fn to_f64(self) -> f64 {
        self.0 as f64 * Self::SCALE
    }

    /// Converts to a real value, possibly losing precision
    pub const fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Checks that the angle lies in `[-2π, 2π]`
    pub const fn is_angle(self) -> bool {
        self.0 >= -Self::TAU.0 && self.0 <= Self::TAU.0
    }

    /// Reduces an angle modulo 2π into `[0, 2π)`
    pub const fn wrap(self) -> Self {
        Self(self.0.rem_euclid(Self::TAU.0))
    }

    /// Saturates an angle into `[-2π, 2π]`
    pub const fn clamp_angle(self) -> Self {
        if self.0 < -Self::TAU.0 {
            Self(-Self::TAU.0)
        } else if self.0 > Self::TAU.0 {
            Self::TAU
        } else {
            self
        }
    }
}

/******************************************************************************/

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

/******************************************************************************/
