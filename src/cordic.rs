/* embcordic | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point CORDIC rotation */

/******************************************************************************/

use crate::fixed::Fixed;

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/******************************************************************************/

/// Angle folded into the convergence range of the rotation loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Reduced {
    /// Raw Q3.28 angle in `[-π/2, π/2]`
    pub angle: i32,
    /// The cosine computed for `angle` has the opposite sign of the requested one
    pub flip_cos: bool
}

/// Maps an angle in `[-2π, 2π]` to `[-π/2, π/2]`
pub(crate) const fn reduce(angle: Fixed) -> Reduced {
    let mut angle = angle.to_bits();
    let mut flip_cos = false;

    // [-2π, 2π] --> [-π/2, 2π]
    if angle < -Fixed::FRAC_PI_2.to_bits() {
        angle += Fixed::TAU.to_bits();
    }

    // [-π/2, 2π] --> [-π/2, π/2]
    if angle > Fixed::FRAC_3PI_2.to_bits() {
        angle -= Fixed::TAU.to_bits();
    } else if angle > Fixed::FRAC_PI_2.to_bits() {
        // cos(π - a) = -cos(a), sin(π - a) = sin(a)
        angle = Fixed::PI.to_bits() - angle;
        flip_cos = true;
    }

    Reduced { angle, flip_cos }
}

/******************************************************************************/

/// Working state of one evaluation
///
/// The vector starts at `(K, 0)` so that the gain accumulated by the rotation steps
/// brings it back to unit length.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RotationState {
    pub x: i32,
    /// Value of `x` before the current step
    pub x_prev: i32,
    pub y: i32,
    /// Remaining angle
    pub z: i32,
    /// Number of steps performed so far
    pub steps: usize
}

impl RotationState {
    pub const fn new(angle: i32) -> Self {
        Self {
            x: GAIN_INV,
            x_prev: GAIN_INV,
            y: 0,
            z: angle,
            steps: 0
        }
    }

    /// Rotates the vector by `±atan(2^-i)` toward the remaining angle
    const fn step(&mut self, i: usize) {
        let dir = if self.z >= 0 { 1 } else { -1 };

        self.x -= dir * (self.y >> i);
        self.y += dir * (self.x_prev >> i);
        self.z -= dir * ATAN_TABLE[i];

        self.x_prev = self.x;
        self.steps += 1;
    }

    /// Same as [`RotationState::step()`], with the multiplication by `dir` replaced by a
    /// conditional two's complement negation: `(v ^ -1) + 1 == -v`, `(v ^ 0) - 0 == v`
    const fn step_branchless(&mut self, i: usize) {
        let dir = self.z >> 31;

        self.x -= ((self.y >> i) ^ dir) - dir;
        self.y += ((self.x_prev >> i) ^ dir) - dir;
        self.z -= (ATAN_TABLE[i] ^ dir) - dir;

        self.x_prev = self.x;
        self.steps += 1;
    }
}

/// Runs the rotation loop on a reduced angle
///
/// Always performs exactly [`ITERATIONS`] steps.
pub(crate) const fn rotate(angle: i32) -> RotationState {
    let mut state = RotationState::new(angle);
    let mut i = 0;
    while i < ITERATIONS {
        state.step(i);
        i += 1;
    }
    debug_assert!(state.steps == ITERATIONS);
    state
}

/// Branch-free variant of [`rotate()`], bit for bit identical
pub(crate) const fn rotate_branchless(angle: i32) -> RotationState {
    let mut state = RotationState::new(angle);
    let mut i = 0;
    while i < ITERATIONS {
        state.step_branchless(i);
        i += 1;
    }
    debug_assert!(state.steps == ITERATIONS);
    state
}

/// Undoes the sign change introduced by [`reduce()`]
pub(crate) const fn compose(state: &RotationState, flip_cos: bool) -> (Fixed, Fixed) {
    let cos = if flip_cos { -state.x } else { state.x };
    (Fixed::from_bits(cos), Fixed::from_bits(state.y))
}

/******************************************************************************/

/// Computes the cosine and sine of an angle
///
/// The angle must lie in `[-2π, 2π]`, which is only checked in debug builds. See
/// [`crate::try_cos_sin()`] and [`crate::cos_sin_wrapped()`] for other inputs.
/// The result is accurate to about `2^-14`.
///
/// For example:
/// ```
/// use embcordic::{cos_sin, Fixed};
///
/// let (cos, sin) = cos_sin(Fixed::FRAC_PI_2);
/// assert!(cos.to_f64().abs() < 1e-4);
/// assert!((sin.to_f64() - 1.0).abs() < 1e-4);
/// ```
pub const fn cos_sin(angle: Fixed) -> (Fixed, Fixed) {
    debug_assert!(angle.is_angle(), "angle outside of [-2π, 2π]");

    let reduced = reduce(angle);
    let state = if cfg!(feature = "branchless") {
        rotate_branchless(reduced.angle)
    } else {
        rotate(reduced.angle)
    };
    compose(&state, reduced.flip_cos)
}

/// Computes the cosine of an angle in `[-2π, 2π]`
pub const fn cos(angle: Fixed) -> Fixed {
    cos_sin(angle).0
}

/// Computes the sine of an angle in `[-2π, 2π]`
pub const fn sin(angle: Fixed) -> Fixed {
    cos_sin(angle).1
}

/******************************************************************************/
