/* embcordic | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point CORDIC sine and cosine */

/******************************************************************************/

#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

mod cordic;
mod domain;
mod fixed;

pub use cordic::{cos, cos_sin, sin, CORDIC_GAIN, ITERATIONS};
pub use domain::{cos_sin_with, cos_sin_wrapped, try_cos_sin, DomainError, DomainPolicy};
pub use fixed::Fixed;

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Error bound of the known angles, limited by the last arctangent step
    const KNOWN_EPSILON: f64 = 1.0 / (1 << 15) as f64;
    /// Error bound against the floating-point reference
    const EPSILON: f64 = 1.0 / (1 << 14) as f64;
    /// Bound on |cos² + sin² - 1|
    const NORM_EPSILON: f64 = 1.0 / (1 << 20) as f64;

    fn assert_cos_sin(angle: Fixed, expected: (f64, f64), epsilon: f64) {
        let (cos, sin) = cos_sin(angle);
        assert_abs_diff_eq!(cos.to_f64(), expected.0, epsilon = epsilon);
        assert_abs_diff_eq!(sin.to_f64(), expected.1, epsilon = epsilon);
    }

    fn assert_reference(angle: Fixed) {
        let (sin, cos) = angle.to_f64().sin_cos();
        assert_cos_sin(angle, (cos, sin), EPSILON);
    }

    #[test]
    fn test_known_angles() {
        assert_cos_sin(Fixed::ZERO, (1.0, 0.0), KNOWN_EPSILON);
        assert_cos_sin(Fixed::FRAC_PI_2, (0.0, 1.0), KNOWN_EPSILON);
        assert_cos_sin(Fixed::PI, (-1.0, 0.0), KNOWN_EPSILON);
        assert_cos_sin(-Fixed::FRAC_PI_2, (0.0, -1.0), KNOWN_EPSILON);
        assert_cos_sin(-Fixed::PI, (-1.0, 0.0), KNOWN_EPSILON);
    }

    #[test]
    fn test_boundaries() {
        assert_cos_sin(-Fixed::FRAC_PI_2, (0.0, -1.0), KNOWN_EPSILON);
        assert_cos_sin(Fixed::FRAC_PI_2, (0.0, 1.0), KNOWN_EPSILON);
        assert_cos_sin(Fixed::FRAC_3PI_2, (0.0, -1.0), KNOWN_EPSILON);
        assert_cos_sin(-Fixed::FRAC_3PI_2, (0.0, 1.0), KNOWN_EPSILON);
        assert_cos_sin(Fixed::TAU, (1.0, 0.0), KNOWN_EPSILON);
        assert_cos_sin(-Fixed::TAU, (1.0, 0.0), KNOWN_EPSILON);

        // One LSB on each side of the reduction thresholds
        for threshold in [-Fixed::FRAC_PI_2, Fixed::FRAC_PI_2, Fixed::FRAC_3PI_2] {
            for offset in [-1, 1] {
                assert_reference(Fixed::from_bits(threshold.to_bits() + offset));
            }
        }
        assert_reference(Fixed::from_bits(Fixed::TAU.to_bits() - 1));
        assert_reference(Fixed::from_bits(-Fixed::TAU.to_bits() + 1));
    }

    #[test]
    fn test_quarter_turns() {
        // -2π to 2π in π/4 increments
        let mut angle = -Fixed::TAU;
        for _ in 0..17 {
            assert_reference(angle);
            angle = angle + Fixed::FRAC_PI_4;
        }
        assert_eq!(angle - Fixed::FRAC_PI_4, Fixed::TAU);
    }

    /// Angle `i` of `count` evenly spaced steps spanning `[-2π, 2π]`
    fn sweep_angle(i: i64, count: i64) -> Fixed {
        let tau = Fixed::TAU.to_bits() as i64;
        Fixed::from_bits((-tau + 2 * tau * i / count) as i32)
    }

    #[test]
    fn test_sweep_angles() {
        let count = 100_000;
        assert_eq!(sweep_angle(0, count), -Fixed::TAU);
        assert_eq!(sweep_angle(count / 2, count), Fixed::ZERO);
        assert_eq!(sweep_angle(count, count), Fixed::TAU);

        // Past the point where 2 * i * 2π no longer fits in 32 bits
        let mut previous = sweep_angle(63_000, count);
        for i in 63_001..=count {
            let angle = sweep_angle(i, count);
            assert!(angle > previous && angle.is_angle());
            previous = angle;
        }
    }

    #[test]
    fn test_reference_sweep() {
        let count = 100_000;
        for i in 0..=count {
            assert_reference(sweep_angle(i, count));
        }
    }

    #[test]
    fn test_random_angles() {
        let tau = Fixed::TAU.to_bits();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let angle = Fixed::from_bits(rng.gen_range(-tau..=tau));
            assert_reference(angle);
            assert_eq!(cos(angle), cos_sin(angle).0);
            assert_eq!(sin(angle), cos_sin(angle).1);
        }
    }

    #[quickcheck]
    fn check_pythagorean_identity(bits: i32) -> bool {
        let (cos, sin) = cos_sin(Fixed::from_bits(bits).clamp_angle());
        let norm = cos.to_f64().powi(2) + sin.to_f64().powi(2);
        (norm - 1.0).abs() < NORM_EPSILON
    }

    #[quickcheck]
    fn check_deterministic(bits: i32) -> bool {
        let angle = Fixed::from_bits(bits).clamp_angle();
        let first = cos_sin(angle);
        (0..4).all(|_| cos_sin(angle) == first)
    }

    #[quickcheck]
    fn check_symmetry(bits: i32) -> bool {
        // cos(-a) = cos(a), sin(-a) = -sin(a), up to the last rotation steps
        let angle = Fixed::from_bits(bits).clamp_angle();
        let (cos_pos, sin_pos) = cos_sin(angle);
        let (cos_neg, sin_neg) = cos_sin(-angle);
        (cos_pos.to_f64() - cos_neg.to_f64()).abs() < 2.0 * EPSILON
            && (sin_pos.to_f64() + sin_neg.to_f64()).abs() < 2.0 * EPSILON
    }
}
