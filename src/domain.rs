/* embcordic | domain.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Handling of angles outside of [-2π, 2π] */

/******************************************************************************/

use thiserror::Error;

use crate::cordic::cos_sin;
use crate::fixed::Fixed;

/******************************************************************************/

/// What to do with an angle outside of `[-2π, 2π]`
///
/// Angles inside the domain are never modified, whatever the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DomainPolicy {
    /// Fail with [`DomainError::OutOfRange`]
    #[default]
    Reject,
    /// Reduce the angle modulo 2π
    Wrap,
    /// Clamp the angle to -2π or 2π
    Saturate
}

/// Error returned for an angle the selected [`DomainPolicy`] does not accept
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DomainError {
    /// The angle lies outside of `[-2π, 2π]`
    #[error("angle {angle} rad is outside of [-2π, 2π]")]
    OutOfRange {
        /// The rejected angle
        angle: Fixed
    }
}

impl DomainPolicy {
    /// Brings an angle into `[-2π, 2π]` according to the policy
    pub fn apply(self, angle: Fixed) -> Result<Fixed, DomainError> {
        if angle.is_angle() {
            return Ok(angle);
        }

        match self {
            DomainPolicy::Reject => {
                log::debug!("rejecting angle {:#010x}", angle.to_bits());
                Err(DomainError::OutOfRange { angle })
            },
            DomainPolicy::Wrap => Ok(wrap(angle)),
            DomainPolicy::Saturate => {
                let clamped = angle.clamp_angle();
                log::debug!("saturating angle {:#010x} to {:#010x}", angle.to_bits(), clamped.to_bits());
                Ok(clamped)
            }
        }
    }
}

/// Reduces an out-of-domain angle modulo 2π
fn wrap(angle: Fixed) -> Fixed {
    let wrapped = angle.wrap();
    log::debug!("wrapping angle {:#010x} to {:#010x}", angle.to_bits(), wrapped.to_bits());
    wrapped
}

/******************************************************************************/

/// Computes the cosine and sine of an angle, after applying a domain policy
pub fn cos_sin_with(angle: Fixed, policy: DomainPolicy) -> Result<(Fixed, Fixed), DomainError> {
    let angle = policy.apply(angle)?;
    Ok(cos_sin(angle))
}

/// Computes the cosine and sine of an angle, failing outside of `[-2π, 2π]`
///
/// For example:
/// ```
/// use embcordic::{try_cos_sin, DomainError, Fixed};
///
/// assert!(try_cos_sin(Fixed::PI).is_ok());
/// assert_eq!(
///     try_cos_sin(Fixed::from_f64(7.0)),
///     Err(DomainError::OutOfRange { angle: Fixed::from_f64(7.0) })
/// );
/// ```
pub fn try_cos_sin(angle: Fixed) -> Result<(Fixed, Fixed), DomainError> {
    cos_sin_with(angle, DomainPolicy::Reject)
}

/// Computes the cosine and sine of any representable angle
///
/// Same as [`cos_sin_with()`] with [`DomainPolicy::Wrap`], which cannot fail: angles
/// outside of `[-2π, 2π]` are first reduced modulo 2π.
pub fn cos_sin_wrapped(angle: Fixed) -> (Fixed, Fixed) {
    let angle = if angle.is_angle() { angle } else { wrap(angle) };
    cos_sin(angle)
}

/******************************************************************************/
