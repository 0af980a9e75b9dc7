// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by degenerate track geometry.

use thiserror::Error;

/// Geometry that the mover cannot work with.
///
/// These are configuration errors on the host side (for example a loop carousel
/// with no slides); the mover never retries or repairs them.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// The cycle length used to wrap positions in loop mode is zero, negative, or not finite.
    #[error("cycle length must be positive and finite to wrap a position, got {size}")]
    DegenerateCycle {
        /// The offending cycle length reported by the layout.
        size: f64,
    },
}

impl GeometryError {
    /// Checks that `size` can be used as a wrap period.
    pub(crate) fn check_cycle(size: f64) -> Result<f64, Self> {
        if size.is_finite() && size > 0.0 {
            Ok(size)
        } else {
            Err(Self::DegenerateCycle { size })
        }
    }
}
