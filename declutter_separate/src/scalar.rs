// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for offsets and extents.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// Scalar type used for offsets, extents, and bounds.
///
/// This is currently implemented for `f32` and `f64`. The trait is
/// deliberately minimal and geared toward floating-point coordinates.
pub trait Scalar: Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns half of the value.
    ///
    /// Used to split an overlap correction evenly between two neighbors.
    fn half(self) -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn half(self) -> Self {
        self / 2.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn half(self) -> Self {
        self / 2.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}
