// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=declutter_separate --heading-base-level=0

//! Declutter Separate: 1D overlap separation for positioned labels.
//!
//! This crate provides a small, renderer-agnostic core for spreading a row of
//! fixed-width items apart along a single axis so that none of them overlap.
//! The canonical use is keeping text labels legible on a timeline, axis, or
//! bar chart when their natural positions collide, but nothing here knows
//! about text or rendering: items are plain 1D spans.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for offsets and
//!   extents.
//! - [`SpanItem`]: a trait describing a caller-owned item with a mutable
//!   offset (left edge) and a fixed extent (width).
//! - [`Span`]: a ready-made plain implementation of [`SpanItem`] for callers
//!   that do not need their own item type.
//! - [`separate`]: the separation routine. It mutates item offsets in place
//!   so that no two items overlap, clamped to a lower bound.
//! - [`separate_checked`]: the same routine, but it reports
//!   [`CapacityExceeded`] when the separated layout runs past the upper
//!   bound instead of silently overflowing.
//!
//! Callers are responsible for:
//!
//! - Measuring item extents (for labels, typically via some text measurement
//!   facility) before calling in.
//! - Supplying items sorted by ascending offset.
//! - Reading the adjusted offsets back out for placement.
//!
//! ## Minimal example
//!
//! ```rust
//! use declutter_separate::{Span, separate};
//!
//! // Three 40-unit-wide tick labels; the first two collide.
//! let mut labels = [
//!     Span::new(10.0_f64, 40.0),
//!     Span::new(30.0, 40.0),
//!     Span::new(120.0, 40.0),
//! ];
//! separate(&mut labels, 0.0..400.0);
//!
//! // The colliding pair split the correction between them.
//! assert_eq!(labels[0].offset, 0.0);
//! assert_eq!(labels[1].offset, 40.0);
//! assert_eq!(labels[2].offset, 120.0);
//! ```
//!
//! ## Checked capacity
//!
//! [`separate`] never compresses items: when the summed extents exceed the
//! available room, the layout simply runs past the end of the bounds. Use
//! [`separate_checked`] when that condition should be surfaced:
//!
//! ```rust
//! use declutter_separate::{Span, separate_checked};
//!
//! let mut labels = [Span::new(0.0_f64, 60.0), Span::new(10.0, 60.0)];
//! let err = separate_checked(&mut labels, 0.0..100.0).unwrap_err();
//! assert_eq!(err.end, 120.0);
//! assert_eq!(err.max, 100.0);
//! ```
//!
//! ## Design notes
//!
//! - Overlap is strict: an item ending exactly where the next begins is
//!   touching, not overlapping, and is left alone. Zero-extent items act as
//!   point markers under the same rule.
//! - Colliding neighbors are merged into runs, and each merge shifts the
//!   combined left edge back by half the overlap, so displacement is shared
//!   between both sides instead of always pushing rightward. A merge can
//!   cascade into the run before it; total work stays linear in the number
//!   of items.
//! - Offsets are only written when they actually change, so a layout that is
//!   already separated is a fixed point and sees no mutation at all.
//!
//! This crate is `no_std`.

#![no_std]

mod scalar;
mod separate;
mod span;

pub use scalar::Scalar;
pub use separate::{CapacityExceeded, separate, separate_checked};
pub use span::{Span, SpanItem, is_separated};
