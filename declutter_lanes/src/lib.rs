// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=declutter_lanes --heading-base-level=0

//! Declutter Lanes: overlap clustering and lane assignment for 1D spans.
//!
//! Where [`declutter_separate`] resolves collisions by *moving* items along
//! the axis, this crate resolves them by *stacking*: items keep their
//! offsets, and colliding ones are routed to parallel lanes — the way a day
//! calendar shows two simultaneous appointments side by side, or a timeline
//! chart stacks overlapping annotations in rows.
//!
//! The operations are:
//!
//! - [`clusters`]: partitions a sorted row of spans into maximal groups of
//!   transitively overlapping items, yielding one index range per group.
//!   Groups are independent: whatever a host does inside one group (extra
//!   columns, wider rows) cannot disturb items elsewhere on the axis.
//! - [`assign_lanes`]: assigns every span the first lane it fits into, so
//!   spans sharing a lane never overlap. The result is a [`LaneLayout`]
//!   with one lane index per item plus the total lane count.
//! - [`assign_lanes_capped`]: the same under a fixed lane budget; once all
//!   lanes are busy, an item shares the lane that frees up earliest and may
//!   overlap there.
//!
//! Both crates use the same span vocabulary ([`SpanItem`], [`Scalar`]) and
//! the same strict notion of overlap: touching edges do not collide, and
//! zero-extent spans act as point markers.
//!
//! ## Minimal example
//!
//! ```rust
//! use declutter_lanes::{assign_lanes, clusters};
//! use declutter_separate::Span;
//!
//! // Four meetings; the middle two overlap.
//! let day = [
//!     Span::new(9.0_f64, 1.0),
//!     Span::new(13.0, 2.0),
//!     Span::new(14.0, 2.0),
//!     Span::new(17.0, 1.0),
//! ];
//!
//! let groups: Vec<_> = clusters(&day).collect();
//! assert_eq!(groups, vec![0..1, 1..3, 3..4]);
//!
//! let layout = assign_lanes(&day);
//! assert_eq!(layout.lane_count, 2);
//! assert_eq!(layout.lanes, vec![0, 0, 1, 0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cluster;
mod lane;

pub use cluster::{Clusters, clusters};
pub use declutter_separate::{Scalar, Span, SpanItem};
pub use lane::{LaneLayout, assign_lanes, assign_lanes_capped};
