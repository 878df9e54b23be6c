// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy lane assignment: overlapping spans go to parallel lanes.

use alloc::vec::Vec;

use declutter_separate::{Scalar, SpanItem};

/// Result of a lane assignment.
///
/// Lane indices are dense: every lane in `0..lane_count` holds at least one
/// item. Hosts typically map lanes to rows or columns and keep the item
/// offsets as-is along the main axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaneLayout {
    /// Lane index for each input span, in input order.
    pub lanes: Vec<usize>,
    /// Total number of lanes used.
    pub lane_count: usize,
}

/// Assigns every span the first lane it fits into.
///
/// Items must be sorted by ascending offset. Spans sharing a lane never
/// overlap (touching is allowed), and on sorted input the greedy choice uses
/// as few lanes as possible: the lane count equals the deepest pileup of
/// simultaneously overlapping spans.
#[must_use]
pub fn assign_lanes<T: SpanItem>(items: &[T]) -> LaneLayout {
    assign(items, None)
}

/// Assigns lanes under a fixed budget.
///
/// Works like [`assign_lanes`] until all `max_lanes` lanes are busy; after
/// that, an item is placed on the lane that frees up earliest and may
/// overlap its neighbor there. A host showing at most two columns of
/// calendar entries, for example, accepts the overlap on the second column
/// rather than growing a third.
///
/// A budget of zero is treated as one lane.
#[must_use]
pub fn assign_lanes_capped<T: SpanItem>(items: &[T], max_lanes: usize) -> LaneLayout {
    assign(items, Some(max_lanes.max(1)))
}

fn assign<T: SpanItem>(items: &[T], cap: Option<usize>) -> LaneLayout {
    debug_assert!(
        items
            .windows(2)
            .all(|pair| pair[0].offset() <= pair[1].offset()),
        "items must be sorted by ascending offset"
    );

    let mut lanes = Vec::with_capacity(items.len());
    // Right edge of the last span on each lane. Lane counts stay small in
    // practice, so a linear probe beats anything cleverer.
    let mut ends: Vec<T::Scalar> = Vec::new();

    for item in items {
        let start = item.offset();
        let lane = match ends.iter().position(|&end| end <= start) {
            Some(free) => {
                ends[free] = item.end();
                free
            }
            None if cap.is_none_or(|cap| ends.len() < cap) => {
                ends.push(item.end());
                ends.len() - 1
            }
            None => {
                // Budget exhausted: double up on the lane that frees up
                // earliest. Its end only ever moves forward.
                let mut crowded = 0;
                for (index, &end) in ends.iter().enumerate() {
                    if end < ends[crowded] {
                        crowded = index;
                    }
                }
                ends[crowded] = ends[crowded].max(item.end());
                crowded
            }
        };
        lanes.push(lane);
    }

    LaneLayout {
        lane_count: ends.len(),
        lanes,
    }
}
