// Copyright 2026 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The separation routine: a single left-to-right sweep over a run stack.

use core::fmt;
use core::ops::Range;

use smallvec::SmallVec;

use crate::{Scalar, SpanItem};

/// A contiguous group of items that have been merged because they overlapped.
///
/// Members of a run are packed gap-free in input order, so the run only needs
/// its combined left edge, its summed extent, and the index of its first
/// member; each member's final offset falls out of a prefix sum over the
/// extents of the members before it.
#[derive(Clone, Copy, Debug)]
struct Run<S> {
    start: S,
    extent: S,
    first: usize,
}

/// Inline capacity of the run stack. Label rows are usually short; longer
/// inputs spill to the heap.
type RunStack<S> = SmallVec<[Run<S>; 16]>;

/// Spreads `items` apart so that no two of them overlap.
///
/// Items must be sorted by ascending offset. Offsets are mutated in place:
/// each item is first clamped so it does not start before `bounds.start`,
/// and colliding neighbors are then merged into runs whose left edge moves
/// back by half the overlap (never below `bounds.start`), sharing the
/// correction between both sides. Extents are never changed.
///
/// The layout may run past `bounds.end` when the summed extents do not fit;
/// use [`separate_checked`] to surface that condition. An empty slice is a
/// no-op, and items whose offsets are already final are not written at all.
///
/// Sortedness and non-empty bounds are debug-asserted but not checked in
/// release builds; an unsorted input produces an unspecified (but
/// memory-safe) layout.
pub fn separate<T: SpanItem>(items: &mut [T], bounds: Range<T::Scalar>) {
    debug_assert!(bounds.start < bounds.end, "bounds must be a non-empty range");
    debug_assert!(
        items
            .windows(2)
            .all(|pair| pair[0].offset() <= pair[1].offset()),
        "items must be sorted by ascending offset"
    );

    let runs = build_runs(items, bounds.start);
    resolve(items, &runs);
}

/// Like [`separate`], but reports when the layout did not fit.
///
/// The mutation semantics are identical to [`separate`] — items are
/// separated either way, and a partial layout that overflows is still
/// usually worth rendering — but when the separated layout's right edge
/// passes `bounds.end`, the overflow is returned as [`CapacityExceeded`]
/// instead of being silently accepted.
pub fn separate_checked<T: SpanItem>(
    items: &mut [T],
    bounds: Range<T::Scalar>,
) -> Result<(), CapacityExceeded<T::Scalar>> {
    let max = bounds.end;
    separate(items, bounds);
    // After separation items are ordered and disjoint, so the last item
    // carries the layout's right edge.
    match items.last() {
        Some(last) if last.end() > max => Err(CapacityExceeded {
            end: last.end(),
            max,
        }),
        _ => Ok(()),
    }
}

/// The separated layout ran past the upper bound.
///
/// Returned by [`separate_checked`] when the summed extents exceed the
/// available room. Separation does not compress extents, so the only options
/// left to the caller are dropping items, shrinking them, or widening the
/// bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityExceeded<S> {
    /// Right edge of the separated layout.
    pub end: S,
    /// Upper bound the layout was asked to stay within.
    pub max: S,
}

impl<S: Scalar> fmt::Display for CapacityExceeded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "separated layout ends at {:?}, past the upper bound {:?}",
            self.end, self.max
        )
    }
}

impl<S: Scalar> core::error::Error for CapacityExceeded<S> {}

/// Sweeps left to right, folding colliding items into runs.
///
/// The stack is monotone: an incoming item starts a new singleton run, and
/// merging repeats while the second-to-top run reaches past the top run's
/// left edge. A merge can drop the combined left edge below the run before
/// it, so the check loops until the top two runs are disjoint. The stack
/// grows once per item and each merge removes one entry, so total work is
/// linear.
fn build_runs<T: SpanItem>(items: &[T], min: T::Scalar) -> RunStack<T::Scalar> {
    let mut runs = RunStack::new();
    for (index, item) in items.iter().enumerate() {
        runs.push(Run {
            start: item.offset().max(min),
            extent: item.extent(),
            first: index,
        });
        while let [.., left, right] = runs.as_slice() {
            let overlap = (left.start + left.extent) - right.start;
            if overlap <= T::Scalar::zero() {
                break;
            }
            // Split the correction between both sides, but never move the
            // combined run below the lower bound.
            let merged = Run {
                start: (left.start - overlap.half()).max(min),
                extent: left.extent + right.extent,
                first: left.first,
            };
            runs.pop();
            runs.pop();
            runs.push(merged);
        }
    }
    runs
}

/// Writes each run member's final offset: the run's left edge plus the
/// summed extents of the members before it.
fn resolve<T: SpanItem>(items: &mut [T], runs: &[Run<T::Scalar>]) {
    for (which, run) in runs.iter().enumerate() {
        let until = runs.get(which + 1).map_or(items.len(), |next| next.first);
        let mut cursor = run.start;
        for item in &mut items[run.first..until] {
            if item.offset() != cursor {
                item.set_offset(cursor);
            }
            cursor = cursor + item.extent();
        }
    }
}
