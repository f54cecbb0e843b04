// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Local energy
//!
//! The energy of a working-image pixel is the horizontal intensity
//! difference between its two neighbors, looked up in the *original*
//! image through the transform matrix.  At the first and last working
//! columns there is only one neighbor, and the policy is one-sided:
//! take that neighbor's intensity as-is, no subtraction.  That exact
//! edge behavior is load-bearing for output compatibility; it lives
//! here and nowhere else.

use crate::intensity::IntensityGrid;
use crate::transform::TransformMatrix;

/// The horizontal neighborhood of a working column.  Every clamped
/// x−1/x+1 lookup in the engine goes through this one abstraction;
/// scattered copies of that index math are how off-by-one defects
/// breed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HorizontalNeighbors {
    /// Both neighbors exist.
    Interior { left: u32, right: u32 },
    /// First column: only a right neighbor.
    LeftEdge { right: u32 },
    /// Last column: only a left neighbor.
    RightEdge { left: u32 },
}

impl HorizontalNeighbors {
    /// The neighborhood of column `x` in a row of `width` columns.
    /// Widths under 2 never reach the engine; the carver rejects them
    /// at construction.
    pub fn of(x: u32, width: u32) -> Self {
        debug_assert!(width >= 2);
        debug_assert!(x < width);
        if x == 0 {
            HorizontalNeighbors::LeftEdge { right: x + 1 }
        } else if x == width - 1 {
            HorizontalNeighbors::RightEdge { left: x - 1 }
        } else {
            HorizontalNeighbors::Interior {
                left: x - 1,
                right: x + 1,
            }
        }
    }
}

/// |a − b| over unsigned intensities, widened for cost accumulation.
pub(crate) fn abs_diff(a: u32, b: u32) -> u64 {
    (i64::from(a) - i64::from(b)).abs() as u64
}

/// The vertical energy term `cV` of working pixel (x, y): the
/// absolute intensity difference of its horizontal neighbors, mapped
/// through the transform matrix, with the one-sided edge policy.
pub fn vertical_energy(
    intensity: &IntensityGrid,
    transform: &TransformMatrix,
    x: u32,
    y: u32,
) -> u64 {
    match HorizontalNeighbors::of(x, transform.width()) {
        HorizontalNeighbors::LeftEdge { right } => {
            u64::from(intensity.at(transform.original(right, y), y))
        }
        HorizontalNeighbors::RightEdge { left } => {
            u64::from(intensity.at(transform.original(left, y), y))
        }
        HorizontalNeighbors::Interior { left, right } => abs_diff(
            intensity.at(transform.original(right, y), y),
            intensity.at(transform.original(left, y), y),
        ),
    }
}
