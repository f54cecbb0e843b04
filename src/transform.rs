// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The transform matrix
//!
//! Seams are never cut out of pixel data until the very end.  Instead
//! the carver keeps, per row, a mapping from working-image column to
//! original-image column, and removing a seam just rewrites that
//! mapping one column narrower.  Each row stays strictly increasing:
//! the working image is always the original with some columns gone,
//! never reordered.

use crate::cq;
use crate::error::CarveError;
use crate::grid::Grid;
use crate::seam::Seam;

#[derive(Debug, Clone, PartialEq)]
pub struct TransformMatrix {
    original_width: u32,
    columns: Grid<u32>,
}

impl TransformMatrix {
    /// The do-nothing mapping: every working column is its own
    /// original column.
    pub fn identity(width: u32, height: u32) -> Self {
        let mut columns = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                columns[(x, y)] = x;
            }
        }
        TransformMatrix {
            original_width: width,
            columns,
        }
    }

    /// Current working width; shrinks by one per removed seam.
    pub fn width(&self) -> u32 {
        self.columns.width()
    }

    pub fn height(&self) -> u32 {
        self.columns.height()
    }

    pub fn original_width(&self) -> u32 {
        self.original_width
    }

    /// Map a working-image column to its original-image column.
    pub fn original(&self, x: u32, y: u32) -> u32 {
        self.columns[(x, y)]
    }

    /// Rewrite the mapping to exclude one seam: a wholesale
    /// replacement, one column narrower, never an in-place edit.  For
    /// each row, columns left of the seam are copied unchanged and
    /// the rest shift left by one.
    pub fn remove_seam(&self, seam: &Seam) -> Result<TransformMatrix, CarveError> {
        let (width, height) = (self.width(), self.height());
        if seam.len() != height as usize {
            return Err(CarveError::Invariant(
                "seam length does not match transform height",
            ));
        }
        let mut columns = Grid::new(width - 1, height);
        for y in 0..height {
            let removed = seam.step(y).current_x;
            if removed >= width {
                return Err(CarveError::Invariant(
                    "seam column lies outside the working width",
                ));
            }
            for x in 0..width - 1 {
                columns[(x, y)] = cq!(x < removed, self.columns[(x, y)], self.columns[(x + 1, y)]);
            }
        }
        Ok(TransformMatrix {
            original_width: self.original_width,
            columns,
        })
    }
}
