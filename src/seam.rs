// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A seam, step by step
//!
//! A seam is a connected top-to-bottom path, one pixel per row.  Each
//! step remembers its column in two coordinate spaces at once: the
//! working image the seam was traced in, and the original image it
//! will eventually be removed from (or duplicated into).

/// One row's worth of seam.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SeamStep {
    /// Column in the working image current at discovery time.
    pub current_x: u32,
    /// The same column mapped back to the original image.
    pub original_x: u32,
}

/// A full top-to-bottom seam: exactly one step per row, adjacent
/// steps never more than one column apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    pub steps: Vec<SeamStep>,
}

impl Seam {
    pub fn new(steps: Vec<SeamStep>) -> Self {
        Seam { steps }
    }

    /// Number of rows the seam crosses.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step for a given row.
    pub fn step(&self, y: u32) -> SeamStep {
        self.steps[y as usize]
    }

    /// True when every pair of adjacent rows differs by at most one
    /// column.  The tracer guarantees this by construction; tests use
    /// it to keep the guarantee honest.
    pub fn is_connected(&self) -> bool {
        self.steps.windows(2).all(|pair| {
            let (a, b) = (i64::from(pair[0].current_x), i64::from(pair[1].current_x));
            (a - b).abs() <= 1
        })
    }
}
