// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A generic two-dimensional map
//!
//! Every matrix in the carving engine -- the intensity grid, the
//! transform matrix, the cost matrix -- is a width × height field of
//! copyable cells.  This module is the one place that knows how such
//! a field is laid out in memory.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of cells.  The cell type must
/// implement Default so a freshly allocated grid is fully initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Allocate a grid of default-valued cells.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a grid from a row-major cell vector.  Returns None when
    /// the vector does not hold exactly width × height cells.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Grid {
            width,
            height,
            cells,
        })
    }

    // The number one rule of this game: keep the index math in a
    // singular location and never, ever mess with it.  Same row-major
    // variant as image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_default_initialized() {
        let grid: Grid<u32> = Grid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(grid[(x, y)], 0);
            }
        }
    }

    #[test]
    fn row_major_addressing() {
        let mut grid: Grid<u32> = Grid::new(3, 2);
        grid[(2, 0)] = 7;
        grid[(0, 1)] = 9;
        assert_eq!(grid.cells, vec![0, 0, 7, 9, 0, 0]);
    }

    #[test]
    fn from_raw_checks_the_cell_count() {
        assert!(Grid::from_raw(3, 2, vec![1u32; 6]).is_some());
        assert!(Grid::from_raw(3, 2, vec![1u32; 5]).is_none());
        let grid = Grid::from_raw(2, 2, vec![1u32, 2, 3, 4]).unwrap();
        assert_eq!(grid[(1, 0)], 2);
        assert_eq!(grid[(0, 1)], 3);
    }
}
