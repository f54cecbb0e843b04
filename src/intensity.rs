// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The greyscale source
//!
//! The cost model only ever consults a single scalar intensity per
//! original-image pixel.  That view is computed exactly once, at
//! carver construction, and never mutated afterward; every seam found
//! later reads it through the transform matrix.

use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

use crate::grid::Grid;
use crate::weights::RgbWeights;

/// A width × height field of weighted greyscale intensities, in the
/// original image's coordinate space.
#[derive(Debug, Clone)]
pub struct IntensityGrid {
    grid: Grid<u32>,
}

impl IntensityGrid {
    /// Convert a whole image up front.  Generic on the image type,
    /// like every pixel-reading function in this crate.
    pub fn from_image<I, P, S>(image: &I, weights: &RgbWeights) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let mut grid = Grid::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            let rgb = image.get_pixel(x, y).to_rgb();
            let c = rgb.channels();
            let red: i64 = NumCast::from(c[0]).unwrap();
            let green: i64 = NumCast::from(c[1]).unwrap();
            let blue: i64 = NumCast::from(c[2]).unwrap();
            grid[(x, y)] = weights.weigh(red, green, blue) as u32;
        }
        IntensityGrid { grid }
    }

    /// Build a grid from precomputed intensities, row-major.  Returns
    /// None when the vector does not hold width × height values.
    pub fn from_raw(width: u32, height: u32, values: Vec<u32>) -> Option<Self> {
        Grid::from_raw(width, height, values).map(|grid| IntensityGrid { grid })
    }

    /// The intensity at an original-image coordinate.
    pub fn at(&self, x: u32, y: u32) -> u32 {
        self.grid[(x, y)]
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }
}
