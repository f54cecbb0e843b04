// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carver itself
//!
//! A `SeamCarver` is built once against a borrowed image and a target
//! width, validates everything up front, and then answers `resize`
//! and `show_seams` deterministically for the rest of its life.  The
//! expensive part -- finding the seams, one cost matrix per seam,
//! each against the transform matrix already narrowed by its
//! predecessors -- happens at most once per instance; both entry
//! points share the discovered set.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::{debug, info};

use crate::cost::{build_cost_matrix, trace_minimal_seam};
use crate::cq;
use crate::error::CarveError;
use crate::imageops;
use crate::intensity::IntensityGrid;
use crate::seam::Seam;
use crate::transform::TransformMatrix;
use crate::weights::RgbWeights;

/// Which way `resize` will go, decided once at construction and
/// matched exactly once per call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ResizeStrategy {
    ReduceWidth,
    EnlargeWidth,
    NoOp,
}

/// A carving session over one borrowed image.
#[derive(Debug)]
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
    in_width: u32,
    in_height: u32,
    out_width: u32,
    seam_count: u32,
    strategy: ResizeStrategy,
    intensity: IntensityGrid,
    transform: TransformMatrix,
    seams: Option<Vec<Seam>>,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// A carver with equal channel weights.
    pub fn new(image: &'a I, out_width: u32) -> Result<Self, CarveError> {
        SeamCarver::with_weights(image, out_width, RgbWeights::default())
    }

    /// A carver with explicit greyscale weights.  All validation
    /// happens here; on error no partial instance exists.
    pub fn with_weights(
        image: &'a I,
        out_width: u32,
        weights: RgbWeights,
    ) -> Result<Self, CarveError> {
        let (in_width, in_height) = image.dimensions();
        if in_width < 2 || in_height < 2 {
            return Err(CarveError::configuration(format!(
                "image is too small to carve: {}x{}, minimum is 2x2",
                in_width, in_height
            )));
        }
        if weights.sum() == 0 {
            return Err(CarveError::configuration(
                "greyscale weights must not all be zero",
            ));
        }
        let seam_count = cq!(
            out_width > in_width,
            out_width - in_width,
            in_width - out_width
        );
        if seam_count > in_width / 2 {
            return Err(CarveError::configuration(format!(
                "{} seams requested but at most {} can be carved from width {}",
                seam_count,
                in_width / 2,
                in_width
            )));
        }

        let strategy = if out_width > in_width {
            ResizeStrategy::EnlargeWidth
        } else if out_width < in_width {
            ResizeStrategy::ReduceWidth
        } else {
            ResizeStrategy::NoOp
        };

        debug!(
            "carver ready: {}x{} -> {}x{}, {} seams",
            in_width, in_height, out_width, in_height, seam_count
        );

        Ok(SeamCarver {
            image,
            in_width,
            in_height,
            out_width,
            seam_count,
            strategy,
            intensity: IntensityGrid::from_image(image, &weights),
            transform: TransformMatrix::identity(in_width, in_height),
            seams: None,
        })
    }

    /// Resize to the width fixed at construction.  Output is always
    /// (out_width, in_height); repeated calls return the same image.
    pub fn resize(&mut self) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        match self.strategy {
            ResizeStrategy::NoOp => {
                info!("width unchanged, copying");
                Ok(imageops::duplicate(self.image))
            }
            ResizeStrategy::ReduceWidth => self.reduce_width(),
            ResizeStrategy::EnlargeWidth => self.enlarge_width(),
        }
    }

    /// The original image with every discovered seam painted in the
    /// caller's color, in original-image coordinates.  No other pixel
    /// is touched.
    pub fn show_seams(&mut self, color: P) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        self.discover_seams()?;
        let mut out = imageops::duplicate(self.image);
        for seam in self.seam_set()? {
            for (y, step) in seam.steps.iter().enumerate() {
                out.put_pixel(step.original_x, y as u32, color);
            }
        }
        Ok(out)
    }

    /// The discovered seams, in discovery order.  Finds them on first
    /// use.
    pub fn seams(&mut self) -> Result<&[Seam], CarveError> {
        self.discover_seams()?;
        self.seam_set()
    }

    fn seam_set(&self) -> Result<&[Seam], CarveError> {
        match &self.seams {
            Some(seams) => Ok(seams),
            None => Err(CarveError::Invariant("seam set missing after discovery")),
        }
    }

    // Every seam is found against the transform matrix with all of
    // its predecessors already removed; the set and the narrowed
    // matrix are kept for every later call on this instance.
    fn discover_seams(&mut self) -> Result<(), CarveError> {
        if self.seams.is_some() {
            return Ok(());
        }
        info!("searching for {} vertical seams", self.seam_count);
        let mut seams = Vec::with_capacity(self.seam_count as usize);
        for found in 0..self.seam_count {
            let costs = build_cost_matrix(&self.intensity, &self.transform);
            let seam = trace_minimal_seam(&costs, &self.transform)?;
            debug!(
                "seam {} of {} ends at working column {}",
                found + 1,
                self.seam_count,
                seam.step(self.in_height - 1).current_x
            );
            self.transform = self.transform.remove_seam(&seam)?;
            seams.push(seam);
        }
        self.seams = Some(seams);
        Ok(())
    }

    fn reduce_width(&mut self) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        self.discover_seams()?;
        info!("rendering reduced image at width {}", self.out_width);
        let mut out = ImageBuffer::new(self.out_width, self.in_height);
        for y in 0..self.in_height {
            for x in 0..self.out_width {
                out.put_pixel(x, y, self.image.get_pixel(self.transform.original(x, y), y));
            }
        }
        Ok(out)
    }

    // Enlargement discovers seams exactly as reduction does -- the
    // shrinking transform matrix is only a discovery tool here -- and
    // then duplicates each seam's original column, per row, next to
    // its source.
    fn enlarge_width(&mut self) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        self.discover_seams()?;
        info!("rendering enlarged image at width {}", self.out_width);
        let mut out = ImageBuffer::new(self.out_width, self.in_height);
        for y in 0..self.in_height {
            let mut columns: Vec<u32> = (0..self.in_width).collect();
            for seam in self.seam_set()? {
                columns.push(seam.step(y).original_x);
            }
            // Stable, so a duplicated column's two occurrences stay
            // adjacent.
            columns.sort();
            for (x, source) in columns.iter().enumerate() {
                out.put_pixel(x as u32, y, self.image.get_pixel(*source, y));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Pixel, Rgb, RgbImage};

    fn rgb(r: u8, g: u8, b: u8) -> Rgb<u8> {
        *Rgb::from_slice(&[r, g, b])
    }

    fn gradient(width: u32, height: u32) -> RgbImage {
        let mut img = ImageBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (x * 20) as u8;
                img.put_pixel(x, y, rgb(v, v, v));
            }
        }
        img
    }

    #[test]
    fn rejects_images_under_two_by_two() {
        let skinny = gradient(1, 5);
        let err = SeamCarver::new(&skinny, 1).unwrap_err();
        assert!(err.is_configuration());

        let flat = gradient(5, 1);
        let err = SeamCarver::new(&flat, 4).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn rejects_more_seams_than_half_the_width() {
        let img = gradient(10, 4);
        assert!(SeamCarver::new(&img, 4).unwrap_err().is_configuration());
        assert!(SeamCarver::new(&img, 16).unwrap_err().is_configuration());
        // Exactly half is allowed, both ways.
        assert!(SeamCarver::new(&img, 5).is_ok());
        assert!(SeamCarver::new(&img, 15).is_ok());
    }

    #[test]
    fn rejects_all_zero_weights() {
        let img = gradient(6, 4);
        let err = SeamCarver::with_weights(&img, 5, RgbWeights::new(0, 0, 0)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn equal_width_resize_is_an_identity_copy() {
        let img = gradient(6, 4);
        let mut carver = SeamCarver::new(&img, 6).unwrap();
        let copy = carver.resize().unwrap();
        assert_eq!(img.dimensions(), copy.dimensions());
        assert!(img.pixels().eq(copy.pixels()));
    }

    #[test]
    fn reduction_always_hits_the_requested_dimensions() {
        let img = gradient(9, 5);
        let mut carver = SeamCarver::new(&img, 6).unwrap();
        let out = carver.resize().unwrap();
        assert_eq!(out.dimensions(), (6, 5));
    }

    #[test]
    fn discovered_seams_are_connected() {
        let img = gradient(9, 5);
        let mut carver = SeamCarver::new(&img, 6).unwrap();
        let seams = carver.seams().unwrap();
        assert_eq!(seams.len(), 3);
        for seam in seams {
            assert_eq!(seam.len(), 5);
            assert!(seam.is_connected());
        }
    }
}
