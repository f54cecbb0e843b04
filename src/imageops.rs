// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Whole-image transforms
//!
//! The simple companions of the carving engine: per-pixel recolorings
//! and uniform resamplings.  None of them know anything about seams;
//! the carver borrows `duplicate` for its no-op path and the CLI
//! exposes the rest directly.  Everything here reads generically from
//! any `GenericImageView` and writes a fresh buffer.

use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use log::info;

use crate::cq;
use crate::error::CarveError;
use crate::weights::RgbWeights;

fn channel_as_i64<S: Primitive + 'static>(channel: S) -> i64 {
    num_traits::NumCast::from(channel).unwrap()
}

/// An exact pixel-for-pixel copy in a fresh buffer.
pub fn duplicate<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        out.put_pixel(x, y, image.get_pixel(x, y));
    }
    out
}

/// Weighted greyscale conversion.  The weights must not all be zero.
pub fn greyscale<I, P, S>(image: &I, weights: &RgbWeights) -> Result<GrayImage, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    if weights.sum() == 0 {
        return Err(CarveError::configuration(
            "greyscale weights must not all be zero",
        ));
    }
    info!("converting to greyscale");
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let rgb = image.get_pixel(x, y).to_rgb();
        let c = rgb.channels();
        let grey = weights.weigh(
            channel_as_i64(c[0]),
            channel_as_i64(c[1]),
            channel_as_i64(c[2]),
        );
        let grey = grey.min(255) as u8;
        out.put_pixel(x, y, *Luma::from_slice(&[grey]));
    }
    Ok(out)
}

/// Scale each channel by its weight relative to the heaviest one.
pub fn change_hue<I, P, S>(image: &I, weights: &RgbWeights) -> Result<RgbImage, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    if weights.sum() == 0 {
        return Err(CarveError::configuration(
            "hue weights must not all be zero",
        ));
    }
    info!("changing hue");
    let max = i64::from(weights.max());
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let rgb = image.get_pixel(x, y).to_rgb();
        let c = rgb.channels();
        let scale = |channel: S, weight: u32| {
            (channel_as_i64(channel) * i64::from(weight) / max).min(255) as u8
        };
        let scaled = [
            scale(c[0], weights.red),
            scale(c[1], weights.green),
            scale(c[2], weights.blue),
        ];
        out.put_pixel(x, y, *Rgb::from_slice(&scaled));
    }
    Ok(out)
}

/// The gradient magnitude of the weighted greyscale image:
/// √((Δx² + Δy²) / 2), differencing against the next pixel in each
/// direction, or the previous one at the far edge.
pub fn gradient_magnitude<I, P, S>(image: &I, weights: &RgbWeights) -> Result<GrayImage, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let grey = greyscale(image, weights)?;
    info!("computing gradient magnitude");
    let (width, height) = grey.dimensions();
    let (mw, mh) = (width - 1, height - 1);
    let mut out = ImageBuffer::new(width, height);
    let at = |x: u32, y: u32| i64::from(grey.get_pixel(x, y).channels()[0]);
    for (y, x) in iproduct!(0..height, 0..width) {
        let here = at(x, y);
        let dx = here - at(cq!(x >= mw, cq!(x == 0, x, x - 1), x + 1), y);
        let dy = here - at(x, cq!(y >= mh, cq!(y == 0, y, y - 1), y + 1));
        let magnitude = (((dx * dx + dy * dy) as f64) / 2.0).sqrt() as u8;
        out.put_pixel(x, y, *Luma::from_slice(&[magnitude]));
    }
    Ok(out)
}

/// Uniform resampling, nearest source pixel by floor mapping.
pub fn nearest_neighbor<I, P, S>(image: &I, out_width: u32, out_height: u32) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    info!("resampling {}x{} nearest-neighbor", out_width, out_height);
    let (in_width, in_height) = image.dimensions();
    let mut out = ImageBuffer::new(out_width, out_height);
    for (y, x) in iproduct!(0..out_height, 0..out_width) {
        let sx = (u64::from(x) * u64::from(in_width) / u64::from(out_width)) as u32;
        let sy = (u64::from(y) * u64::from(in_height) / u64::from(out_height)) as u32;
        out.put_pixel(x, y, image.get_pixel(sx.min(in_width - 1), sy.min(in_height - 1)));
    }
    out
}

/// Uniform resampling, bilinear interpolation with the corners of the
/// source and target aligned.
pub fn bilinear<I, P, S>(image: &I, out_width: u32, out_height: u32) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    info!("resampling {}x{} bilinear", out_width, out_height);
    let (in_width, in_height) = image.dimensions();
    let span = |out_extent: u32, in_extent: u32| {
        cq!(
            out_extent <= 1,
            0.0,
            f64::from(in_extent - 1) / f64::from(out_extent - 1)
        )
    };
    let (step_x, step_y) = (span(out_width, in_width), span(out_height, in_height));

    let mut out = ImageBuffer::new(out_width, out_height);
    for (y, x) in iproduct!(0..out_height, 0..out_width) {
        let gx = f64::from(x) * step_x;
        let gy = f64::from(y) * step_y;
        let (x0, y0) = (gx.floor() as u32, gy.floor() as u32);
        let (x1, y1) = ((x0 + 1).min(in_width - 1), (y0 + 1).min(in_height - 1));
        let (fx, fy) = (gx - f64::from(x0), gy - f64::from(y0));

        let p00 = image.get_pixel(x0, y0);
        let p10 = image.get_pixel(x1, y0);
        let p01 = image.get_pixel(x0, y1);
        let p11 = image.get_pixel(x1, y1);

        let c00 = p00.channels();
        let c10 = p10.channels();
        let c01 = p01.channels();
        let c11 = p11.channels();

        let mut blended: Vec<S> = Vec::with_capacity(c00.len());
        for i in 0..c00.len() {
            let f = |s: &[S]| -> f64 { num_traits::NumCast::from(s[i]).unwrap() };
            let top = f(c00) * (1.0 - fx) + f(c10) * fx;
            let bottom = f(c01) * (1.0 - fx) + f(c11) * fx;
            let value = top * (1.0 - fy) + bottom * fy;
            blended.push(num_traits::NumCast::from(value.round()).unwrap());
        }
        out.put_pixel(x, y, *P::from_slice(&blended));
    }
    out
}
