// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing
//!
//! Shrink or grow an image's width by repeatedly removing or
//! duplicating its least visually important vertical seam, instead of
//! squeezing every column equally.  Build a [`SeamCarver`] against an
//! image and a target width, then ask it to `resize()` or to paint
//! its seams with `show_seams()`.

mod ternary;

pub mod carver;
pub mod cost;
pub mod energy;
pub mod error;
pub mod grid;
pub mod imageops;
pub mod intensity;
pub mod seam;
pub mod transform;
pub mod weights;

pub use carver::SeamCarver;
pub use error::CarveError;
pub use seam::{Seam, SeamStep};
pub use weights::RgbWeights;
