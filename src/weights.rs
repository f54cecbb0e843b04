// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Channel weights for the greyscale conversion
//!
//! The carver never looks at colors directly; it sees a single
//! intensity per pixel, a weighted average of the three channels.
//! Equal weights give the usual (r+g+b)/3; callers who care more
//! about one channel can tip the scale.

use std::str::FromStr;

use crate::error::CarveError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RgbWeights {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl RgbWeights {
    pub fn new(red: u32, green: u32, blue: u32) -> Self {
        RgbWeights { red, green, blue }
    }

    pub fn sum(&self) -> u32 {
        self.red + self.green + self.blue
    }

    pub fn max(&self) -> u32 {
        self.red.max(self.green).max(self.blue)
    }

    /// The weighted greyscale value of one pixel.  Callers must have
    /// checked that the weights are not all zero.
    pub fn weigh(&self, red: i64, green: i64, blue: i64) -> i64 {
        (red * i64::from(self.red) + green * i64::from(self.green) + blue * i64::from(self.blue))
            / i64::from(self.sum())
    }
}

impl Default for RgbWeights {
    fn default() -> Self {
        RgbWeights::new(1, 1, 1)
    }
}

impl FromStr for RgbWeights {
    type Err = CarveError;

    /// Parses the "R,G,B" form the command line hands us.
    fn from_str(spec: &str) -> Result<Self, CarveError> {
        let parts: Vec<&str> = spec.split(',').collect();
        if parts.len() != 3 {
            return Err(CarveError::configuration(format!(
                "weights must be three comma-separated integers, got {:?}",
                spec
            )));
        }
        let mut channels = [0u32; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| {
                CarveError::configuration(format!("weight {:?} is not a whole number", part))
            })?;
        }
        Ok(RgbWeights::new(channels[0], channels[1], channels[2]))
    }
}
