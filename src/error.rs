// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving
//!
//! There are only two kinds of failure: the caller handed us an image
//! or a target width the algorithm cannot work with, or the engine
//! itself broke a promise.  The algorithm is pure and deterministic,
//! so there is no retry or resume story; every call either completes
//! or reports one of these.

use failure::Fail;

#[derive(Debug, Fail)]
pub enum CarveError {
    /// Invalid construction input: image dimensions under 2×2, an
    /// all-zero weight triple, or more seams than the width can bear.
    /// Raised before any carving state is built.
    #[fail(display = "invalid carve configuration: {}", _0)]
    Configuration(String),

    /// An internal precondition failed.  This is a defect in the
    /// engine, not a condition a caller can recover from.
    #[fail(display = "carver invariant violated: {}", _0)]
    Invariant(&'static str),
}

impl CarveError {
    pub fn configuration<M: Into<String>>(message: M) -> CarveError {
        CarveError::Configuration(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        match self {
            CarveError::Configuration(_) => true,
            CarveError::Invariant(_) => false,
        }
    }
}
