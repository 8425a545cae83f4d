//! A library which models the facelets of a 3x3x3 cube as two families of slices, horizontal and
//! vertical, kept in agreement on the front face they share.
//!
//! ```rust
//! use slice_cube::slicecube::{RotationFamily, SliceCube};
//!
//! let mut cube = SliceCube::new();
//! cube.rotate(RotationFamily::XPositive, 1).unwrap();
//! assert!(cube.is_consistent());
//! println!("{cube}");
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod moves;
pub mod slicecube;
