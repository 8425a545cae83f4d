//! A 3x3x3 cube stored as slices. The horizontal slices run around the L, F, R and B faces and the
//! vertical slices run over the U, F and D faces, so the two families overlap only on the front
//! face.

mod face;
mod rotation;

pub use rotation::{Rotation, RotationFamily};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Left
    L,
    /// Front
    F,
    /// Right
    R,
    /// Up
    U,
    /// Back
    B,
    /// Down
    D,
}

impl Face {
    /// Every face, in the order the faces are declared.
    pub const ARRAY: [Face; 6] = [Face::L, Face::F, Face::R, Face::U, Face::B, Face::D];
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Face::L => 'l',
            Face::F => 'f',
            Face::R => 'r',
            Face::U => 'u',
            Face::B => 'b',
            Face::D => 'd',
        };
        write!(f, "{c}")
    }
}

/// A single sticker, identified by the face and position (0 to 8, row major) it had on the solved
/// cube. Rotations only ever move facelets between slots, so this identity never changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facelet {
    face: Face,
    index: u8,
}

impl Facelet {
    const fn new(face: Face, index: u8) -> Self {
        Facelet { face, index }
    }

    /// The face this facelet belongs to on the solved cube.
    pub fn face(self) -> Face {
        self.face
    }

    /// The row major position of this facelet on its solved face.
    pub fn index(self) -> u8 {
        self.index
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.index)
    }
}

// Offset of the front block within each slice. Horizontal slices hold L F R B and vertical slices
// hold U F D, three facelets per face.
const FRONT: usize = 3;

/// A cube represented by its three horizontal slices (top to bottom) and three vertical slices
/// (left to right).
///
/// Horizontal slice `r` stores row `r` of the L, F, R and B faces, in that order. Vertical slice `c`
/// stores column `c` of the U, F and D faces, top to bottom. The front face lives in both families,
/// so `horizontal[r][3 + c]` and `vertical[c][3 + r]` always hold the same facelet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SliceCube {
    horizontal: [[Facelet; 12]; 3],
    vertical: [[Facelet; 9]; 3],
}

const fn solved_horizontal(row: usize) -> [Facelet; 12] {
    let faces = [Face::L, Face::F, Face::R, Face::B];
    let mut slice = [Facelet::new(Face::L, 0); 12];
    let mut i = 0;
    while i < 12 {
        slice[i] = Facelet::new(faces[i / 3], (row * 3 + i % 3) as u8);
        i += 1;
    }
    slice
}

const fn solved_vertical(col: usize) -> [Facelet; 9] {
    let faces = [Face::U, Face::F, Face::D];
    let mut slice = [Facelet::new(Face::U, 0); 9];
    let mut i = 0;
    while i < 9 {
        slice[i] = Facelet::new(faces[i / 3], ((i % 3) * 3 + col) as u8);
        i += 1;
    }
    slice
}

impl SliceCube {
    /// The solved cube stored as a const.
    pub const SOLVED: SliceCube = SliceCube {
        horizontal: [solved_horizontal(0), solved_horizontal(1), solved_horizontal(2)],
        vertical: [solved_vertical(0), solved_vertical(1), solved_vertical(2)],
    };

    /// Create a solved cube.
    pub fn new() -> Self {
        Self::SOLVED
    }

    /// Determine whether the two slice families agree on every facelet of the front face.
    pub fn is_consistent(&self) -> bool {
        (0..3).all(|r| {
            (0..3).all(|c| self.horizontal[r][FRONT + c] == self.vertical[c][FRONT + r])
        })
    }

    /// Determine whether every face shows only its own facelets, in their original positions.
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}

impl Default for SliceCube {
    fn default() -> Self {
        Self::SOLVED
    }
}
