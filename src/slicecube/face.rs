use super::{Face, Facelet, SliceCube};

impl SliceCube {
    /// Read the nine facelets of a face in row major order, as the face is drawn in the
    /// [`Display`](std::fmt::Display) diagram.
    ///
    /// ```rust
    /// use slice_cube::slicecube::{Face, SliceCube};
    ///
    /// let front = SliceCube::new().read_face(Face::F);
    /// assert_eq!(front.map(|f| f.index()), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// assert!(front.iter().all(|f| f.face() == Face::F));
    /// ```
    pub fn read_face(&self, face: Face) -> [Facelet; 9] {
        match face {
            Face::L => self.horizontal_block(0),
            Face::F => self.horizontal_block(3),
            Face::R => self.horizontal_block(6),
            Face::B => self.horizontal_block(9),
            // The vertical slices are columns, so these read transposed
            Face::U => self.vertical_block(0),
            Face::D => self.vertical_block(6),
        }
    }

    /// Read every face, in the order of [`Face::ARRAY`].
    pub fn faces(&self) -> [[Facelet; 9]; 6] {
        Face::ARRAY.map(|face| self.read_face(face))
    }

    fn horizontal_block(&self, offset: usize) -> [Facelet; 9] {
        std::array::from_fn(|i| self.horizontal[i / 3][offset + i % 3])
    }

    fn vertical_block(&self, offset: usize) -> [Facelet; 9] {
        std::array::from_fn(|i| self.vertical[i % 3][offset + i / 3])
    }
}

fn write_row(f: &mut std::fmt::Formatter<'_>, row: &[Facelet]) -> std::fmt::Result {
    for (i, facelet) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{facelet}")?;
    }
    Ok(())
}

/// Draws the cube unfolded into a cross, with U above and D below the front face:
///
/// ```text
///            u0 u1 u2
///            u3 u4 u5
///            u6 u7 u8
///            ________
/// l0 l1 l2 | f0 f1 f2 | r0 r1 r2 | b0 b1 b2
/// l3 l4 l5 | f3 f4 f5 | r3 r4 r5 | b3 b4 b5
/// l6 l7 l8 | f6 f7 f8 | r6 r7 r8 | b6 b7 b8
///            --------
///            d0 d1 d2
///            d3 d4 d5
///            d6 d7 d8
/// ```
impl std::fmt::Display for SliceCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const INDENT: &str = "           ";

        let up = self.read_face(Face::U);
        let down = self.read_face(Face::D);
        let band = [Face::L, Face::F, Face::R, Face::B].map(|face| self.read_face(face));

        for row in up.chunks(3) {
            f.write_str(INDENT)?;
            write_row(f, row)?;
            writeln!(f)?;
        }
        writeln!(f, "{INDENT}________")?;

        for r in 0..3 {
            for (i, face) in band.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write_row(f, &face[r * 3..r * 3 + 3])?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{INDENT}--------")?;
        for (i, row) in down.chunks(3).enumerate() {
            f.write_str(INDENT)?;
            write_row(f, row)?;
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
