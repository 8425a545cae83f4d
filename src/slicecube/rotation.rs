use super::{Facelet, SliceCube, FRONT};
use crate::error::{InvalidRotationRequest, ParseRotationError};
use crate::moves::{Cancellation, Move, MoveSequence};

use std::str::FromStr;

/// The direction and family of a quarter turn. X rotations turn a horizontal slice, Y rotations
/// turn a vertical slice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RotationFamily {
    /// No family chosen. Rotations with this family are always rejected.
    #[default]
    Undefined,
    /// Turn a horizontal slice to the right (L goes to F)
    XPositive,
    /// Turn a horizontal slice to the left (F goes to L)
    XNegative,
    /// Turn a vertical slice down (U goes to F)
    YPositive,
    /// Turn a vertical slice up (F goes to U)
    YNegative,
}

impl RotationFamily {
    fn is_x(self) -> bool {
        matches!(self, RotationFamily::XPositive | RotationFamily::XNegative)
    }

    fn opposite(self) -> RotationFamily {
        match self {
            RotationFamily::Undefined => RotationFamily::Undefined,
            RotationFamily::XPositive => RotationFamily::XNegative,
            RotationFamily::XNegative => RotationFamily::XPositive,
            RotationFamily::YPositive => RotationFamily::YNegative,
            RotationFamily::YNegative => RotationFamily::YPositive,
        }
    }
}

/// A validated quarter turn of one slice. The only way to obtain one is through
/// [`Rotation::new`] (or parsing), so applying a `Rotation` can never fail.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rotation {
    family: RotationFamily,
    // 0 based
    slice: usize,
}

impl Rotation {
    /// Validate a rotation of the given family on slice `line` (1 to 3).
    pub fn new(family: RotationFamily, line: u8) -> Result<Rotation, InvalidRotationRequest> {
        if family == RotationFamily::Undefined {
            return Err(InvalidRotationRequest::UndefinedFamily);
        }
        if !(1..=3).contains(&line) {
            return Err(InvalidRotationRequest::LineOutOfRange(line));
        }

        Ok(Rotation {
            family,
            slice: line as usize - 1,
        })
    }

    /// The family of this rotation.
    pub fn family(self) -> RotationFamily {
        self.family
    }

    /// The slice line (1 to 3) this rotation turns.
    pub fn line(self) -> u8 {
        self.slice as u8 + 1
    }
}

impl Move for Rotation {
    fn inverse(self) -> Self {
        Rotation {
            family: self.family.opposite(),
            slice: self.slice,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.family.is_x() == b.family.is_x()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.inverse() == b {
            Cancellation::NoMove
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// Written the way rotations are parsed, e.g. x2 or y1'
impl std::fmt::Debug for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (axis, prime) = match self.family {
            RotationFamily::XPositive => ('x', ""),
            RotationFamily::XNegative => ('x', "'"),
            RotationFamily::YPositive => ('y', ""),
            RotationFamily::YNegative => ('y', "'"),
            RotationFamily::Undefined => ('?', ""),
        };
        write!(f, "{axis}{}{prime}", self.line())
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for Rotation {
    type Err = ParseRotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let axis = chars.next().ok_or(ParseRotationError::Empty)?;
        let rest = chars.as_str();
        let (line, prime) = match rest.strip_suffix('\'') {
            Some(line) => (line, true),
            None => (rest, false),
        };

        let family = match (axis.to_ascii_lowercase(), prime) {
            ('x', false) => RotationFamily::XPositive,
            ('x', true) => RotationFamily::XNegative,
            ('y', false) => RotationFamily::YPositive,
            ('y', true) => RotationFamily::YNegative,
            _ => return Err(ParseRotationError::UnknownAxis(axis)),
        };
        let line = line
            .parse::<u8>()
            .map_err(|_| ParseRotationError::BadLine(s.to_string()))?;

        Ok(Rotation::new(family, line)?)
    }
}

impl FromStr for MoveSequence<Rotation> {
    type Err = ParseRotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Rotation>).collect()
    }
}

// Move the facelets of a slice round by one face. Positive turns move the last face's facelets to
// the front of the slice.
fn shift<const N: usize>(slice: &mut [Facelet; N], positive: bool) {
    if positive {
        slice.rotate_right(3);
    } else {
        slice.rotate_left(3);
    }
}

impl SliceCube {
    /// Rotate slice `line` (1 to 3) of the given family by a quarter turn. An invalid request is
    /// rejected without touching the cube.
    ///
    /// ```rust
    /// use slice_cube::error::InvalidRotationRequest;
    /// use slice_cube::slicecube::{RotationFamily, SliceCube};
    ///
    /// let mut cube = SliceCube::new();
    /// assert_eq!(
    ///     cube.rotate(RotationFamily::XPositive, 4),
    ///     Err(InvalidRotationRequest::LineOutOfRange(4))
    /// );
    /// assert!(cube.is_solved());
    /// ```
    pub fn rotate(
        &mut self,
        family: RotationFamily,
        line: u8,
    ) -> Result<(), InvalidRotationRequest> {
        let rotation = Rotation::new(family, line).inspect_err(|err| {
            tracing::warn!(?family, line, %err, "rejected rotation");
        })?;
        self.apply(rotation);
        Ok(())
    }

    /// Apply a quarter turn, then bring the other slice family back in line with the turned one.
    pub fn apply(&mut self, rotation: Rotation) {
        tracing::trace!(family = ?rotation.family, line = rotation.line(), "applying rotation");

        let s = rotation.slice;
        match rotation.family {
            RotationFamily::XPositive => shift(&mut self.horizontal[s], true),
            RotationFamily::XNegative => shift(&mut self.horizontal[s], false),
            RotationFamily::YPositive => shift(&mut self.vertical[s], true),
            RotationFamily::YNegative => shift(&mut self.vertical[s], false),
            // Rotation::new never lets this through
            RotationFamily::Undefined => return,
        }

        if rotation.family.is_x() {
            self.sync_vertical();
        } else {
            self.sync_horizontal();
        }
    }

    /// Apply an algorithm to a cube
    pub fn apply_sequence(&mut self, mvs: &MoveSequence<Rotation>) {
        tracing::debug!(len = mvs.len(), "applying rotation sequence");
        mvs.0.iter().for_each(|&m| self.apply(m));
    }

    /// Obtain the cube given by applying a rotation, leaving this cube as it is.
    pub fn preview(&self, rotation: Rotation) -> SliceCube {
        let mut cube = self.clone();
        cube.apply(rotation);
        cube
    }

    // Rewrite the front block of the vertical slices from the horizontal slices.
    fn sync_vertical(&mut self) {
        for r in 0..3 {
            for c in 0..3 {
                self.vertical[c][FRONT + r] = self.horizontal[r][FRONT + c];
            }
        }
    }

    // Rewrite the front block of the horizontal slices from the vertical slices.
    fn sync_horizontal(&mut self) {
        for r in 0..3 {
            for c in 0..3 {
                self.horizontal[r][FRONT + c] = self.vertical[c][FRONT + r];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slicecube::Face;

    fn rot(family: RotationFamily, line: u8) -> Rotation {
        Rotation::new(family, line).unwrap()
    }

    fn names(s: &[Facelet]) -> String {
        s.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(" ")
    }

    fn all_facelets(cube: &SliceCube) -> Vec<Facelet> {
        let mut facelets: Vec<_> = cube.faces().into_iter().flatten().collect();
        facelets.sort();
        facelets
    }

    #[test]
    fn x_positive_shifts_one_face_right() {
        let mut cube = SliceCube::new();
        cube.rotate(RotationFamily::XPositive, 1).unwrap();
        assert_eq!(
            names(&cube.horizontal[0]),
            "b0 b1 b2 l0 l1 l2 f0 f1 f2 r0 r1 r2"
        );
        assert_eq!(cube.horizontal[1], SliceCube::SOLVED.horizontal[1]);
        assert_eq!(names(&cube.vertical[0]), "u0 u3 u6 l0 f3 f6 d0 d3 d6");
        assert_eq!(names(&cube.vertical[2]), "u2 u5 u8 l2 f5 f8 d2 d5 d8");
        assert!(cube.is_consistent());
    }

    #[test]
    fn x_negative_shifts_one_face_left() {
        let mut cube = SliceCube::new();
        cube.rotate(RotationFamily::XNegative, 3).unwrap();
        assert_eq!(
            names(&cube.horizontal[2]),
            "f6 f7 f8 r6 r7 r8 b6 b7 b8 l6 l7 l8"
        );
        assert_eq!(names(&cube.vertical[1]), "u1 u4 u7 f1 f4 r7 d1 d4 d7");
        assert!(cube.is_consistent());
    }

    #[test]
    fn y_positive_front_view() {
        let mut cube = SliceCube::new();
        cube.rotate(RotationFamily::YPositive, 1).unwrap();
        assert_eq!(names(&cube.vertical[0]), "d0 d3 d6 u0 u3 u6 f0 f3 f6");
        assert_eq!(names(&cube.read_face(Face::F)), "u0 f1 f2 u3 f4 f5 u6 f7 f8");
        assert_eq!(names(&cube.read_face(Face::U)), "d0 u1 u2 d3 u4 u5 d6 u7 u8");
        assert_eq!(names(&cube.read_face(Face::D)), "f0 d1 d2 f3 d4 d5 f6 d7 d8");
        assert_eq!(cube.read_face(Face::L), SliceCube::SOLVED.read_face(Face::L));
        assert!(cube.is_consistent());
    }

    #[test]
    fn full_y_turn_cycles_whole_faces() {
        let mut cube = SliceCube::new();
        for line in 1..=3 {
            cube.rotate(RotationFamily::YPositive, line).unwrap();
        }
        let solved = SliceCube::SOLVED;

        for face in [Face::L, Face::R, Face::B] {
            assert_eq!(cube.read_face(face), solved.read_face(face));
        }
        assert_eq!(cube.read_face(Face::U), solved.read_face(Face::D));
        assert_eq!(cube.read_face(Face::F), solved.read_face(Face::U));
        assert_eq!(cube.read_face(Face::D), solved.read_face(Face::F));
        assert_eq!(all_facelets(&cube), all_facelets(&solved));
    }

    #[test]
    fn invalid_requests_do_nothing() {
        let mut cube = SliceCube::new();
        cube.rotate(RotationFamily::YNegative, 2).unwrap();
        let before = cube.clone();

        assert_eq!(
            cube.rotate(RotationFamily::Undefined, 2),
            Err(InvalidRotationRequest::UndefinedFamily)
        );
        assert_eq!(
            cube.rotate(RotationFamily::XPositive, 0),
            Err(InvalidRotationRequest::LineOutOfRange(0))
        );
        assert_eq!(
            cube.rotate(RotationFamily::XPositive, 4),
            Err(InvalidRotationRequest::LineOutOfRange(4))
        );
        assert_eq!(cube, before);
        assert_eq!(
            InvalidRotationRequest::LineOutOfRange(4).to_string(),
            "slice line must be between 1 and 3, got 4"
        );
    }

    #[test]
    fn x_loop() {
        let mut cube = SliceCube::SOLVED;
        for _ in 0..4 {
            cube.apply(rot(RotationFamily::XPositive, 2));
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn y_loop() {
        // Vertical slices only hold three faces
        let mut cube = SliceCube::SOLVED;
        for _ in 0..3 {
            cube.apply(rot(RotationFamily::YNegative, 3));
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn preview_leaves_cube() {
        let cube = SliceCube::new();
        let turned = cube.preview(rot(RotationFamily::YPositive, 2));
        assert!(cube.is_solved());
        assert_eq!(names(&turned.read_face(Face::F)), "f0 u1 f2 f3 u4 f5 f6 u7 f8");
    }

    #[test]
    fn parse_notation() {
        assert_eq!("x1".parse::<Rotation>(), Ok(rot(RotationFamily::XPositive, 1)));
        assert_eq!("y3'".parse::<Rotation>(), Ok(rot(RotationFamily::YNegative, 3)));
        assert_eq!("".parse::<Rotation>(), Err(ParseRotationError::Empty));
        assert_eq!("z1".parse::<Rotation>(), Err(ParseRotationError::UnknownAxis('z')));
        assert_eq!(
            "x".parse::<Rotation>(),
            Err(ParseRotationError::BadLine("x".to_string()))
        );
        assert_eq!(
            "y4".parse::<Rotation>(),
            Err(ParseRotationError::Invalid(
                InvalidRotationRequest::LineOutOfRange(4)
            ))
        );

        let seq: MoveSequence<Rotation> = "x1 y2'  x3'".parse().unwrap();
        assert_eq!(format!("{:?}", seq.0), "[x1, y2', x3']");
    }

    #[test]
    fn cancel_through_commuting() {
        let seq: MoveSequence<Rotation> = "x1 x2 x1' y1 y3 y1'".parse().unwrap();
        assert_eq!(seq.cancel(), "x2 y3".parse::<MoveSequence<Rotation>>().unwrap());

        let blocked: MoveSequence<Rotation> = "x1 y1 x1'".parse().unwrap();
        assert_eq!(blocked.clone().cancel(), blocked);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn rotation() -> impl Strategy<Value = Rotation> {
        let family = prop_oneof![
            Just(RotationFamily::XPositive),
            Just(RotationFamily::XNegative),
            Just(RotationFamily::YPositive),
            Just(RotationFamily::YNegative),
        ];
        (family, 1..=3u8).prop_map(|(family, line)| rot(family, line))
    }

    fn sequence() -> impl Strategy<Value = MoveSequence<Rotation>> {
        vec(rotation(), 0..20).prop_map(MoveSequence)
    }

    proptest! {
        #[test]
        fn always_consistent(mvs in vec(rotation(), 0..30)) {
            let mut cube = SliceCube::SOLVED;
            for m in mvs {
                cube.apply(m);
                prop_assert!(cube.is_consistent());
            }
        }

        #[test]
        fn permutation_only(mvs in sequence()) {
            let mut cube = SliceCube::SOLVED;
            cube.apply_sequence(&mvs);
            prop_assert_eq!(all_facelets(&cube), all_facelets(&SliceCube::SOLVED));
        }

        #[test]
        fn inverse_law(mvs in sequence(), m in rotation()) {
            let mut cube = SliceCube::SOLVED;
            cube.apply_sequence(&mvs);
            let before = cube.clone();
            cube.apply(m);
            cube.apply(m.inverse());
            prop_assert_eq!(cube, before);
        }

        #[test]
        fn closure(mvs in sequence(), m in rotation()) {
            let mut cube = SliceCube::SOLVED;
            cube.apply_sequence(&mvs);
            let before = cube.clone();
            let order = if m.family().is_x() { 4 } else { 3 };
            for _ in 0..order {
                cube.apply(m);
            }
            prop_assert_eq!(cube, before);
        }

        #[test]
        fn invert_identity(mvs in sequence()) {
            let mut cube = SliceCube::SOLVED;
            cube.apply_sequence(&mvs);
            cube.apply_sequence(&mvs.clone().inverse());
            prop_assert!(cube.is_solved());
            let cancelled = mvs.cancel();
            prop_assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_same_state(mvs in sequence()) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            let mut a = SliceCube::SOLVED;
            let mut b = SliceCube::SOLVED;
            a.apply_sequence(&mvs);
            b.apply_sequence(&cancelled);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn cancel_idempotent(mvs in sequence()) {
            let cancelled = mvs.cancel();
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn notation_round_trip(m in rotation()) {
            prop_assert_eq!(m.to_string().parse::<Rotation>(), Ok(m));
        }
    }
}
