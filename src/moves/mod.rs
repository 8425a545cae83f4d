//! Module for puzzle move generics and related functionality

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `x1 x1'` cancels completely
    NoMove,
    /// The moves didn't cancel
    ///
    /// e.g. `x1 y1` stays as `x1 y1` when cancelling
    TwoMove(M, M),
}

/// A move, for use in writing expressions or algorithms. Every move must have an inverse, and the
/// commutation and cancellation relations given here are the only ones
/// [`MoveSequence::cancel`] relies on.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. It is required
    /// that this property is transitive.
    ///
    /// If A and B are moves, then `A.commutes_with(B)` iff
    /// `A B = B A`
    /// moreover, if `B.commutes_with(C)`, then it must be true that `A.commutes_with(C)`
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two moves.
    ///
    /// ```rust
    /// use slice_cube::moves::{Cancellation, Move};
    /// use slice_cube::slicecube::Rotation;
    ///
    /// let x1: Rotation = "x1".parse().unwrap();
    /// let y1: Rotation = "y1".parse().unwrap();
    /// assert!(x1.cancel(x1.inverse()) == Cancellation::NoMove);
    /// assert!(x1.cancel(y1) == Cancellation::TwoMove(x1, y1));
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate two sequences, `self` first.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel an alg, removing every pair of inverse moves that can be brought next to each other
    /// by commuting moves.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            // Walk back through the already reduced moves for as long as we commute with them. If
            // we meet our inverse on the way we drop both; nothing new can cancel after that since
            // the reduced expression had no cancellations to begin with.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                match cancellation[i].clone().cancel(next_mv.clone()) {
                    Cancellation::NoMove => {
                        cancellation.remove(i);
                        cancelled = true;
                        break;
                    }
                    Cancellation::TwoMove(_, _) => {}
                }

                if !next_mv.commutes_with(&cancellation[i]) {
                    break;
                }
            }

            if !cancelled {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
