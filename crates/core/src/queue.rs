//! Queue module - upcoming pieces and where they come from
//!
//! The game always knows the next [`QUEUE_LEN`] pieces. Consuming the front
//! piece appends one freshly drawn piece at the tail, so the lookahead length
//! never changes.
//!
//! Randomness is injected through [`PieceSource`] rather than read from a
//! process-wide generator, so games and searches can be replayed exactly.

use arrayvec::ArrayVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, QUEUE_LEN};

/// Supplier of the next piece appended to a queue
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

/// Uniform choice over the whole catalog
#[derive(Debug, Clone)]
pub struct UniformPieces<R = SmallRng> {
    rng: R,
}

impl<R: Rng> UniformPieces<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformPieces<SmallRng> {
    /// Deterministic source: same seed, same piece sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceSource for UniformPieces<R> {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Replays a fixed list of pieces, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    pieces: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn new(pieces: impl IntoIterator<Item = PieceKind>) -> Self {
        let pieces: Vec<PieceKind> = pieces.into_iter().collect();
        assert!(!pieces.is_empty(), "a scripted source needs at least one piece");
        Self { pieces, next: 0 }
    }

    /// Always yields the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let piece = self.pieces[self.next];
        self.next = (self.next + 1) % self.pieces.len();
        piece
    }
}

/// The next [`QUEUE_LEN`] pieces, front first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockQueue {
    pieces: ArrayVec<PieceKind, QUEUE_LEN>,
}

impl BlockQueue {
    /// Fill a fresh queue from the source
    pub fn new(source: &mut impl PieceSource) -> Self {
        let pieces = (0..QUEUE_LEN).map(|_| source.next_piece()).collect();
        Self { pieces }
    }

    /// Queue with exactly the given pieces, front first
    pub fn from_pieces(pieces: [PieceKind; QUEUE_LEN]) -> Self {
        Self {
            pieces: ArrayVec::from(pieces),
        }
    }

    /// The piece placed next
    pub fn front(&self) -> PieceKind {
        self.pieces[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pieces.iter().copied()
    }

    pub fn as_slice(&self) -> &[PieceKind] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// New queue with the front removed and one drawn piece appended
    pub fn advance(&self, source: &mut impl PieceSource) -> Self {
        let mut pieces = self.pieces.clone();
        pieces.remove(0);
        pieces.push(source.next_piece());
        Self { pieces }
    }
}
