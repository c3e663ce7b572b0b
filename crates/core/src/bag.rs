//! Piece sequencer: 7-bag randomization with non-consuming lookahead.
//!
//! The upcoming queue is refilled one whole shuffled bag at a time, so any
//! seven consecutive draws aligned to a bag boundary contain each kind
//! exactly once. `peek` extends the buffer as needed but never consumes,
//! which keeps previews stable until the next `draw`.

use std::collections::VecDeque;

use blockfall_types::PieceKind;

/// Small deterministic LCG (Numerical Recipes constants).
///
/// Seeded games replay identically, which the tests lean on heavily.
#[derive(Debug, Clone)]
pub struct BagRng {
    state: u32,
}

impl BagRng {
    pub fn new(seed: u32) -> Self {
        // State 0 would fixpoint the low bits early on; nudge it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Endless piece stream backed by repeating shuffled bags.
#[derive(Debug, Clone)]
pub struct PieceSequencer {
    queue: VecDeque<PieceKind>,
    rng: BagRng,
}

impl PieceSequencer {
    pub fn new(seed: u32) -> Self {
        let mut sequencer = Self {
            queue: VecDeque::with_capacity(14),
            rng: BagRng::new(seed),
        };
        sequencer.push_bag();
        sequencer
    }

    /// Shuffle a fresh bag of all seven kinds onto the back of the queue.
    fn push_bag(&mut self) {
        let mut bag = PieceKind::ALL;
        self.rng.shuffle(&mut bag);
        self.queue.extend(bag);
    }

    fn ensure_buffered(&mut self, count: usize) {
        while self.queue.len() < count {
            self.push_bag();
        }
    }

    /// Remove and return the next piece, refilling from a new bag when the
    /// buffer would otherwise run dry.
    pub fn draw(&mut self) -> PieceKind {
        self.ensure_buffered(1);
        self.queue.pop_front().expect("sequencer buffer refilled")
    }

    /// The next `count` pieces in draw order, without consuming them.
    ///
    /// Extends the buffer transparently when `count` exceeds what is
    /// currently queued; `peek(0)` is an empty sequence.
    pub fn peek(&mut self, count: usize) -> Vec<PieceKind> {
        self.ensure_buffered(count);
        self.queue.iter().take(count).copied().collect()
    }

    /// The piece the next `draw` will return.
    pub fn peek_first(&mut self) -> PieceKind {
        self.ensure_buffered(1);
        *self.queue.front().expect("sequencer buffer refilled")
    }

    /// Current RNG state, usable as the seed of a follow-up session.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceSequencer {
    fn default() -> Self {
        Self::new(1)
    }
}
