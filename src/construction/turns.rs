//! Turn sources decide whether the leader or a worker acts next

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::construction::types::Turn;

/// Supplies one decision per simulation turn
pub trait TurnSource {
    fn next_turn(&mut self) -> Turn;
}

/// Rolls a die each turn; a zero gives the turn to the leader
#[derive(Clone, Debug)]
pub struct DiceRoll<R: Rng> {
    rng: R,
    sides: u32,
}

impl<R: Rng> DiceRoll<R> {
    /// `sides` must be at least 1
    pub fn new(rng: R, sides: u32) -> Self {
        DiceRoll { rng, sides: sides.max(1) }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl DiceRoll<ChaCha8Rng> {
    /// Seeded dice, reproducible across runs
    pub fn seeded(seed: u64, sides: u32) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), sides)
    }
}

impl<R: Rng> TurnSource for DiceRoll<R> {
    fn next_turn(&mut self) -> Turn {
        if self.rng.gen_range(0..self.sides) == 0 {
            Turn::Leader
        } else {
            Turn::Worker
        }
    }
}

/// Always returns the same turn
#[derive(Clone, Copy, Debug)]
pub struct FixedTurns(pub Turn);

impl TurnSource for FixedTurns {
    fn next_turn(&mut self) -> Turn {
        self.0
    }
}

/// Replays a script of turns, looping back to the start when it runs out
#[derive(Clone, Debug)]
pub struct ScriptedTurns {
    script: Vec<Turn>,
    cursor: usize,
}

impl ScriptedTurns {
    /// An empty script behaves like `FixedTurns(Turn::Worker)`
    pub fn new(script: Vec<Turn>) -> Self {
        ScriptedTurns { script, cursor: 0 }
    }
}

impl TurnSource for ScriptedTurns {
    fn next_turn(&mut self) -> Turn {
        if self.script.is_empty() {
            return Turn::Worker;
        }
        let turn = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        turn
    }
}
