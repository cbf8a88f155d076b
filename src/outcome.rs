use crate::constants::{DRAW_POINTS, LOSS_POINTS, WIN_POINTS};

/// Result of a single match from the perspective of the team being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Every outcome of a match, in win/draw/loss order
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Draw, Outcome::Loss];

    /// Points awarded for this outcome (3/1/0)
    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => WIN_POINTS,
            Outcome::Draw => DRAW_POINTS,
            Outcome::Loss => LOSS_POINTS,
        }
    }
}
