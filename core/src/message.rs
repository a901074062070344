use core::fmt;

/// Feedback shown to the player after the last action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMessage {
    Correct,
    Wrong,
    Skipped,
    Won { points: u32 },
    Lost { points: u32 },
}

impl fmt::Display for GameMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GameMessage::*;
        match self {
            Correct => f.write_str("Correct! Keep going!"),
            Wrong => f.write_str("Wrong guess! Try again."),
            Skipped => f.write_str("Word skipped!"),
            Won { points } => write!(
                f,
                "Congratulations! You completed the game with {} points!",
                points
            ),
            Lost { points } => write!(
                f,
                "Game Over! You got {} points. Maximum strikes reached.",
                points
            ),
        }
    }
}
