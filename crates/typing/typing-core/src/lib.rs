pub mod scoreboard;
pub mod scoring;
pub mod words;

pub use scoreboard::{PlayerScore, Scoreboard, ScoreboardError};
pub use scoring::{SessionStats, WordOutcome, judge, word_score};
pub use words::{WordList, WordListError};
