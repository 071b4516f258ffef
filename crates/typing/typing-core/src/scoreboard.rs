use std::path::Path;

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: i64,
}

/// The persisted high-score table, kept sorted by score descending.
///
/// Sorting is stable, so of two equal scores the one recorded first keeps
/// the better rank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    entries: Vec<PlayerScore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    #[error("failed to read scores '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write scores '{path}'")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Scoreboard {
    /// Parses a `name: score` ledger, one entry per line. Lines without
    /// exactly one colon or with a non-numeric score are skipped.
    pub fn parse(text: &str) -> Scoreboard {
        let mut board = Scoreboard::default();
        for (number, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() != 2 {
                debug!(line = number + 1, "skipping malformed score line");
                continue;
            }
            let Ok(score) = fields[1].trim().parse::<i64>() else {
                debug!(line = number + 1, "skipping score line with non-numeric score");
                continue;
            };
            board.entries.push(PlayerScore {
                name: fields[0].trim().to_string(),
                score,
            });
        }
        board.sort();
        board
    }

    pub fn load(path: impl AsRef<Path> + ToString) -> Result<Scoreboard, ScoreboardError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ScoreboardError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(Scoreboard::parse(&text))
    }

    pub fn add(&mut self, name: impl Into<String>, score: i64) {
        self.entries.push(PlayerScore {
            name: name.into(),
            score,
        });
        self.sort();
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Rewrites the whole ledger in the `name: score` line format.
    pub fn save(&self, path: impl AsRef<Path> + ToString) -> Result<(), ScoreboardError> {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.name);
            text.push_str(": ");
            text.push_str(&entry.score.to_string());
            text.push('\n');
        }
        std::fs::write(&path, text).map_err(|source| ScoreboardError::Write {
            path: path.to_string(),
            source,
        })
    }

    pub fn top(&self, n: usize) -> &[PlayerScore] {
        &self.entries[..self.entries.len().min(n)]
    }

    /// 1-based rank of the first entry matching both name and score.
    pub fn rank(&self, name: &str, score: i64) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name && e.score == score)
            .map(|i| i + 1)
    }

    pub fn entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("typing_scores_{}_{}", name, std::process::id()))
    }

    #[test]
    fn parses_and_sorts_descending() {
        let board = Scoreboard::parse("ada: 120\ngrace: 450\nalan: 300\n");
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["grace", "alan", "ada"]);
    }

    #[test]
    fn skips_malformed_ledger_lines() {
        let board = Scoreboard::parse("ada: 120\nno-colon-here\ngrace: lots\nalan: 300\n");
        assert_eq!(board.len(), 2);
        assert_eq!(board.top(1)[0].name, "alan");
    }

    #[test]
    fn equal_scores_keep_first_recorded_rank() {
        let mut board = Scoreboard::default();
        board.add("ada", 200);
        board.add("grace", 200);
        assert_eq!(board.rank("ada", 200), Some(1));
        assert_eq!(board.rank("grace", 200), Some(2));
    }

    #[test]
    fn top_caps_at_board_size() {
        let mut board = Scoreboard::default();
        board.add("ada", 100);
        assert_eq!(board.top(5).len(), 1);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = test_path("round_trip");
        let mut board = Scoreboard::default();
        board.add("ada", 120);
        board.add("grace", 450);
        board.save(path.display().to_string()).expect("ledger should save");

        let text = std::fs::read_to_string(&path).expect("ledger should read back");
        assert_eq!(text, "grace: 450\nada: 120\n");

        let reloaded = Scoreboard::load(path.display().to_string()).expect("ledger should load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(reloaded, board);
    }

    #[test]
    fn missing_ledger_is_an_error() {
        let path = test_path("missing");
        assert!(Scoreboard::load(path.display().to_string()).is_err());
    }
}
