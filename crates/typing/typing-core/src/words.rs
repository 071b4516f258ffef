use std::path::Path;

use rand::Rng;

/// Candidate words for a round, one per line in the source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WordList {
    pub fn parse(text: &str) -> WordList {
        WordList {
            words: text
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn load(path: impl AsRef<Path> + ToString) -> Result<WordList, WordListError> {
        let text = std::fs::read_to_string(&path).map_err(|source| WordListError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(WordList::parse(&text))
    }

    /// Draws `count` words uniformly, with replacement: the same word can
    /// come up twice in a round. Capped at the list length.
    pub fn sample(&self, count: usize) -> Vec<String> {
        self.sample_with(&mut rand::thread_rng(), count)
    }

    pub fn sample_with(&self, rng: &mut impl Rng, count: usize) -> Vec<String> {
        let count = count.min(self.words.len());
        (0..count)
            .map(|_| self.words[rng.gen_range(0..self.words.len())].clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
