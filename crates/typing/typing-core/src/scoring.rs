use std::time::Duration;

/// How one prompted word went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordOutcome {
    Correct { points: i64 },
    Incorrect,
    Missed,
}

/// Latency-scaled score for a correct answer: `base * (1.5 - t/limit)`,
/// truncated to an integer. An instant answer is worth 1.5x base, one
/// right at the deadline half base.
pub fn word_score(response: Duration, limit: Duration, base: i64) -> i64 {
    let ratio = if limit.is_zero() {
        1.0
    } else {
        response.as_secs_f64() / limit.as_secs_f64()
    };
    (base as f64 * (1.5 - ratio)) as i64
}

/// Classifies one response. `None` and an empty line both count as missed;
/// points are awarded only on an exact match.
pub fn judge(
    expected: &str,
    typed: Option<&str>,
    response: Duration,
    limit: Duration,
    base: i64,
) -> WordOutcome {
    match typed {
        None => WordOutcome::Missed,
        Some(t) if t.is_empty() => WordOutcome::Missed,
        Some(t) if t == expected => WordOutcome::Correct {
            points: word_score(response, limit, base),
        },
        Some(_) => WordOutcome::Incorrect,
    }
}

/// Counters for one round.
///
/// `total_time` accumulates the response time of every word, missed and
/// incorrect ones included, while the per-correct average divides by
/// correct answers only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
    pub missed: u32,
    pub score: i64,
    pub total_time: Duration,
}

impl SessionStats {
    pub fn record(&mut self, outcome: WordOutcome, response: Duration) {
        self.total_time += response;
        match outcome {
            WordOutcome::Correct { points } => {
                self.correct += 1;
                self.score += points;
            }
            WordOutcome::Incorrect => self.incorrect += 1,
            WordOutcome::Missed => self.missed += 1,
        }
    }

    /// Average response time per correct answer, when there were any.
    pub fn average_correct(&self) -> Option<Duration> {
        (self.correct > 0).then(|| self.total_time / self.correct)
    }
}
