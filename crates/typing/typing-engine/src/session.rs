use std::io::Write as _;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, warn};
use typing_config::TypingConfig;
use typing_core::{Scoreboard, SessionStats, WordList, WordOutcome, judge};

use crate::input::InputReader;

/// Ledger entries shown in the final table.
const TOP_DISPLAY: usize = 5;

const BANNER: &str = "====================================";

/// One interactive run of the game: welcome, a round of sampled words,
/// summary, score persistence, top-score table.
pub struct Session<'a> {
    config: &'a TypingConfig,
    input: InputReader,
    player: String,
    stats: SessionStats,
    exit_requested: bool,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a TypingConfig, input: InputReader) -> Session<'a> {
        Session {
            config,
            input,
            player: String::new(),
            stats: SessionStats::default(),
            exit_requested: false,
        }
    }

    pub fn run(mut self) {
        // An unreadable ledger starts the board fresh; the player's score
        // is still recorded and saved at the end.
        let mut board = match Scoreboard::load(&self.config.scores_file) {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "score ledger unavailable, starting fresh");
                Scoreboard::default()
            }
        };

        self.welcome();

        match WordList::load(&self.config.words_file) {
            Ok(words) => {
                let round = words.sample(self.config.words_per_round);
                println!("\nStarting typing test for {}...", self.player);
                self.play_round(&round);
            }
            // The round is skipped but a zero score still lands on the
            // board, like any other finished run.
            Err(e) => warn!(error = %e, "word list unavailable, skipping the round"),
        }

        board.add(self.player.clone(), self.stats.score);
        if let Err(e) = board.save(&self.config.scores_file) {
            error!(error = %e, "failed to save the score ledger");
        }

        self.show_top_scores(&board);
    }

    fn welcome(&mut self) {
        println!("{BANNER}");
        println!("        TYPING TEST CHALLENGE       ");
        println!("{BANNER}");

        print!("\nEnter your name: ");
        flush_stdout();
        self.player = self.input.read_line().unwrap_or_default();

        println!("\nWelcome, {}! Here are the rules:", self.player);
        println!("1. Words will appear one at a time");
        println!("2. Type the word exactly as shown and press Enter");
        println!("3. You'll earn points for correct answers - faster typing = more points!");
        println!("4. Type 'exit' at any time to quit");
        println!("\nPress Enter to begin...");
        let _ = self.input.read_line();
    }

    fn play_round(&mut self, round: &[String]) {
        for word in round {
            if self.exit_requested {
                break;
            }
            self.play_word(word);
            if !self.exit_requested {
                thread::sleep(Duration::from_millis(self.config.pause_ms));
            }
        }
        self.show_summary();
    }

    /// Prompts one word and waits for input under its deadline. Longer
    /// words get proportionally longer: `len * ms_per_char`.
    fn play_word(&mut self, word: &str) {
        println!("\nType: {word}");
        print!("> ");
        flush_stdout();

        let limit = Duration::from_millis(word.len() as u64 * self.config.ms_per_char);
        let started = Instant::now();
        let typed = self.input.read_timeout(limit);
        let response = started.elapsed();

        if let Some(line) = &typed {
            if line.eq_ignore_ascii_case("exit") {
                self.exit_requested = true;
                return;
            }
        }

        let outcome = judge(word, typed.as_deref(), response, limit, self.config.base_score);
        self.stats.record(outcome, response);

        println!();
        match outcome {
            WordOutcome::Missed => println!("You didn't type anything!"),
            WordOutcome::Correct { points } => {
                println!("✓ Correct! +{points} points ({}ms)", response.as_millis())
            }
            WordOutcome::Incorrect => {
                println!("✗ Incorrect: {}", typed.as_deref().unwrap_or(""))
            }
        }
    }

    fn show_summary(&self) {
        println!("\n{BANNER}");
        println!("           TEST SUMMARY            ");
        println!("{BANNER}");
        println!("Player: {}", self.player);
        println!("Correct answers: {}", self.stats.correct);
        println!("Incorrect answers: {}", self.stats.incorrect);
        println!("Missed words: {}", self.stats.missed);
        println!("Total score: {}", self.stats.score);
        println!(
            "Total time: {} seconds",
            self.stats.total_time.as_millis() as f64 / 1000.0
        );
        if let Some(average) = self.stats.average_correct() {
            println!(
                "Average time per correct answer: {}ms",
                average.as_millis()
            );
        }
    }

    fn show_top_scores(&self, board: &Scoreboard) {
        println!("\n{BANNER}");
        println!("          TOP PLAYERS              ");
        println!("{BANNER}");

        if board.is_empty() {
            println!("No scores yet!");
            return;
        }

        for (index, entry) in board.top(TOP_DISPLAY).iter().enumerate() {
            println!("{}. {}: {}", index + 1, entry.name, entry.score);
        }

        if let Some(rank) = board.rank(&self.player, self.stats.score) {
            if rank > TOP_DISPLAY {
                println!("\nYour rank: {} out of {}", rank, board.len());
            }
        }
    }
}

fn flush_stdout() {
    let _ = std::io::stdout().flush();
}
