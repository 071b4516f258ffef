pub mod input;
pub mod session;

pub use input::InputReader;
pub use session::Session;

use typing_config::TypingConfig;

/// Runs one interactive game over stdin, start to finish.
pub fn run(config: &TypingConfig) {
    Session::new(config, InputReader::stdin()).run();
}
