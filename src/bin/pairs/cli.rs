use std::path::PathBuf;

use clap::Parser;
use pairs::{GameConfig, MusicConfig};

/// Memory-matching card game with a synthesized background loop
#[derive(Debug, Parser)]
#[command(name = "pairs", version, about)]
pub struct Cli {
    /// Seed every shuffle for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask for music at startup; it begins with the first card flip
    #[arg(long)]
    pub music: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        match self.seed {
            Some(seed) => GameConfig::new().seed(seed),
            None => GameConfig::new(),
        }
    }

    pub fn music_config(&self) -> MusicConfig {
        MusicConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from(["pairs", "--seed", "9", "--music", "--log-file", "out.log"]);
        assert_eq!(cli.seed, Some(9));
        assert!(cli.music);
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert_eq!(cli.game_config().seed, Some(9));
    }

    #[test]
    fn defaults_to_unseeded_silent_game() {
        let cli = Cli::parse_from(["pairs"]);
        assert!(cli.seed.is_none());
        assert!(!cli.music);
        assert!(cli.game_config().seed.is_none());
    }
}
