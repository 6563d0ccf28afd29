//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - play X against a scripted opponent
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a scripted opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing x.png, o.png and font.TTF
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Milliseconds the opponent waits before replying
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.assets.is_none());
        assert!(cli.delay_ms.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--assets",
            "res",
            "--delay-ms",
            "250",
            "-c",
            "tictactoe.toml",
        ])
        .unwrap();
        assert_eq!(cli.assets, Some(PathBuf::from("res")));
        assert_eq!(cli.delay_ms, Some(250));
        assert_eq!(cli.config, Some(PathBuf::from("tictactoe.toml")));
    }

    #[test]
    fn test_rejects_bad_delay() {
        assert!(Cli::try_parse_from(["tictactoe", "--delay-ms", "soon"]).is_err());
    }
}
