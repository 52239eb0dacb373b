//! Command-line interface for strictly_timeline_tui.

use clap::Parser;
use std::path::PathBuf;
use strictly_timeline::Position;

/// Strictly Timeline - tic-tac-toe you can rewind
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline_tui")]
#[command(about = "Play tic-tac-toe in the terminal and rewind to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Moves to replay before play starts: cell indices 0-8 or labels such as top-left
    #[arg(long, value_delimiter = ',', value_parser = parse_position)]
    pub moves: Vec<Position>,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::parse(s)
        .ok_or_else(|| format!("'{}' is not a board position (0-8 or a label like top-left)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_timeline_tui"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("timeline.toml"));
        assert!(cli.moves.is_empty());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_moves_accept_indices_and_labels() {
        let cli =
            Cli::try_parse_from(["strictly_timeline_tui", "--moves", "4,top-left,8"]).unwrap();
        assert_eq!(
            cli.moves,
            vec![Position::Center, Position::TopLeft, Position::BottomRight]
        );
    }

    #[test]
    fn test_moves_reject_out_of_range() {
        assert!(Cli::try_parse_from(["strictly_timeline_tui", "--moves", "0,9"]).is_err());
    }
}
