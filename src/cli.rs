//! Command-line argument parsing
//!
//! `edlin [FILES]... [--line N] [--ignore-case]`

use clap::Parser;
use std::path::PathBuf;

/// A line-oriented text editor
#[derive(Parser, Debug)]
#[command(name = "edlin", version, about = "A line-oriented text editor")]
pub struct CliArgs {
    /// Files to open, one tab each
    #[arg(value_name = "FILES")]
    pub paths: Vec<PathBuf>,

    /// Go to line N in the first file
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Start with case-insensitive search
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
}

/// Startup settings derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Files to open; empty means one untitled tab
    pub files: Vec<PathBuf>,
    /// Initial cursor row (0-indexed) in the first tab
    pub initial_row: Option<usize>,
    pub ignore_case: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(dir) = self.paths.iter().find(|p| p.is_dir()) {
            return Err(format!("Cannot open a directory: {}", dir.display()));
        }

        // 1-indexed from the user, 0-indexed internally
        let initial_row = self.line.map(|line| line.saturating_sub(1));

        Ok(StartupConfig {
            files: self.paths,
            initial_row,
            ignore_case: self.ignore_case,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(paths: &[&str], line: Option<usize>) -> CliArgs {
        CliArgs {
            paths: paths.iter().map(PathBuf::from).collect(),
            line,
            ignore_case: false,
        }
    }

    #[test]
    fn test_empty_args_opens_nothing() {
        let config = args(&[], None).into_config().unwrap();
        assert!(config.files.is_empty());
        assert_eq!(config.initial_row, None);
    }

    #[test]
    fn test_multiple_files_keep_order() {
        let config = args(&["a.txt", "b.txt"], None).into_config().unwrap();
        assert_eq!(
            config.files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn test_line_conversion() {
        let config = args(&["file.txt"], Some(42)).into_config().unwrap();
        assert_eq!(config.initial_row, Some(41));

        let config = args(&["file.txt"], Some(0)).into_config().unwrap();
        assert_eq!(config.initial_row, Some(0));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliArgs {
            paths: vec![dir.path().to_path_buf()],
            line: None,
            ignore_case: false,
        }
        .into_config()
        .unwrap_err();
        assert!(err.starts_with("Cannot open a directory"));
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::parse_from(["edlin", "notes.txt", "--line", "3", "-i"]);
        assert_eq!(args.paths, vec![PathBuf::from("notes.txt")]);
        assert_eq!(args.line, Some(3));
        assert!(args.ignore_case);
    }
}
