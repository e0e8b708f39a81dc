//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Find probable duplicate person names in a list.
#[derive(Debug, Parser)]
#[command(name = "namedup", version, about)]
pub struct Cli {
    /// File with one name per line (`-` or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Extra nickname file (`Name - Variant, Variant` per line)
    #[arg(long, env = "NAMEDUP_NICKNAMES")]
    pub nicknames: Option<PathBuf>,

    /// Detector configuration (TOML, or JSON with a .json extension)
    #[arg(long, env = "NAMEDUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory searched for .namedup/nicknames.txt
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Skip the built-in nickname table
    #[arg(long)]
    pub no_builtin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `duplicate<TAB>canonical` per line
    Tsv,
    /// JSON array of pairs
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["namedup"]).unwrap();
        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Tsv);
        assert!(!cli.no_builtin);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "namedup",
            "names.txt",
            "--nicknames",
            "extra.txt",
            "--format",
            "json",
            "--no-builtin",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("names.txt")));
        assert_eq!(cli.nicknames, Some(PathBuf::from("extra.txt")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_builtin);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["namedup", "--format", "xml"]).is_err());
    }
}
