//! CLI argument parsing module for depnotes

use clap::Parser;
use std::path::PathBuf;

/// Merges dependency updates from a Dependabot PR into the release notes
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depnotes",
    version,
    about = "Merges dependency updates from a Dependabot PR into the release notes"
)]
pub struct CliArgs {
    /// File that contains the PR description
    #[arg(long, value_name = "PATH")]
    pub pr_body: PathBuf,

    /// pom.xml used to look up the dependency scopes
    #[arg(long, value_name = "PATH")]
    pub pom: PathBuf,

    /// Release notes to update in place
    #[arg(long, value_name = "PATH", default_value = "release_notes.md")]
    pub release_notes: PathBuf,

    // General options
    /// Dry run mode - show what would change without writing the release notes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the changed dependency rows in diff format
    #[arg(long)]
    pub diff: bool,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> Vec<&'static str> {
        vec!["depnotes", "--pr-body", "body.md", "--pom", "pom.xml"]
    }

    fn parse_with(extra: &[&'static str]) -> CliArgs {
        let mut argv = required();
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_default_args() {
        let args = parse_with(&[]);
        assert_eq!(args.pr_body, PathBuf::from("body.md"));
        assert_eq!(args.pom, PathBuf::from("pom.xml"));
        assert_eq!(args.release_notes, PathBuf::from("release_notes.md"));
        assert!(!args.dry_run);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.json);
        assert!(!args.diff);
        assert!(!args.no_color);
    }

    #[test]
    fn test_release_notes_argument() {
        let args = parse_with(&["--release-notes", "docs/notes.md"]);
        assert_eq!(args.release_notes, PathBuf::from("docs/notes.md"));
    }

    #[test]
    fn test_pr_body_is_required() {
        let result = CliArgs::try_parse_from(["depnotes", "--pom", "pom.xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_pom_is_required() {
        let result = CliArgs::try_parse_from(["depnotes", "--pr-body", "body.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_short_flag() {
        assert!(parse_with(&["-n"]).dry_run);
    }

    #[test]
    fn test_dry_run_long_flag() {
        assert!(parse_with(&["--dry-run"]).dry_run);
    }

    #[test]
    fn test_verbose_flags() {
        assert!(parse_with(&["--verbose"]).verbose);
    }

    #[test]
    fn test_quiet_flags() {
        assert!(parse_with(&["-q"]).quiet);
        assert!(parse_with(&["--quiet"]).quiet);
    }

    #[test]
    fn test_output_flags() {
        assert!(parse_with(&["--json"]).json);
        assert!(parse_with(&["--diff"]).diff);
    }

    #[test]
    fn test_no_color_flag() {
        assert!(parse_with(&["--no-color"]).no_color);
    }

    #[test]
    fn test_combined_flags() {
        let args = parse_with(&["-n", "--json", "--verbose", "--release-notes", "x.md"]);
        assert!(args.dry_run);
        assert!(args.json);
        assert!(args.verbose);
        assert_eq!(args.release_notes, PathBuf::from("x.md"));
    }
}
