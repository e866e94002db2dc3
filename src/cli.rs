//! Command-line front end shared by the `texcrush*` binaries
//!
//! Parses arguments into a [`BatchConfig`], installs logging and maps the
//! batch outcome to an exit status. Bad arguments, a missing directory and
//! "no matching files" all print a message and exit successfully; per-file
//! failures only change the exit status with `--strict`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Command, CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use crate::batch::run_batch;
use crate::config::BatchConfig;
use crate::textures::TextureKind;

/// Flags shared by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose logging (use RUST_LOG=debug for more detail)
    #[arg(short, long)]
    pub verbose: bool,

    /// List matching textures without recompressing them
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 if any texture failed
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
#[command(name = "texcrush")]
#[command(version)]
#[command(about = "Recompress albedo, normal and ORM PNG texture maps in place")]
pub struct Cli {
    /// Texture kind: albedo, normal or orm
    #[arg(value_name = "KIND")]
    pub kind: TextureKind,

    /// Directory containing the textures
    pub path: PathBuf,

    /// Only process files named <PREFIX>_<KIND>.png
    pub prefixes: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of the single-kind binaries
#[derive(Parser, Debug)]
#[command(version)]
pub struct FixedKindCli {
    /// Directory containing the textures
    pub path: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Install the tracing subscriber
pub fn init_logging(verbose: bool) -> Result<()> {
    let directive = if verbose { "texcrush=debug" } else { "texcrush=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_target(false)
        .init();
    Ok(())
}

/// Entry point of `texcrush <kind> <path> [prefixes...]`
pub fn run_consolidated() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Ok(usage_exit(e)),
    };

    init_logging(cli.common.verbose)?;

    let config = BatchConfig::new(cli.kind, cli.path)
        .with_prefixes(cli.prefixes)
        .with_dry_run(cli.common.dry_run);

    Ok(execute(&config, cli.common.strict, Cli::command()))
}

/// Entry point of the single-kind binaries, e.g. `texcrush-albedo <path>`
pub fn run_fixed(kind: TextureKind) -> Result<ExitCode> {
    let command = fixed_command(kind);

    let cli = match command
        .clone()
        .try_get_matches()
        .and_then(|matches| FixedKindCli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => return Ok(usage_exit(e)),
    };

    init_logging(cli.common.verbose)?;

    let config = BatchConfig::new(kind, cli.path).with_dry_run(cli.common.dry_run);

    Ok(execute(&config, cli.common.strict, command))
}

fn fixed_command(kind: TextureKind) -> Command {
    let (name, about) = match kind {
        TextureKind::Albedo => ("texcrush-albedo", "Recompress *_albedo.png textures in place"),
        TextureKind::Normal => ("texcrush-normal", "Recompress *_normal.png textures in place"),
        TextureKind::Orm => ("texcrush-orm", "Recompress *_orm.png textures in place"),
    };
    FixedKindCli::command().name(name).about(about)
}

/// Print a clap error (or help/version) and exit successfully
fn usage_exit(err: clap::Error) -> ExitCode {
    let _ = err.print();
    ExitCode::SUCCESS
}

/// Run the batch and decide the exit status
fn execute(config: &BatchConfig, strict: bool, command: Command) -> ExitCode {
    ExitCode::from(exit_status(config, strict, command))
}

fn exit_status(config: &BatchConfig, strict: bool, mut command: Command) -> u8 {
    let report = match run_batch(config) {
        Ok(report) => report,
        Err(e) if e.is_usage() => {
            println!("{}\n\n{}", e, command.render_usage());
            return 0;
        }
        Err(e) => {
            println!("{}", e);
            return 0;
        }
    };

    if !report.all_succeeded() {
        println!("\n{} of {} textures failed:", report.failed(), report.selected);
        for failure in &report.failures {
            println!("  {}: {}", failure.path.display(), failure.error);
        }
        if strict {
            return 1;
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definitions_are_valid() {
        Cli::command().debug_assert();
        for kind in TextureKind::ALL {
            fixed_command(kind).debug_assert();
        }
    }

    #[test]
    fn test_parse_consolidated() {
        let cli = Cli::try_parse_from(["texcrush", "albedo", "tex", "brick", "stone", "--strict"])
            .unwrap();
        assert_eq!(cli.kind, TextureKind::Albedo);
        assert_eq!(cli.path, PathBuf::from("tex"));
        assert_eq!(cli.prefixes, vec!["brick".to_string(), "stone".to_string()]);
        assert!(cli.common.strict);
        assert!(!cli.common.dry_run);
    }

    #[test]
    fn test_parse_without_prefixes() {
        let cli = Cli::try_parse_from(["texcrush", "orm", "tex"]).unwrap();
        assert_eq!(cli.kind, TextureKind::Orm);
        assert!(cli.prefixes.is_empty());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = Cli::try_parse_from(["texcrush", "height", "tex"]).unwrap_err();
        assert!(err.to_string().contains("unknown texture kind"));
    }

    #[test]
    fn test_missing_path_rejected() {
        assert!(Cli::try_parse_from(["texcrush", "normal"]).is_err());
        assert!(fixed_command(TextureKind::Normal)
            .try_get_matches_from(["texcrush-normal"])
            .is_err());
    }

    #[test]
    fn test_parse_fixed() {
        let matches = fixed_command(TextureKind::Albedo)
            .try_get_matches_from(["texcrush-albedo", "tex", "--dry-run"])
            .unwrap();
        let cli = FixedKindCli::from_arg_matches(&matches).unwrap();
        assert_eq!(cli.path, PathBuf::from("tex"));
        assert!(cli.common.dry_run);
    }

    #[test]
    fn test_execute_exit_status() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad_orm.png"), b"garbage").unwrap();
        let config = BatchConfig::new(TextureKind::Orm, dir.path());

        assert_eq!(exit_status(&config, false, Cli::command()), 0);
        assert_eq!(exit_status(&config, true, Cli::command()), 1);

        let missing = BatchConfig::new(TextureKind::Orm, dir.path().join("missing"));
        assert_eq!(exit_status(&missing, true, Cli::command()), 0);

        let empty = tempfile::TempDir::new().unwrap();
        let no_match = BatchConfig::new(TextureKind::Albedo, empty.path());
        assert_eq!(exit_status(&no_match, true, Cli::command()), 0);
    }
}
