mod build;
mod check;
mod completions;
mod explain;
mod init;

use std::path::{Path, PathBuf};

use build::BuildCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, WrapErr};
use explain::ExplainCommand;
use init::InitCommand;
use ts2delphi_manifest::{MANIFEST_FILE_NAME, Overrides, ProjectToml};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ts2delphi_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ts2delphi")]
#[command(version)]
#[command(about = "Translate TypeScript AST documents into Pascal units")]
pub(crate) struct Cli {
    /// Log debug output (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a ts2delphi.toml in the current directory
    Init(InitCommand),

    /// Translate every AST document of the project
    Build(BuildCommand),

    /// Translate without writing and report diagnostics
    Check(CheckCommand),

    /// Show the lexer stages and the unit model built for one AST document
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Manifest location and the overrides shared by project commands.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to ts2delphi.toml
    #[arg(short, long, default_value = MANIFEST_FILE_NAME)]
    pub config: PathBuf,

    /// Input directory (overrides [project].input)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output directory (overrides [project].output)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Entry-point file relative to the input directory (overrides [project].main)
    #[arg(long)]
    pub main: Option<String>,
}

impl ProjectArgs {
    /// Open the manifest and apply command-line overrides.
    ///
    /// Override paths are relative to the working directory, unlike
    /// manifest paths which are relative to the manifest.
    pub fn open(&self) -> Result<ProjectToml> {
        let mut project = ProjectToml::open(&self.config).unwrap_or_exit();
        let overrides = Overrides {
            input: self.input.as_deref().map(absolute).transpose()?,
            output: self.output.as_deref().map(absolute).transpose()?,
            main: self.main.clone(),
        };
        if !overrides.is_empty() {
            project
                .manifest_mut()
                .apply_overrides(overrides)
                .unwrap_or_exit();
        }
        Ok(project)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
    Ok(cwd.join(path))
}
