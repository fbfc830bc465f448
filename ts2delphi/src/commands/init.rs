use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use ts2delphi_core::OutputFile;
use ts2delphi_manifest::{DEFAULT_MANIFEST, MANIFEST_FILE_NAME};

#[derive(Args)]
pub struct InitCommand {
    /// Project directory (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing ts2delphi.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = OutputFile::new(self.dir.join(MANIFEST_FILE_NAME), DEFAULT_MANIFEST);
        if file.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                file.path().display()
            );
        }
        file.write()
            .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;

        println!("Created {}", file.path().display());
        println!();
        println!("Next steps:");
        println!("  put AST documents (*.ast.json) under src/");
        println!("  ts2delphi build");

        Ok(())
    }
}
