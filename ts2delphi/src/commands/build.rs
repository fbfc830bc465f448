use clap::Args;
use eyre::Result;
use ts2delphi_codegen::project::Project;

use super::ProjectArgs;
use crate::{
    ops::{self, BuildOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self) -> Result<()> {
        let project_toml = self.project.open()?;
        let project = Project::from_manifest(&project_toml);

        let report = ops::build(
            &project,
            BuildOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
