use clap::Args;
use eyre::Result;
use ts2delphi_codegen::project::Project;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project_toml = self.project.open()?;
        let project = Project::from_manifest(&project_toml);

        let report = ops::check(&project, project_toml.path())?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
