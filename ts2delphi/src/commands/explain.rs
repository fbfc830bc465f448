use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use ts2delphi_ast::AST_EXTENSION;
use ts2delphi_codegen::{TranslateError, project::Project};

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// AST document to explain (e.g., src/Program.ast.json)
    pub file: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the report and unit model as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let project_toml = self.project.open()?;
        let project = Project::from_manifest(&project_toml);

        let Some(entry) = project.entry(&self.file) else {
            bail!(
                "'{}' is not an AST document (expected a *{} file)",
                self.file.display(),
                AST_EXTENSION
            );
        };

        let report = match ops::explain(&project, &entry) {
            Ok(report) => report,
            Err(err) => match err.downcast::<TranslateError>() {
                Ok(err) => {
                    eprintln!("{:?}", miette::Report::new(err));
                    std::process::exit(1);
                }
                Err(err) => return Err(err),
            },
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
