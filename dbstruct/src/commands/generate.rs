use std::path::PathBuf;

use clap::{ArgAction, Args};
use dbstruct_core::{Options, OrmStyle, Result as CoreResult};
use eyre::Result;

use super::{
    UnwrapOrExit,
    source::{self, SourceArgs},
};
use crate::{
    logging, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Generate ORM attributes
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub orm: Option<bool>,

    /// ORM attribute flavour
    #[arg(long, value_name = "STYLE")]
    pub orm_style: Option<OrmStyle>,

    /// Generate serde attributes
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub serde: Option<bool>,

    /// Put every struct in a single file
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub single: Option<bool>,

    /// Output directory for generated code
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Module name of the generated code
    #[arg(long)]
    pub pkg: Option<String>,

    /// Write an HTML schema report to this path
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let options = self.options().unwrap_or_exit();
        logging::init(options.verbose);

        if options.verbose {
            println!("{}", source::options_json(&options)?);
        }

        let schema = source::connect(&options).unwrap_or_exit();
        let report = ops::generate(schema, &options, self.dry_run).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Options from the configuration file with every given flag applied.
    fn options(&self) -> CoreResult<Options> {
        let mut options = self.source.options()?;

        if let Some(orm) = self.orm {
            options.orm_tag = orm;
        }
        if let Some(style) = self.orm_style {
            options.orm_style = style;
        }
        if let Some(serde) = self.serde {
            options.serde_tag = serde;
        }
        if let Some(single) = self.single {
            options.single_file = single;
        }
        if let Some(dir) = &self.dir {
            options.model_dir = Some(dir.clone());
        }
        if let Some(pkg) = &self.pkg {
            options.package = pkg.clone();
        }
        if let Some(html) = &self.html {
            options.html_file = Some(html.clone());
        }

        options.validate()?;
        Ok(options)
    }
}
