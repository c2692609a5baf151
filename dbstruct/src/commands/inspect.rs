use clap::Args;
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
pub struct InspectCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let options = self
            .source
            .options()
            .and_then(|options| options.validate().map(|()| options))
            .unwrap_or_exit();
        logging::init(options.verbose);

        if options.verbose {
            println!("{}", source::options_json(&options)?);
        }

        let schema = source::connect(&options).unwrap_or_exit();
        let report = ops::inspect(schema, &options).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
