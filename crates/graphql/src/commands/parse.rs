use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_reducer::GraphQLParser;
use libgraphql_reducer::ParseOptions;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        help="Print the AST on a single line.",
        long,
    )]
    compact: bool,

    #[arg(
        help="Leave location metadata out of the AST. Reduced ASTs carry no \
             locations today, so this does not change the output.",
        long,
    )]
    no_location: bool,

    #[arg(
        help="Path to the GraphQL document to parse, or `-` to read it from \
             stdin.",
        name="FILE",
    )]
    file: PathBuf,
}

impl ParseCmd {
    fn read_source(&self) -> anyhow::Result<String> {
        if self.file.as_os_str() == "-" {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        } else {
            Ok(std::fs::read_to_string(&self.file)?)
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match self.read_source() {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {:?}: {e}",
                output_utils::RED_X,
                self.file,
            )),
        };
        log::debug!("Read {} bytes from {:?}.", source.len(), self.file);

        let options = ParseOptions::default().with_no_location(self.no_location);
        let mut parser = GraphQLParser::with_options(&source, options);
        if self.file.as_os_str() != "-" {
            parser = parser.with_file_path(self.file.clone());
        }

        let document = match parser.parse_document() {
            Ok(document) => document,
            Err(e) => return CommandResult::stderr(format_args!(
                "{}",
                e.format_detailed(Some(source.as_str())),
            )),
        };

        let json = if self.compact {
            serde_json::to_string(&document)
        } else {
            serde_json::to_string_pretty(&document)
        };
        match json {
            Ok(json) => CommandResult::success(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the AST: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
