mod check;
mod parse;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Check GraphQL files for syntax errors.
    Check(Box<CheckCmd>),

    /// Print the reduced AST of a GraphQL document as JSON.
    Parse(Box<ParseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
        }
    }
}
