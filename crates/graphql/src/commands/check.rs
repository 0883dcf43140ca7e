use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_reducer::GraphQLParser;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl CheckCmd {
    /// Finds every GraphQL file at or under the argument paths, along with
    /// any errors hit while walking them.
    fn collect_file_paths(&self) -> (Vec<PathBuf>, Vec<String>) {
        // Extensions are compared without their leading `.`
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().and_then(|s| s.to_str())
                            && graphql_file_exts.contains(ext) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file argument is checked even when its extension is not
        // one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
        }

        (file_paths, errors)
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, mut errors) = self.collect_file_paths();
        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut num_definitions = 0;
        for file_path in &file_paths {
            let source = match std::fs::read_to_string(file_path) {
                Ok(source) => source,
                Err(e) => {
                    errors.push(format!("Failed to read {file_path:?}: {e}"));
                    continue;
                },
            };
            match GraphQLParser::new(&source).with_file_path(file_path).parse_document() {
                Ok(document) => {
                    log::debug!(
                        "Parsed {} definitions from {file_path:?}.",
                        document.definitions.len(),
                    );
                    num_definitions += document.definitions.len();
                },
                Err(e) => errors.push(e.format_detailed(Some(source.as_str()))),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Found {} GraphQL error(s):\n\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.join("\n"),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Parsed {} definitions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_definitions,
        ))
    }
}
