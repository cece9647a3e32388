//! Minimal CLI: schema documents → TypeScript declarations
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use tracing::warn;

use schema_ts::load::{self, Selection, DEFAULT_POINTER};
use schema_ts::{Config, Generated, NestedObjects};

/// Exit status when `--deny-warnings` is set and diagnostics were produced.
const EXIT_DIAGNOSTICS: u8 = 2;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// translate OpenAPI-style component schemas into TypeScript declarations
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit one declaration block per top-level schema
    Generate(GenerateOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to the schema mapping in each document ('' for the whole document)
    #[arg(long, default_value = DEFAULT_POINTER)]
    pointer: String,

    /// JQ filter selecting the schema mapping; overrides --pointer
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct GeneratorSettings {
    /// prefix declarations with `export`
    #[arg(long)]
    export: bool,

    /// spaces per indentation level inside interfaces
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// drop field descriptions instead of rendering doc comments
    #[arg(long)]
    no_descriptions: bool,

    /// top-level schema names to leave out (`error` is always left out)
    #[arg(long, num_args = 1..)]
    skip: Vec<String>,

    /// give every nested object its own declaration, not only titled ones
    #[arg(long)]
    hoist_nested: bool,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    generator_settings: GeneratorSettings,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// exit with status 2 when any diagnostic was reported
    #[arg(long)]
    deny_warnings: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn selection(&self) -> Selection {
        Selection { pointer: self.pointer.clone(), jq_expr: self.jq_expr.clone() }
    }

    /// Load and translate every input. Documents are independent, so they run in
    /// parallel; results come back in input order.
    fn load_generate(&self, config: &Config) -> anyhow::Result<Vec<(PathBuf, Generated)>> {
        let source_paths = load::resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        let selection = self.selection();
        source_paths
            .into_par_iter()
            .map(|path| -> anyhow::Result<(PathBuf, Generated)> {
                let schemas = load::schemas_from_path(&path, &selection)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                let generated = schema_ts::generate(&schemas, config);
                Ok((path, generated))
            })
            .collect()
    }
}

impl GeneratorSettings {
    fn config(&self) -> Config {
        let nested = if self.hoist_nested { NestedObjects::Hoist } else { NestedObjects::Inline };
        Config::new()
            .export(self.export)
            .indent(" ".repeat(self.indent))
            .descriptions(!self.no_descriptions)
            .skip(self.skip.iter().cloned())
            .nested_objects(nested)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<ExitCode> {
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(ExitCode::SUCCESS);
                }

                let config = target.generator_settings.config();
                let results = target.input_settings.load_generate(&config)?;

                let mut diagnostic_count = 0;
                let mut sections = Vec::with_capacity(results.len());
                for (path, generated) in &results {
                    for diagnostic in &generated.diagnostics {
                        warn!(input = %path.display(), "{diagnostic}");
                    }
                    diagnostic_count += generated.diagnostics.len();
                    if !generated.blocks.is_empty() {
                        sections.push(generated.to_string());
                    }
                }
                let ts_src = sections.join("\n");

                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    std::fs::write(out, &ts_src)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                } else {
                    print!("{ts_src}");
                }

                if diagnostic_count > 0 {
                    eprintln!(
                        "{} {diagnostic_count} schema node(s) could not be translated",
                        "warning:".yellow().bold(),
                    );
                    if target.deny_warnings {
                        return Ok(ExitCode::from(EXIT_DIAGNOSTICS));
                    }
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
