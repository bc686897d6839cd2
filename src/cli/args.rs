// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for domtemplate

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "domtemplate")]
#[command(about = "Render comment-wrapped HTML templates from documents and directories")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template by identifier
    Render {
        #[arg(help = "HTML document or template directory")]
        source: PathBuf,

        #[arg(help = "Template identifier")]
        id: String,

        #[arg(short = 'V', long = "var", help = "Template parameter (key=value)")]
        vars: Vec<String>,

        #[arg(long, help = "JSON file with an object of template parameters")]
        params: Option<PathBuf>,

        #[arg(short, long, help = "Write the rendered output to a file")]
        output: Option<PathBuf>,
    },

    /// List the template identifiers a source provides
    List {
        #[arg(help = "HTML document or template directory")]
        source: PathBuf,
    },

    /// Validate a template and show the placeholders it references
    Check {
        #[arg(help = "HTML document or template directory")]
        source: PathBuf,

        #[arg(help = "Template identifier")]
        id: String,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, String>> {
        let mut variables = HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
