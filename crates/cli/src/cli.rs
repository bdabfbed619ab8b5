use std::env;
use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use pcbdash_vis::range::Range;
use pcbdash_vis::range::Selection;
use reqwest::Url;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch the analytics data and render the dashboard page.
    View(ViewArgs),

    /// Render the dashboard page from the built-in sample data.
    Sample(SampleArgs),

    /// Print the description of a time range.
    Range {
        /// The time range: all, week, month or threemonths.
        #[arg(short, long, default_value = "all")]
        range: Range,
    },
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    /// The base URL of the analytics server, for example `http://localhost:5000`.
    #[arg(short, long)]
    pub(crate) url: Url,

    /// The time range: all, week, month or threemonths.
    #[arg(short, long, default_value = "all")]
    pub(crate) range: Range,

    /// Specify the path where the dashboard directory will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Reload the data and rewrite the page every given number of seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) refresh_every: Option<u64>,
}

#[derive(Args)]
pub(crate) struct SampleArgs {
    /// The range selector entry: all, week, month, threemonths or custom.
    #[arg(short, long, default_value = "all")]
    pub(crate) selection: Selection,

    /// Specify the path where the dashboard directory will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        match self {
            Some(path) => Ok(path),
            None => env::current_dir().map_err(|e| CliError::Path(e.to_string())),
        }
    }
}
