use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use slink::config::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

const GUIDE: &str = "\
slink is a source only 'link': it does not link the node_modules dir,
so the linked package keeps a properly flattened and deduped
node_modules dir with respect to the package it is linked into.

Step 1: create a global link for the package being developed.
    From inside the package (e.g. dev/my-cool-package):
        npm link

Step 2: npm install the package into the package you test it in.
    From inside the package being used for testing:
        npm install ../../dev/my-cool-package

Step 3: slink.
    From the same folder as step 2:
        slink watch my-cool-package";

/// slink - keep a local npm install in step with the package source
#[derive(Parser, Debug)]
#[command(name = "slink")]
#[command(author, version, about, long_about = None)]
#[command(after_help = GUIDE)]
pub struct Cli {
    /// Config file (default: ./.slink.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror source changes into the local install until Ctrl+C
    Watch {
        /// Package names or paths to package sources
        #[arg(required = true, value_name = "PACKAGE")]
        packages: Vec<String>,
    },

    /// Replace the local install's files with links to the source, once
    Link {
        /// Package name or path to the package source
        #[arg(value_name = "PACKAGE")]
        package: String,
    },
}
