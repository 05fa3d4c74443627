use std::fmt;

use clap::Parser;

#[cfg(windows)]
use ansi_term::enable_ansi_support;

use crate::{
    arguments::clap_cli::LifoCli, common::errors::Result, config::Config, features::args::Args,
};

const DEFAULT_VALUES: [i64; 3] = [10, 20, 30];

pub struct CmdArgs {
    cli: LifoCli,
    config: Config,
}

impl CmdArgs {
    pub fn new() -> Result<CmdArgs> {
        #[cfg(windows)]
        let _ = enable_ansi_support();

        Ok(CmdArgs::from_parts(LifoCli::parse(), Config::new()?))
    }

    pub fn from_parts(cli: LifoCli, config: Config) -> CmdArgs {
        CmdArgs { cli, config }
    }
}

impl Args for CmdArgs {
    /// Values from the command line, then the config file, then `10 20 30`
    fn values(&self) -> Vec<i64> {
        if !self.cli.values.is_empty() {
            return self.cli.values.clone();
        }
        self.config
            .values
            .clone()
            .unwrap_or_else(|| DEFAULT_VALUES.to_vec())
    }

    fn no_color(&self) -> bool {
        self.cli.no_color || self.config.color == Some(false)
    }

    fn debug(&self) -> bool {
        self.cli.debug
    }

    fn quiet(&self) -> bool {
        self.cli.quiet || self.config.quiet.unwrap_or(false)
    }
}

impl fmt::Debug for CmdArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdArgs")
            .field("values", &self.values())
            .field("no_color", &self.no_color())
            .field("debug", &self.debug())
            .field("quiet", &self.quiet())
            .finish()
    }
}
