//! optscan - getopt-style option scanning with pluggable platform backends.
//!
//! A [`Parser`] holds a registry of options and an argument vector, and
//! yields matched options one at a time while moving operands behind them.
//! The scanning strategy is a [`Backend`]: a getopt_long style scanner, a
//! getopt style short-only scanner, or a self-contained scanner for
//! platforms without getopt. Crate features choose the default one.

pub mod backend;
pub mod config;
pub mod getopt;
pub mod help;
pub mod option;
pub mod parser;
pub mod report;
pub mod translate;

pub use backend::{Backend, DefaultBackend, LongShort, SelfContained, ShortOnly};
pub use config::{ConfigError, OptionSpec, OptionTable};
pub use help::{help_string, render_help, HelpStyle};
pub use option::OptionDesc;
pub use parser::{Outcome, Parser, ParserError};
pub use report::{MatchRecord, Report};
pub use translate::translate_long_name;
