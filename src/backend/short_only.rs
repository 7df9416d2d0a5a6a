use super::{accept_short, short_spec, Backend, ScanState, Step};
use crate::getopt::{self, Getopt};
use crate::help::HelpStyle;
use crate::option::OptionDesc;
use tracing::trace;

/// Scans `-x` options through [`getopt::getopt`]. Descriptors without a
/// short character are unreachable.
#[derive(Debug, Default)]
pub struct ShortOnly {
    shortopts: String,
}

impl Backend for ShortOnly {
    const HELP_STYLE: HelpStyle = HelpStyle::ShortOnly;

    fn begin(&mut self) {
        getopt::reset();
    }

    fn prepare(&mut self, options: &mut [OptionDesc<'_>]) {
        self.shortopts = short_spec(options);
    }

    fn step<'a>(&mut self, scan: &mut ScanState<'a>, options: &mut [OptionDesc<'a>]) -> Step {
        let shortopts = &self.shortopts;
        let result = scan.with_scanner(|argv| getopt::getopt(argv, shortopts));
        trace!(?result, cursor = scan.cursor, "getopt step");

        match result {
            Getopt::End => Step::End,
            Getopt::Short { opt, optarg } => accept_short(options, opt, optarg),
            Getopt::Long { .. } | Getopt::Unknown | Getopt::MissingArgument => Step::NoMatch,
        }
    }
}
