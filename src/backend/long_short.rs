use super::{accept, accept_short, short_spec, Backend, ScanState, Step};
use crate::getopt::{self, Getopt, LongOption};
use crate::help::HelpStyle;
use crate::option::OptionDesc;
use tracing::trace;

/// Scans `-x` and `--long-name` options through [`getopt::getopt_long`].
#[derive(Debug, Default)]
pub struct LongShort {
    shortopts: String,
    longopts: Vec<LongOption>,
    /// Registry index of each `longopts` entry.
    long_index: Vec<usize>,
}

impl Backend for LongShort {
    const HELP_STYLE: HelpStyle = HelpStyle::LongAndShort;

    fn begin(&mut self) {
        getopt::reset();
    }

    fn prepare(&mut self, options: &mut [OptionDesc<'_>]) {
        self.shortopts = short_spec(options);
        self.longopts.clear();
        self.long_index.clear();
        for (index, opt) in options.iter().enumerate() {
            if let Some(long) = opt.long_name() {
                self.longopts
                    .push(LongOption::new(long, opt.takes_argument()));
                self.long_index.push(index);
            }
        }
    }

    fn step<'a>(&mut self, scan: &mut ScanState<'a>, options: &mut [OptionDesc<'a>]) -> Step {
        let shortopts = &self.shortopts;
        let longopts = &self.longopts;
        let result = scan.with_scanner(|argv| getopt::getopt_long(argv, shortopts, longopts));
        trace!(?result, cursor = scan.cursor, "getopt_long step");

        match result {
            Getopt::End => Step::End,
            Getopt::Unknown | Getopt::MissingArgument => Step::NoMatch,
            Getopt::Short { opt, optarg } => accept_short(options, opt, optarg),
            Getopt::Long { index, optarg } => accept(options, self.long_index[index], optarg),
        }
    }
}
