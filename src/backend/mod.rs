//! Scanning strategies behind [`Parser`](crate::Parser).
//!
//! Exactly one backend drives a parser, chosen through its type parameter.
//! The crate features pick [`DefaultBackend`]: `getopt-long` selects
//! [`LongShort`], `getopt` alone selects [`ShortOnly`], and builds with
//! neither (or Windows targets) use [`SelfContained`].

mod long_short;
mod self_contained;
mod short_only;

use crate::getopt;
use crate::help::HelpStyle;
use crate::option::OptionDesc;
use std::fmt;

pub use long_short::LongShort;
pub use self_contained::{SelfContained, OPTION_MARKER};
pub use short_only::ShortOnly;

#[cfg(all(not(windows), feature = "getopt-long"))]
pub type DefaultBackend = LongShort;

#[cfg(all(not(windows), not(feature = "getopt-long"), feature = "getopt"))]
pub type DefaultBackend = ShortOnly;

#[cfg(any(windows, not(any(feature = "getopt-long", feature = "getopt"))))]
pub type DefaultBackend = SelfContained;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::LongShort {}
    impl Sealed for super::ShortOnly {}
    impl Sealed for super::SelfContained {}
}

/// What a single backend step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Index of the matched descriptor in the registry.
    Matched(usize),
    NoMatch,
    End,
}

/// The argument vector and cursor a backend scans.
#[derive(Debug)]
pub struct ScanState<'a> {
    pub(crate) argv: Vec<&'a str>,
    pub(crate) cursor: usize,
    pub(crate) report_errors: bool,
}

impl<'a> ScanState<'a> {
    pub(crate) fn new(argv: Vec<&'a str>) -> Self {
        Self {
            argv,
            cursor: 1,
            report_errors: true,
        }
    }

    pub fn argv(&self) -> &[&'a str] {
        &self.argv
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Run one call of the thread-global getopt scanner against this state.
    ///
    /// The cursor and error flag are copied into the scanner before the call
    /// and copied back afterwards. Interleaving calls from two scan states
    /// corrupts both.
    fn with_scanner<R>(&mut self, call: impl FnOnce(&mut [&'a str]) -> R) -> R {
        getopt::set_optind(self.cursor);
        getopt::set_opterr(self.report_errors);
        let result = call(self.argv.as_mut_slice());
        self.cursor = getopt::optind();
        self.report_errors = getopt::opterr();
        result
    }
}

/// One of the three scanning strategies.
pub trait Backend: Default + fmt::Debug + sealed::Sealed {
    /// How the help renderer spells this backend's options.
    const HELP_STYLE: HelpStyle;

    /// Called once, before the first step of a session.
    fn begin(&mut self) {}

    /// Derive backend-private structures from the registry. Safe to repeat;
    /// called again whenever options were added after the last derivation.
    fn prepare(&mut self, options: &mut [OptionDesc<'_>]);

    /// Perform a single scan step.
    fn step<'a>(&mut self, scan: &mut ScanState<'a>, options: &mut [OptionDesc<'a>]) -> Step;
}

/// Build a getopt short option spec: each short character, followed by `:`
/// when the option takes an argument.
fn short_spec(options: &[OptionDesc<'_>]) -> String {
    let mut spec = String::new();
    for opt in options {
        if let Some(short) = opt.short_name() {
            spec.push(short);
            if opt.takes_argument() {
                spec.push(':');
            }
        }
    }
    spec
}

/// Accept the descriptor at `index`, capturing `optarg` when it takes an
/// argument. A missing required argument is a no-match.
fn accept<'a>(options: &mut [OptionDesc<'a>], index: usize, optarg: Option<&'a str>) -> Step {
    let opt = &mut options[index];
    if opt.takes_argument() {
        match optarg {
            Some(value) => opt.capture(value),
            None => return Step::NoMatch,
        }
    }
    Step::Matched(index)
}

/// Resolve a short option character returned by getopt to the first
/// descriptor carrying it.
fn accept_short<'a>(options: &mut [OptionDesc<'a>], opt: char, optarg: Option<&'a str>) -> Step {
    match options.iter().position(|desc| desc.short_name() == Some(opt)) {
        Some(index) => accept(options, index, optarg),
        None => Step::NoMatch,
    }
}
