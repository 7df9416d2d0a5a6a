//! The option parser: registry, argument vector and the iteration entry point.

use crate::backend::{Backend, DefaultBackend, ScanState, Step};
use crate::help::{help_string, render_help};
use crate::option::OptionDesc;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when constructing a parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("argument vector is empty: expected at least the program name")]
    EmptyArgv,
}

/// Outcome of a single [`Parser::next`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'p, 'a> {
    /// A registered option matched; its argument, if it takes one, is
    /// available through [`OptionDesc::value`].
    Matched(&'p OptionDesc<'a>),
    /// An option-looking token did not resolve to a registered option, or a
    /// required argument was missing.
    NoMatch,
    /// No tokens left. The parser is exhausted from now on.
    End,
}

/// Scans an argument vector for registered options, one match at a time.
///
/// Index 0 of the vector is the program name and is never scanned. The
/// vector is permuted in place while scanning; after exhaustion every operand
/// sits at or after [`cursor`](Parser::cursor), in its original order.
///
/// With the getopt-based backends only one parser may be mid-scan per
/// thread: their scanner state is shared, and interleaving the steps of two
/// parsers corrupts both.
#[derive(Debug)]
pub struct Parser<'a, B: Backend = DefaultBackend> {
    options: Vec<OptionDesc<'a>>,
    scan: ScanState<'a>,
    backend: B,
    started: bool,
    initialized: bool,
    exhausted: bool,
    unmatched: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser using the backend selected by the crate features.
    pub fn new<S: AsRef<str>>(args: &'a [S]) -> Result<Self, ParserError> {
        Self::with_backend(args)
    }
}

impl<'a, B: Backend> Parser<'a, B> {
    /// Create a parser driven by backend `B`.
    ///
    /// Captured option arguments borrow from `args`, not from the parser.
    pub fn with_backend<S: AsRef<str>>(args: &'a [S]) -> Result<Self, ParserError> {
        if args.is_empty() {
            return Err(ParserError::EmptyArgv);
        }

        let argv: Vec<&'a str> = args.iter().map(|arg| arg.as_ref()).collect();
        Ok(Self {
            options: Vec::new(),
            scan: ScanState::new(argv),
            backend: B::default(),
            started: false,
            initialized: false,
            exhausted: false,
            unmatched: 0,
        })
    }

    /// Register an option. Adding options after scanning started makes the
    /// next step re-derive the backend tables.
    pub fn add_option(
        &mut self,
        long_name: Option<&str>,
        short_name: Option<char>,
        takes_argument: bool,
        description: Option<&str>,
    ) -> &mut Self {
        self.register(OptionDesc::new(
            long_name,
            short_name,
            takes_argument,
            description,
        ))
    }

    /// Register an already built descriptor.
    pub fn register(&mut self, option: OptionDesc<'a>) -> &mut Self {
        if !option.is_named() {
            warn!(index = self.options.len(), "option has no name and will never match");
        }
        self.options.push(option);
        self.initialized = false;
        self
    }

    /// Scan for the next option.
    ///
    /// Once [`Outcome::End`] was returned the parser stays exhausted and every
    /// further call returns `End` again.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Outcome<'_, 'a> {
        if self.exhausted {
            return Outcome::End;
        }

        if !self.started {
            for opt in &mut self.options {
                opt.clear_capture();
            }
            self.backend.begin();
            self.started = true;
            debug!(argc = self.scan.argv.len(), "scan session started");
        }

        if !self.initialized {
            self.backend.prepare(&mut self.options);
            self.initialized = true;
            debug!(options = self.options.len(), "backend tables derived");
        }

        match self.backend.step(&mut self.scan, &mut self.options) {
            Step::Matched(index) => {
                let opt = &self.options[index];
                debug!(option = %opt.display_name(), value = ?opt.value(), "matched");
                Outcome::Matched(opt)
            }
            Step::NoMatch => {
                self.unmatched += 1;
                debug!(cursor = self.scan.cursor, "unmatched option");
                Outcome::NoMatch
            }
            Step::End => {
                self.exhausted = true;
                debug!(
                    cursor = self.scan.cursor,
                    unmatched = self.unmatched,
                    "scan exhausted"
                );
                Outcome::End
            }
        }
    }

    /// Whether the scan has reached its end.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of [`Outcome::NoMatch`] results so far.
    pub fn unmatched_count(&self) -> usize {
        self.unmatched
    }

    /// The registered options, in registration order.
    pub fn options(&self) -> &[OptionDesc<'a>] {
        &self.options
    }

    /// The argument vector in its current (possibly permuted) order.
    pub fn argv(&self) -> &[&'a str] {
        self.scan.argv()
    }

    /// Scan cursor. After exhaustion this is the index of the first operand,
    /// or the argument count when there are none.
    pub fn cursor(&self) -> usize {
        self.scan.cursor()
    }

    /// The operands, `argv[cursor..]`. Only complete once exhausted.
    pub fn operands(&self) -> &[&'a str] {
        let argv = self.scan.argv();
        &argv[self.scan.cursor().min(argv.len())..]
    }

    pub fn program_name(&self) -> &'a str {
        self.scan.argv[0]
    }

    /// Toggle the scanner's own diagnostics on stderr (getopt's `opterr`).
    /// Enabled by default; the self-contained backend never prints.
    pub fn set_error_reporting(&mut self, enabled: bool) -> &mut Self {
        self.scan.report_errors = enabled;
        self
    }

    /// Write one help line per reachable option to `sink`.
    pub fn print_help<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        render_help(&self.options, B::HELP_STYLE, sink)
    }

    /// The help text as a string.
    pub fn help_text(&self) -> String {
        help_string(&self.options, B::HELP_STYLE)
    }
}
