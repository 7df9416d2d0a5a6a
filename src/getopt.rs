//! A getopt(3) / getopt_long(3) work-alike.
//!
//! As with the C interface, the scan state lives outside any caller-owned
//! value: the cursor (`optind`), the error-reporting flag (`opterr`), the last
//! offending option character (`optopt`), the position inside a cluster of
//! short options, and the bookkeeping used to permute operands behind the
//! options. The state is shared by every caller on the current thread, so only
//! one scan may be in progress per thread. Callers that run several scans copy
//! `optind`/`opterr` in before each call and back out after it.
//!
//! Operands are permuted the GNU way: once the argument vector is exhausted,
//! every operand sits after `optind`, in its original order.

use std::cell::RefCell;
use std::fmt;

/// An entry of the long option table handed to [`getopt_long`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongOption {
    pub name: String,
    pub has_arg: bool,
}

impl LongOption {
    pub fn new(name: &str, has_arg: bool) -> Self {
        Self {
            name: name.to_string(),
            has_arg,
        }
    }
}

/// Result of one scanner call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Getopt<'a> {
    /// A short option from the spec string, with its argument if it takes one.
    Short { opt: char, optarg: Option<&'a str> },
    /// A long option, identified by its index in the long option table.
    Long { index: usize, optarg: Option<&'a str> },
    /// Unrecognized option, or an argument given to a long option that takes
    /// none (`'?'` in C).
    Unknown,
    /// A required argument is missing (`':'` in C).
    MissingArgument,
    /// No options left (`-1` in C). `optind` points at the first operand.
    End,
}

#[derive(Debug)]
struct State {
    optind: usize,
    opterr: bool,
    optopt: Option<char>,
    /// Byte offset of the next short option inside `argv[optind]`; 0 when no
    /// cluster is pending.
    nextchar: usize,
    first_nonopt: usize,
    last_nonopt: usize,
    initialized: bool,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::new());
}

/// Index of the next element of the argument vector to scan.
pub fn optind() -> usize {
    STATE.with(|state| state.borrow().optind)
}

pub fn set_optind(optind: usize) {
    STATE.with(|state| state.borrow_mut().optind = optind);
}

/// Whether diagnostics are written to stderr.
pub fn opterr() -> bool {
    STATE.with(|state| state.borrow().opterr)
}

pub fn set_opterr(opterr: bool) {
    STATE.with(|state| state.borrow_mut().opterr = opterr);
}

/// The short option character behind the last `Unknown` or
/// `MissingArgument` result, if it was a short option.
pub fn optopt() -> Option<char> {
    STATE.with(|state| state.borrow().optopt)
}

/// Forget any pending cluster and permutation bookkeeping. The next call
/// starts a fresh scan at the current `optind`.
pub fn reset() {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.initialized = false;
        state.nextchar = 0;
        state.optopt = None;
    });
}

/// Scan the next short option described by `shortopts` (`"ab:c"` style: a
/// `:` after a character means it takes an argument).
pub fn getopt<'a>(argv: &mut [&'a str], shortopts: &str) -> Getopt<'a> {
    STATE.with(|state| state.borrow_mut().scan(argv, shortopts, None))
}

/// Like [`getopt`], and additionally recognizes `--name` and `--name=value`
/// against `longopts`. Names must match exactly.
pub fn getopt_long<'a>(
    argv: &mut [&'a str],
    shortopts: &str,
    longopts: &[LongOption],
) -> Getopt<'a> {
    STATE.with(|state| state.borrow_mut().scan(argv, shortopts, Some(longopts)))
}

fn is_nonoption(arg: &str) -> bool {
    arg.len() < 2 || !arg.starts_with('-')
}

/// Look up `c` in a short option spec; `Some(true)` when it takes an argument.
fn short_spec(shortopts: &str, c: char) -> Option<bool> {
    if c == ':' {
        return None;
    }
    let mut chars = shortopts.chars().peekable();
    while let Some(candidate) = chars.next() {
        let has_arg = chars.peek() == Some(&':');
        if has_arg {
            chars.next();
        }
        if candidate == c {
            return Some(has_arg);
        }
    }
    None
}

impl State {
    fn new() -> Self {
        Self {
            optind: 1,
            opterr: true,
            optopt: None,
            nextchar: 0,
            first_nonopt: 1,
            last_nonopt: 1,
            initialized: false,
        }
    }

    fn complain(&self, argv: &[&str], message: fmt::Arguments<'_>) {
        if self.opterr {
            let program = argv.first().copied().unwrap_or_default();
            eprintln!("{}: {}", program, message);
        }
    }

    /// Move the block of operands `[first_nonopt, last_nonopt)` behind the
    /// options `[last_nonopt, optind)`.
    fn exchange(&mut self, argv: &mut [&str]) {
        argv[self.first_nonopt..self.optind].rotate_left(self.last_nonopt - self.first_nonopt);
        self.first_nonopt += self.optind - self.last_nonopt;
        self.last_nonopt = self.optind;
    }

    fn scan<'a>(
        &mut self,
        argv: &mut [&'a str],
        shortopts: &str,
        longopts: Option<&[LongOption]>,
    ) -> Getopt<'a> {
        let argc = argv.len();

        if self.optind == 0 || !self.initialized {
            if self.optind == 0 {
                self.optind = 1;
            }
            self.first_nonopt = self.optind;
            self.last_nonopt = self.optind;
            self.nextchar = 0;
            self.initialized = true;
        }

        let cluster_pending = self.nextchar != 0
            && self.optind < argc
            && self.nextchar < argv[self.optind].len();

        if !cluster_pending {
            self.nextchar = 0;

            if self.last_nonopt > self.optind {
                self.last_nonopt = self.optind;
            }
            if self.first_nonopt > self.optind {
                self.first_nonopt = self.optind;
            }

            if self.first_nonopt != self.last_nonopt && self.last_nonopt != self.optind {
                self.exchange(argv);
            } else if self.last_nonopt != self.optind {
                self.first_nonopt = self.optind;
            }

            while self.optind < argc && is_nonoption(argv[self.optind]) {
                self.optind += 1;
            }
            self.last_nonopt = self.optind;

            if self.optind < argc && argv[self.optind] == "--" {
                self.optind += 1;
                if self.first_nonopt != self.last_nonopt && self.last_nonopt != self.optind {
                    self.exchange(argv);
                } else if self.first_nonopt == self.last_nonopt {
                    self.first_nonopt = self.optind;
                }
                self.last_nonopt = argc;
                self.optind = argc;
            }

            if self.optind >= argc {
                if self.first_nonopt != self.last_nonopt {
                    self.optind = self.first_nonopt;
                }
                return Getopt::End;
            }

            if let Some(longopts) = longopts {
                let arg: &'a str = argv[self.optind];
                if let Some(body) = arg.strip_prefix("--") {
                    return self.scan_long(argv, body, longopts);
                }
            }

            self.nextchar = 1;
        }

        self.scan_short(argv, shortopts)
    }

    fn scan_long<'a>(
        &mut self,
        argv: &[&'a str],
        body: &'a str,
        longopts: &[LongOption],
    ) -> Getopt<'a> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        self.optind += 1;
        self.optopt = None;

        let Some(index) = longopts.iter().position(|opt| opt.name == name) else {
            self.complain(argv, format_args!("unrecognized option '--{}'", name));
            return Getopt::Unknown;
        };

        if !longopts[index].has_arg {
            if inline.is_some() {
                self.complain(
                    argv,
                    format_args!("option '--{}' doesn't allow an argument", name),
                );
                return Getopt::Unknown;
            }
            return Getopt::Long {
                index,
                optarg: None,
            };
        }

        if inline.is_some() {
            return Getopt::Long {
                index,
                optarg: inline,
            };
        }
        if self.optind < argv.len() {
            let optarg = argv[self.optind];
            self.optind += 1;
            return Getopt::Long {
                index,
                optarg: Some(optarg),
            };
        }

        self.complain(argv, format_args!("option '--{}' requires an argument", name));
        Getopt::MissingArgument
    }

    fn scan_short<'a>(&mut self, argv: &[&'a str], shortopts: &str) -> Getopt<'a> {
        let arg = argv[self.optind];
        let Some(c) = arg[self.nextchar..].chars().next() else {
            self.nextchar = 0;
            self.optind += 1;
            return Getopt::Unknown;
        };
        self.nextchar += c.len_utf8();

        let cluster_done = self.nextchar >= arg.len();
        let rest = &arg[self.nextchar..];
        if cluster_done {
            self.optind += 1;
            self.nextchar = 0;
        }

        let Some(has_arg) = short_spec(shortopts, c) else {
            self.optopt = Some(c);
            self.complain(argv, format_args!("invalid option -- '{}'", c));
            return Getopt::Unknown;
        };

        if !has_arg {
            return Getopt::Short {
                opt: c,
                optarg: None,
            };
        }

        if !cluster_done {
            // -Ifoo: the rest of the element is the argument.
            self.optind += 1;
            self.nextchar = 0;
            return Getopt::Short {
                opt: c,
                optarg: Some(rest),
            };
        }

        if self.optind < argv.len() {
            let optarg = argv[self.optind];
            self.optind += 1;
            return Getopt::Short {
                opt: c,
                optarg: Some(optarg),
            };
        }

        self.optopt = Some(c);
        self.complain(argv, format_args!("option requires an argument -- '{}'", c));
        Getopt::MissingArgument
    }
}
