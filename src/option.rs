//! Option descriptors.

/// A registered option: its names, argument requirement and help text, plus
/// the value captured for it during a scan.
///
/// The captured value borrows from the caller's argument storage (`'a`), so it
/// outlives the [`Parser`](crate::Parser) that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDesc<'a> {
    long_name: Option<String>,
    short_name: Option<char>,
    takes_argument: bool,
    help: Option<String>,
    captured: Option<&'a str>,
    translated: Option<String>,
}

impl<'a> OptionDesc<'a> {
    /// Create a descriptor. Neither name is required, but a descriptor without
    /// any name never matches.
    pub fn new(
        long_name: Option<&str>,
        short_name: Option<char>,
        takes_argument: bool,
        help: Option<&str>,
    ) -> Self {
        Self {
            long_name: long_name.map(str::to_string),
            short_name,
            takes_argument,
            help: help.map(str::to_string),
            captured: None,
            translated: None,
        }
    }

    /// Long option name (e.g. `"ignore-backups"` for `--ignore-backups`).
    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// Short option character (e.g. `'B'` for `-B`).
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    /// Help text shown by the help renderer.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The argument captured by the most recent match of this option.
    pub fn value(&self) -> Option<&'a str> {
        self.captured
    }

    /// PascalCase spelling used by the self-contained backend. Only derived
    /// once that backend has prepared the registry.
    pub fn translated_name(&self) -> Option<&str> {
        self.translated.as_deref()
    }

    /// Whether the descriptor has at least one name it could match by.
    pub fn is_named(&self) -> bool {
        self.long_name.is_some() || self.short_name.is_some()
    }

    /// Name used when reporting the option: the long name if present,
    /// otherwise the short character.
    pub fn display_name(&self) -> String {
        match (&self.long_name, self.short_name) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }

    pub(crate) fn capture(&mut self, value: &'a str) {
        if self.takes_argument {
            self.captured = Some(value);
        }
    }

    pub(crate) fn clear_capture(&mut self) {
        self.captured = None;
    }

    pub(crate) fn set_translated(&mut self, translated: Option<String>) {
        self.translated = translated;
    }
}
