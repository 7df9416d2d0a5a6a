//! Help text rendering for a registry of options.

use crate::option::OptionDesc;
use crate::translate::translate_long_name;
use std::io::{self, Write};

/// Placeholder appended to the flag token of options taking an argument.
const ARG_PLACEHOLDER: &str = "ARG";

/// How options are spelled in help output; follows the active backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpStyle {
    /// `-a, --all` (short and long columns).
    LongAndShort,
    /// `-a` only; long-only options are left out.
    ShortOnly,
    /// `-All`, the translated long name; short-only options are left out.
    Translated,
}

fn with_placeholder(token: String, opt: &OptionDesc<'_>) -> String {
    if opt.takes_argument() {
        format!("{} {}", token, ARG_PLACEHOLDER)
    } else {
        token
    }
}

fn short_token(opt: &OptionDesc<'_>) -> Option<String> {
    opt.short_name()
        .map(|short| with_placeholder(format!("-{}", short), opt))
}

fn long_token(opt: &OptionDesc<'_>) -> Option<String> {
    opt.long_name()
        .map(|long| with_placeholder(format!("--{}", long), opt))
}

fn translated_token(opt: &OptionDesc<'_>) -> Option<String> {
    opt.long_name()
        .map(|long| with_placeholder(format!("-{}", translate_long_name(long)), opt))
}

/// Build the flag column for every option reachable under `style`, paired
/// with its help text.
fn flag_rows<'o>(options: &'o [OptionDesc<'_>], style: HelpStyle) -> Vec<(String, &'o str)> {
    let short_width = options
        .iter()
        .filter_map(short_token)
        .map(|token| token.chars().count())
        .max()
        .unwrap_or(0);

    options
        .iter()
        .filter_map(|opt| {
            let token = match style {
                HelpStyle::ShortOnly => short_token(opt),
                HelpStyle::Translated => translated_token(opt),
                HelpStyle::LongAndShort => match (short_token(opt), long_token(opt)) {
                    (Some(short), Some(long)) => Some(format!(
                        "{:<width$} {}",
                        format!("{},", short),
                        long,
                        width = short_width + 1
                    )),
                    (None, Some(long)) if short_width > 0 => Some(format!(
                        "{:<width$} {}",
                        "",
                        long,
                        width = short_width + 1
                    )),
                    (None, Some(long)) => Some(long),
                    (Some(short), None) => Some(short),
                    (None, None) => None,
                },
            }?;
            Some((token, opt.help().unwrap_or_default()))
        })
        .collect()
}

/// Write one line per option: the flag tokens, padded to a shared column,
/// then the help text.
pub fn render_help<W: Write>(
    options: &[OptionDesc<'_>],
    style: HelpStyle,
    sink: &mut W,
) -> io::Result<()> {
    let rows = flag_rows(options, style);
    let width = rows
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);

    for (token, help) in rows {
        let line = format!("  {:<width$}  {}", token, help, width = width);
        writeln!(sink, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Render the help text into a string.
pub fn help_string(options: &[OptionDesc<'_>], style: HelpStyle) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_help(options, style, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
