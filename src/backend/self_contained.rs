use super::{Backend, ScanState, Step};
use crate::help::HelpStyle;
use crate::option::OptionDesc;
use crate::translate::translate_long_name;
use tracing::trace;

/// Leading character that marks a token as an option.
pub const OPTION_MARKER: char = '-';

/// Scanner used when no getopt is available. Options are spelled as the
/// marker followed by the translated long name (`-IgnoreBackups`), and take
/// their argument from the next token.
///
/// Operands are rotated to the end of the argument vector as they are met, so
/// once the scan is exhausted the cursor points at the first operand and
/// operands keep their original order.
#[derive(Debug, Default)]
pub struct SelfContained {
    /// End of the region not yet scanned; everything at or past it is an
    /// operand. Set on the first step.
    unscanned_end: Option<usize>,
}

impl Backend for SelfContained {
    const HELP_STYLE: HelpStyle = HelpStyle::Translated;

    fn begin(&mut self) {
        self.unscanned_end = None;
    }

    fn prepare(&mut self, options: &mut [OptionDesc<'_>]) {
        for opt in options.iter_mut() {
            let translated = opt.long_name().map(translate_long_name);
            opt.set_translated(translated);
        }
    }

    fn step<'a>(&mut self, scan: &mut ScanState<'a>, options: &mut [OptionDesc<'a>]) -> Step {
        let end = self.unscanned_end.get_or_insert(scan.argv.len());

        loop {
            if scan.cursor >= *end {
                return Step::End;
            }

            let token = scan.argv[scan.cursor];
            scan.cursor += 1;

            let Some(name) = token.strip_prefix(OPTION_MARKER) else {
                scan.argv[scan.cursor - 1..].rotate_left(1);
                scan.cursor -= 1;
                *end -= 1;
                trace!(operand = token, unscanned_end = *end, "rotated operand");
                continue;
            };

            let Some(index) = options
                .iter()
                .position(|opt| opt.translated_name() == Some(name))
            else {
                trace!(token, "no descriptor");
                return Step::NoMatch;
            };

            if !options[index].takes_argument() {
                return Step::Matched(index);
            }

            // The next token is left in place so it is scanned on its own.
            if scan.cursor >= *end || scan.argv[scan.cursor].starts_with(OPTION_MARKER) {
                trace!(token, "missing argument");
                return Step::NoMatch;
            }

            let value = scan.argv[scan.cursor];
            scan.cursor += 1;
            options[index].capture(value);
            return Step::Matched(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<'a>(
        backend: &mut SelfContained,
        scan: &mut ScanState<'a>,
        options: &mut [OptionDesc<'a>],
    ) -> Vec<Step> {
        let mut steps = Vec::new();
        loop {
            let step = backend.step(scan, options);
            steps.push(step);
            if step == Step::End {
                return steps;
            }
        }
    }

    fn prepared(options: &mut [OptionDesc<'_>]) -> SelfContained {
        let mut backend = SelfContained::default();
        backend.prepare(options);
        backend.begin();
        backend
    }

    #[test]
    fn test_prepare_translates_long_names() {
        let mut options = vec![
            OptionDesc::new(Some("ignore-backups"), Some('B'), false, None),
            OptionDesc::new(None, Some('a'), false, None),
        ];
        prepared(&mut options);
        assert_eq!(options[0].translated_name(), Some("IgnoreBackups"));
        assert_eq!(options[1].translated_name(), None);
    }

    #[test]
    fn test_operands_rotated_in_order() {
        let mut options = vec![OptionDesc::new(Some("x"), None, false, None)];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "a", "-X", "b", "c", "-X", "d"]);

        let steps = drain(&mut backend, &mut scan, &mut options);
        assert_eq!(steps, vec![Step::Matched(0), Step::Matched(0), Step::End]);
        assert_eq!(scan.cursor(), 3);
        assert_eq!(scan.argv(), &["prog", "-X", "-X", "a", "b", "c", "d"]);
    }

    #[test]
    fn test_all_operands_terminates() {
        let mut options = vec![OptionDesc::new(Some("x"), None, false, None)];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "a", "b", "c"]);

        assert_eq!(drain(&mut backend, &mut scan, &mut options), vec![Step::End]);
        assert_eq!(scan.cursor(), 1);
        assert_eq!(scan.argv(), &["prog", "a", "b", "c"]);
    }

    #[test]
    fn test_argument_captured_from_next_token() {
        let mut options = vec![OptionDesc::new(Some("ignore"), Some('I'), true, None)];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "-Ignore", "*.c", "x.c"]);

        assert_eq!(backend.step(&mut scan, &mut options), Step::Matched(0));
        assert_eq!(options[0].value(), Some("*.c"));
        assert_eq!(backend.step(&mut scan, &mut options), Step::End);
        assert_eq!(&scan.argv()[scan.cursor()..], &["x.c"]);
    }

    #[test]
    fn test_argument_that_looks_like_option_is_no_match() {
        let mut options = vec![
            OptionDesc::new(Some("ignore"), Some('I'), true, None),
            OptionDesc::new(Some("all"), Some('a'), false, None),
        ];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "-Ignore", "-All"]);

        let steps = drain(&mut backend, &mut scan, &mut options);
        assert_eq!(steps, vec![Step::NoMatch, Step::Matched(1), Step::End]);
        assert_eq!(options[0].value(), None);
    }

    #[test]
    fn test_missing_argument_at_end_is_no_match() {
        let mut options = vec![OptionDesc::new(Some("ignore"), Some('I'), true, None)];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "-Ignore"]);

        assert_eq!(backend.step(&mut scan, &mut options), Step::NoMatch);
        assert_eq!(backend.step(&mut scan, &mut options), Step::End);
    }

    #[test]
    fn test_operand_after_option_taking_argument_is_not_consumed_twice() {
        let mut options = vec![OptionDesc::new(Some("ignore"), Some('I'), true, None)];
        let mut backend = prepared(&mut options);
        // "x.c" is rotated away before the option is reached, so the argument
        // is "*.c" rather than the operand.
        let mut scan = ScanState::new(vec!["prog", "x.c", "-Ignore", "*.c", "y.c"]);

        let steps = drain(&mut backend, &mut scan, &mut options);
        assert_eq!(steps, vec![Step::Matched(0), Step::End]);
        assert_eq!(options[0].value(), Some("*.c"));
        assert_eq!(&scan.argv()[scan.cursor()..], &["x.c", "y.c"]);
    }

    #[test]
    fn test_unknown_and_short_spellings_do_not_match() {
        let mut options = vec![OptionDesc::new(Some("all"), Some('a'), false, None)];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "-a", "--all", "-all", "-All"]);

        let steps = drain(&mut backend, &mut scan, &mut options);
        assert_eq!(
            steps,
            vec![
                Step::NoMatch,
                Step::NoMatch,
                Step::NoMatch,
                Step::Matched(0),
                Step::End
            ]
        );
    }

    #[test]
    fn test_first_descriptor_wins_on_collision() {
        let mut options = vec![
            OptionDesc::new(Some("foo-bar"), None, false, None),
            OptionDesc::new(Some("foo--bar"), None, false, None),
        ];
        let mut backend = prepared(&mut options);
        let mut scan = ScanState::new(vec!["prog", "-FooBar"]);
        assert_eq!(backend.step(&mut scan, &mut options), Step::Matched(0));
    }
}
