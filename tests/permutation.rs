use optscan::{Backend, LongShort, Outcome, Parser, SelfContained, ShortOnly};

/// Token kinds used to build command lines.
#[derive(Debug, Clone, Copy)]
enum Token {
    Flag,
    WithArgument,
    Operand,
}

/// Every sequence of up to `len` tokens.
fn sequences(len: usize) -> Vec<Vec<Token>> {
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..len {
        let mut next = Vec::new();
        for seq in &frontier {
            for token in [Token::Flag, Token::WithArgument, Token::Operand] {
                let mut extended: Vec<Token> = seq.clone();
                extended.push(token);
                next.push(extended);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

struct Spelling {
    flag: &'static str,
    with_argument: &'static str,
}

const LONG: Spelling = Spelling {
    flag: "--verbose",
    with_argument: "--output",
};
const SHORT: Spelling = Spelling {
    flag: "-v",
    with_argument: "-o",
};
const TRANSLATED: Spelling = Spelling {
    flag: "-Verbose",
    with_argument: "-Output",
};

/// Render a token sequence; returns the argument vector, the operands in
/// order and the option arguments in order.
fn render(tokens: &[Token], spelling: &Spelling) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut argv = vec!["prog".to_string()];
    let mut operands = Vec::new();
    let mut values = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Flag => argv.push(spelling.flag.to_string()),
            Token::WithArgument => {
                let value = format!("value{}", i);
                argv.push(spelling.with_argument.to_string());
                argv.push(value.clone());
                values.push(value);
            }
            Token::Operand => {
                let operand = format!("file{}.txt", i);
                argv.push(operand.clone());
                operands.push(operand);
            }
        }
    }
    (argv, operands, values)
}

fn check<B: Backend>(spelling: &Spelling) {
    for tokens in sequences(5) {
        let (argv, operands, values) = render(&tokens, spelling);
        let mut parser: Parser<'_, B> = Parser::with_backend(&argv).unwrap();
        parser
            .add_option(Some("verbose"), Some('v'), false, None)
            .add_option(Some("output"), Some('o'), true, None);

        let mut captured = Vec::new();
        loop {
            match parser.next() {
                Outcome::Matched(opt) => {
                    if let Some(value) = opt.value() {
                        if opt.short_name() == Some('o') {
                            captured.push(value.to_string());
                        }
                    }
                }
                Outcome::NoMatch => panic!("unexpected no-match for {:?}", argv),
                Outcome::End => break,
            }
        }

        assert_eq!(parser.operands(), operands.as_slice(), "argv {:?}", argv);
        assert_eq!(parser.cursor(), argv.len() - operands.len());
        assert_eq!(captured, values, "argv {:?}", argv);

        let mut sorted_before = argv.clone();
        let mut sorted_after: Vec<String> = parser.argv().iter().map(|s| s.to_string()).collect();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after, "tokens lost or duplicated");
        assert_eq!(parser.argv()[0], "prog");
    }
}

#[test]
fn test_permutation_long_short() {
    check::<LongShort>(&LONG);
}

#[test]
fn test_permutation_short_only() {
    check::<ShortOnly>(&SHORT);
}

#[test]
fn test_permutation_self_contained() {
    check::<SelfContained>(&TRANSLATED);
}
