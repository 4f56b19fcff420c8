//! printf-style substitution of positional arguments into a message template.
//!
//! Recognized verbs: `%b` (bracketed), `%s` (text), `%d` (number), `%j` (JSON)
//! and `%%` (literal percent). Arguments left over after substitution are
//! appended to the text, so nothing the caller passed is silently dropped.

use super::arg::{Arg, Message, UNSERIALIZABLE};

/// A substitution verb that consumes one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Bracket,
    Text,
    Number,
    Json,
}

impl Verb {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Bracket),
            's' => Some(Self::Text),
            'd' => Some(Self::Number),
            'j' => Some(Self::Json),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Bracket => 'b',
            Self::Text => 's',
            Self::Number => 'd',
            Self::Json => 'j',
        }
    }

    fn render(self, arg: &Arg) -> String {
        match self {
            Self::Bracket => format!("[{}]", arg.to_text()),
            Self::Text => arg.to_text(),
            Self::Number => arg.to_number(),
            Self::Json => arg.to_json().unwrap_or_else(|| UNSERIALIZABLE.to_string()),
        }
    }
}

/// Template pieces: literal runs and verbs awaiting an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Verb(Verb),
}

/// Splits a template into segments. `%%` collapses to a literal `%`;
/// a `%` before anything else is kept as-is.
#[must_use]
pub fn parse(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            current.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                current.push('%');
            }
            Some(next) => {
                if let Some(verb) = Verb::from_char(next) {
                    chars.next();
                    if !current.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(Segment::Verb(verb));
                } else {
                    current.push('%');
                }
            }
            None => current.push('%'),
        }
    }

    if !current.is_empty() {
        segments.push(Segment::Literal(current));
    }
    segments
}

/// Result of formatting a template against its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Arguments used by verbs. Trailing arguments appended to the text are not counted.
    pub consumed: usize,
}

/// Formats `message` with `args`. Never fails: malformed input degrades to a best-effort dump.
#[must_use]
pub fn format(message: &Message, args: &[Arg]) -> Formatted {
    match message {
        Message::Text(template) => format_text(template, args),
        Message::Value(value) => {
            let text = std::iter::once(value.inspect())
                .chain(args.iter().map(render_trailing_inspect))
                .collect::<Vec<_>>()
                .join(" ");
            Formatted {
                text,
                consumed: args.len(),
            }
        }
    }
}

/// Text-template path of [`format`].
#[must_use]
pub fn format_text(template: &str, args: &[Arg]) -> Formatted {
    if args.is_empty() {
        return Formatted {
            text: template.to_string(),
            consumed: 0,
        };
    }

    let mut text = String::with_capacity(template.len());
    let mut next = 0;

    for segment in parse(template) {
        match segment {
            Segment::Literal(s) => text.push_str(&s),
            Segment::Verb(verb) => {
                if let Some(arg) = args.get(next) {
                    text.push_str(&verb.render(arg));
                    next += 1;
                } else {
                    text.push('%');
                    text.push(verb.as_char());
                }
            }
        }
    }

    for arg in &args[next..] {
        text.push(' ');
        text.push_str(&render_trailing(arg));
    }

    Formatted {
        text,
        consumed: next,
    }
}

fn render_trailing(arg: &Arg) -> String {
    if arg.is_primitive() {
        arg.to_text()
    } else {
        Verb::Json.render(arg)
    }
}

fn render_trailing_inspect(arg: &Arg) -> String {
    if arg.is_primitive() {
        arg.to_text()
    } else {
        arg.inspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_verbs_and_literals() {
        assert_eq!(
            parse("a %b c"),
            vec![
                Segment::Literal("a ".to_string()),
                Segment::Verb(Verb::Bracket),
                Segment::Literal(" c".to_string()),
            ]
        );
    }

    #[test]
    fn parse_keeps_unknown_verbs_literal() {
        assert_eq!(parse("50%x"), vec![Segment::Literal("50%x".to_string())]);
        assert_eq!(parse("tail%"), vec![Segment::Literal("tail%".to_string())]);
    }

    #[test]
    fn parse_collapses_double_percent() {
        assert_eq!(parse("100%%"), vec![Segment::Literal("100%".to_string())]);
    }
}
