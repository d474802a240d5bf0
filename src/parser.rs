use winnow::combinator::{alt, opt, peek, repeat_till, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_until};

use crate::FooterSeparator;

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
// <newline>         ::= <CR>, <LF> | <LF> | <CR>
fn newline<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    alt(("\r\n", "\n", "\r")).parse_next(i)
}

// <line>            ::= <any UTF8-octets except newline>*, [<newline>]
fn line<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    terminated(take_till(0.., ['\r', '\n']), opt(newline)).parse_next(i)
}

/// Split off the first line, returning it without its terminator along with
/// everything after the terminator.
pub(crate) fn split_first_line(text: &str) -> (&str, &str) {
    let mut rest = text;
    match line.parse_next(&mut rest) {
        Ok(first) => (first, rest),
        Err(_) => (text, ""),
    }
}

/// Lines of `text`, without terminators.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (first, tail) = split_first_line(rest);
        rest = tail;
        Some(first)
    })
}

// <prefix>          ::= <any UTF8-octets except ": ">*
// <summary>         ::= <prefix>, ": ", <text>
//                    |  <prefix>, ":", <whitespace>*
fn prefix<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    terminated(take_until(0.., ": "), ": ").parse_next(i)
}

/// Split a header line at its type/scope separator.
///
/// Returns the type/scope prefix and everything after the separator's colon;
/// the colon itself sits at byte `prefix.len()`. A header with no `": "` still
/// splits when it ends in a colon, so `type(scope):` can be reported as a
/// missing description rather than a missing type.
pub(crate) fn split_summary(header: &str) -> Option<(&str, &str)> {
    let mut rest = header;
    let prefix = match prefix.parse_next(&mut rest) {
        Ok(prefix) => prefix,
        Err(_) => header.trim_end().strip_suffix(':')?,
    };
    Some((prefix, &header[prefix.len() + 1..]))
}

// <separator>       ::= ": " | " #"
fn footer_separator(i: &mut &str) -> ModalResult<FooterSeparator> {
    alt((
        ": ".value(FooterSeparator::Value),
        " #".value(FooterSeparator::Ref),
    ))
    .parse_next(i)
}

// <token>           ::= <any UTF8-octets up to the first separator>
fn footer_token<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    repeat_till(0.., any, peek(footer_separator))
        .map(|((), _): ((), FooterSeparator)| ())
        .take()
        .parse_next(i)
}

// <footer>          ::= <token>, <separator>, <whitespace>*, <value>, <whitespace>*
pub(crate) fn footer(line: &str) -> Option<(&str, FooterSeparator, &str)> {
    let mut rest = line;
    let (token, separator) = (footer_token, footer_separator)
        .parse_next(&mut rest)
        .ok()?;
    Some((token, separator, rest.trim()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_first_line() {
        assert_eq!(split_first_line(""), ("", ""));
        assert_eq!(split_first_line("foo"), ("foo", ""));
        assert_eq!(split_first_line("foo\n"), ("foo", ""));
        assert_eq!(split_first_line("foo\nbar\nbaz"), ("foo", "bar\nbaz"));
        assert_eq!(split_first_line("foo\r\nbar"), ("foo", "bar"));
        assert_eq!(split_first_line("foo\rbar"), ("foo", "bar"));
        assert_eq!(split_first_line("\n\nbar"), ("", "\nbar"));
    }

    #[test]
    fn test_lines() {
        let lines: Vec<_> = lines("a\r\nb\n\nc\rd").collect();
        assert_eq!(lines, ["a", "b", "", "c", "d"]);
        assert_eq!(super::lines("").count(), 0);
    }

    #[test]
    fn test_split_summary() {
        // valid
        assert_eq!(split_summary("foo: bar"), Some(("foo", " bar")));
        assert_eq!(split_summary("foo(bar)!: baz"), Some(("foo(bar)!", " baz")));
        assert_eq!(split_summary("foo:  bar: baz"), Some(("foo", "  bar: baz")));
        assert_eq!(split_summary("foo:bar: baz"), Some(("foo:bar", " baz")));
        assert_eq!(split_summary("foo(bar):"), Some(("foo(bar)", "")));
        assert_eq!(split_summary("foo(bar):  "), Some(("foo(bar)", "  ")));
        assert_eq!(split_summary(": bar"), Some(("", " bar")));

        // invalid
        assert_eq!(split_summary(""), None);
        assert_eq!(split_summary("foo bar"), None);
        assert_eq!(split_summary("foo:bar"), None);
    }

    #[test]
    fn test_footer() {
        // valid
        assert_eq!(
            footer("hello: world"),
            Some(("hello", FooterSeparator::Value, "world"))
        );
        assert_eq!(
            footer("Closes #12"),
            Some(("Closes", FooterSeparator::Ref, "12"))
        );
        assert_eq!(
            footer("Refs: #12 #13"),
            Some(("Refs", FooterSeparator::Value, "#12 #13"))
        );
        assert_eq!(
            footer("Fixes #1: crash"),
            Some(("Fixes", FooterSeparator::Ref, "1: crash"))
        );
        assert_eq!(
            footer("BREAKING CHANGE: oops  "),
            Some(("BREAKING CHANGE", FooterSeparator::Value, "oops"))
        );
        assert_eq!(footer("foo: "), Some(("foo", FooterSeparator::Value, "")));

        // invalid
        assert_eq!(footer(""), None);
        assert_eq!(footer("foo"), None);
        assert_eq!(footer("foo:bar"), None);
        assert_eq!(footer("foo#bar"), None);
    }
}
