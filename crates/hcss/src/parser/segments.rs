//! Splitting declaration text into segments.
//!
//! Declaration text is a `;`-separated list of `property: value` pairs,
//! optionally followed or interleaved with one level of nested rules:
//!
//! ```css
//! color: white; background: #333;
//! &:hover { background: #555; }
//! ```
//!
//! Values are assumed flat and unquoted: a `;` inside a value (for example in
//! a data URL) splits it.

use nom::{
    IResult,
    bytes::complete::{take_till, take_until},
    character::complete::char,
    combinator::rest,
    sequence::{delimited, preceded, separated_pair},
};

/// One top-level piece of declaration text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A raw `property: value` segment, not yet split.
    Declaration(&'a str),
    /// A nested rule `&<suffix> { <body> }`.
    Nested { suffix: &'a str, body: &'a str },
    /// A nested rule whose closing brace is missing; holds the rest of input.
    Unclosed(&'a str),
}

/// Splits declaration text into segments, dropping empty ones.
pub fn split_segments(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut remaining = input;

    loop {
        remaining = remaining.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        if remaining.is_empty() {
            break;
        }

        if remaining.starts_with('&') {
            match parse_nested(remaining) {
                Ok((after, (suffix, body))) => {
                    segments.push(Segment::Nested {
                        suffix: suffix.trim(),
                        body,
                    });
                    remaining = after;
                }
                Err(_) => {
                    segments.push(Segment::Unclosed(remaining.trim_end()));
                    break;
                }
            }
            continue;
        }

        let (after, segment) = take_segment(remaining);
        let segment = segment.trim();
        if !segment.is_empty() {
            segments.push(Segment::Declaration(segment));
        }
        remaining = after;
    }

    segments
}

/// Splits a segment on its first `:` into a trimmed `(name, value)` pair.
///
/// Returns `None` when either side is empty or there is no colon.
pub fn split_declaration(segment: &str) -> Option<(&str, &str)> {
    let result: IResult<&str, (&str, &str)> =
        separated_pair(take_until(":"), char(':'), rest)(segment);
    let (_, (name, value)) = result.ok()?;

    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value))
}

/// Parses `&<suffix> { <body> }`.
fn parse_nested(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, suffix) = preceded(char('&'), take_until("{"))(input)?;
    let (input, body) = delimited(char('{'), take_until("}"), char('}'))(input)?;
    Ok((input, (suffix, body)))
}

/// Takes everything up to the next `;` or stray `}`.
fn take_segment(input: &str) -> (&str, &str) {
    let result: IResult<&str, &str> = take_till(|c| c == ';' || c == '}')(input);
    match result {
        Ok((after, segment)) => (after.strip_prefix('}').unwrap_or(after), segment),
        Err(_) => ("", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_flat_declarations() {
        assert_eq!(
            split_segments(" color: red ;; width: 10px;"),
            vec![
                Segment::Declaration("color: red"),
                Segment::Declaration("width: 10px"),
            ]
        );
    }

    #[test]
    fn recognizes_nested_block() {
        assert_eq!(
            split_segments("color: red; &:hover { color: blue; } opacity: 1"),
            vec![
                Segment::Declaration("color: red"),
                Segment::Nested {
                    suffix: ":hover",
                    body: " color: blue; "
                },
                Segment::Declaration("opacity: 1"),
            ]
        );
    }

    #[test]
    fn unclosed_block_swallows_rest() {
        assert_eq!(
            split_segments("&:hover { color: blue;"),
            vec![Segment::Unclosed("&:hover { color: blue;")]
        );
    }

    #[test]
    fn splits_on_first_colon_only() {
        assert_eq!(
            split_declaration("background: url(http://x/y.png)"),
            Some(("background", "url(http://x/y.png)"))
        );
        assert_eq!(split_declaration("color:"), None);
        assert_eq!(split_declaration(": red"), None);
        assert_eq!(split_declaration("nonsense"), None);
    }
}
