//! Value-level scanning helpers shared by the structured editors.
//!
//! These work on raw value text that the declaration parser has already
//! isolated, e.g. `linear-gradient(90deg, #f00 0%, blue 100%)`:
//!
//! - [`function_args`]: the argument text of the first `name(...)` call
//! - [`split_top_level`]: split on a separator outside parentheses
//! - [`find_color`]: the first hex/rgb/hsl/named color token
//! - [`find_percentage`]: the first `<integer>%`
//! - [`parse_px`]: a `<integer>px` (or bare integer) length

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_until, take_while1, take_while_m_n},
    character::complete::{alpha1, char, digit1},
    combinator::{all_consuming, map_res, opt, recognize, verify},
    sequence::{terminated, tuple},
};

use crate::types::color::is_named_color;

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Returns the text between the parentheses of the first `name(...)` call,
/// matching nested parentheses. The name is matched case-insensitively.
///
/// ```
/// use hcss::parser::values::function_args;
///
/// let css = "background: linear-gradient(90deg, rgb(1, 2, 3) 0%, red 100%);";
/// assert_eq!(
///     function_args(css, "linear-gradient"),
///     Some("90deg, rgb(1, 2, 3) 0%, red 100%")
/// );
/// assert_eq!(function_args(css, "radial-gradient"), None);
/// ```
pub fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}(", name.to_ascii_lowercase());
    let start = input.to_ascii_lowercase().find(&needle)? + needle.len();

    let mut depth = 1usize;
    for (i, c) in input[start..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&input[start..start + i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits on `separator` outside parentheses, trimming pieces and dropping
/// empty ones.
///
/// ```
/// use hcss::parser::values::split_top_level;
///
/// assert_eq!(
///     split_top_level("to right, rgba(0, 0, 0, 0.5) 10%, red", ','),
///     vec!["to right", "rgba(0, 0, 0, 0.5) 10%", "red"]
/// );
/// ```
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Finds the first color token in `input`.
///
/// Recognizes `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
/// `hsl()`, `hsla()`, named colors and `transparent`. Tokens must start at a
/// word boundary.
///
/// ```
/// use hcss::parser::values::find_color;
///
/// assert_eq!(find_color("2px solid #a6deba"), Some("#a6deba"));
/// assert_eq!(find_color("rgba(0, 0, 0, 0.4) 30%"), Some("rgba(0, 0, 0, 0.4)"));
/// assert_eq!(find_color("dashed coral"), Some("coral"));
/// assert_eq!(find_color("12px 50%"), None);
/// ```
pub fn find_color(input: &str) -> Option<&str> {
    word_starts(input).find_map(|i| {
        let (after, token) = color_token(&input[i..]).ok()?;
        ends_word(after).then_some(token)
    })
}

/// Finds the first `<integer>%` in `input`.
///
/// ```
/// use hcss::parser::values::find_percentage;
///
/// assert_eq!(find_percentage("#fff 40%"), Some(40));
/// assert_eq!(find_percentage("red"), None);
/// ```
pub fn find_percentage(input: &str) -> Option<u32> {
    let mut previous_is_digit = false;
    for (i, c) in input.char_indices() {
        if c.is_ascii_digit() && !previous_is_digit {
            let parsed: IResult<&str, u32> =
                map_res(terminated(digit1, char('%')), str::parse)(&input[i..]);
            if let Ok((_, value)) = parsed {
                return Some(value);
            }
        }
        previous_is_digit = c.is_ascii_digit();
    }
    None
}

/// Parses a whole token as an integer pixel length (`12px` or `12`).
///
/// ```
/// use hcss::parser::values::parse_px;
///
/// assert_eq!(parse_px("12px"), Some(12));
/// assert_eq!(parse_px("0"), Some(0));
/// assert_eq!(parse_px("1.5em"), None);
/// ```
pub fn parse_px(token: &str) -> Option<u32> {
    let parsed: IResult<&str, u32> = all_consuming(terminated(
        map_res(digit1, str::parse),
        opt(tag_no_case("px")),
    ))(token.trim());
    parsed.ok().map(|(_, value)| value)
}

fn color_token(input: &str) -> IResult<&str, &str> {
    alt((hex_color, color_function, named_color))(input)
}

fn hex_color(input: &str) -> IResult<&str, &str> {
    verify(
        recognize(tuple((
            char('#'),
            take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit()),
        ))),
        |token: &str| matches!(token.len() - 1, 3 | 4 | 6 | 8),
    )(input)
}

fn color_function(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((
            tag_no_case("rgba"),
            tag_no_case("rgb"),
            tag_no_case("hsla"),
            tag_no_case("hsl"),
        )),
        char('('),
        take_until(")"),
        char(')'),
    )))(input)
}

fn named_color(input: &str) -> IResult<&str, &str> {
    verify(alpha1, |word: &str| is_named_color(word))(input)
}

/// Byte offsets where a word starts: the beginning of input or after a
/// space, comma or opening parenthesis.
fn word_starts(input: &str) -> impl Iterator<Item = usize> + '_ {
    let mut previous = None;
    input.char_indices().filter_map(move |(i, c)| {
        let at_boundary = previous.is_none_or(|p: char| p.is_whitespace() || p == ',' || p == '(');
        previous = Some(c);
        at_boundary.then_some(i)
    })
}

fn ends_word(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '-' || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_must_start_a_word() {
        assert_eq!(find_color("darkred"), Some("darkred"));
        assert_eq!(find_color("solid-red"), None);
    }

    #[test]
    fn hex_of_wrong_length_is_not_a_color() {
        assert_eq!(find_color("#12345"), None);
        assert_eq!(find_color("#1234567890"), None);
    }

    #[test]
    fn percentage_skips_lengths() {
        assert_eq!(find_percentage("10px 25%"), Some(25));
    }

    #[test]
    fn unbalanced_function_is_none() {
        assert_eq!(function_args("linear-gradient(90deg, red", "linear-gradient"), None);
    }
}
