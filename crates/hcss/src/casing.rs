//! Property-name casing conversion.
//!
//! Style records key properties in camel case (`backgroundColor`); CSS text
//! uses hyphenated lowercase (`background-color`). The two rules are:
//!
//! - **camel → kebab**: insert `-` before every uppercase letter, then
//!   lowercase the whole name.
//! - **kebab → camel**: for every `-` followed by a letter, drop the `-` and
//!   uppercase the letter.
//!
//! ## Vendor prefixes
//!
//! A leading vendor word gets a leading hyphen in CSS. Capitalized prefixes
//! (`WebkitMaskImage`, `MozAppearance`) already produce one under the plain
//! rule. Lowercase prefixes (`webkitMaskImage`, `msTransform`) are special
//! cased so they also map to `-webkit-mask-image` and `-ms-transform`.
//! In the other direction `-ms-` becomes the lowercase `ms` prefix, every
//! other vendor prefix becomes capitalized (`-webkit-` → `Webkit`).
//!
//! The one pair of rules that does not invert is a lowercase `webkit` or
//! `moz` prefix: `mozAppearance` → `-moz-appearance` → `MozAppearance`.
//! Both spellings name the same CSS property.

/// Lowercase vendor words that get a leading hyphen when they start a name.
const LOWERCASE_VENDOR_PREFIXES: [&str; 3] = ["webkit", "moz", "ms"];

/// Converts a camel-case property key to its CSS name.
///
/// # Examples
///
/// ```
/// use hcss::casing::to_kebab_case;
///
/// assert_eq!(to_kebab_case("backgroundColor"), "background-color");
/// assert_eq!(to_kebab_case("WebkitMaskImage"), "-webkit-mask-image");
/// assert_eq!(to_kebab_case("msTransform"), "-ms-transform");
/// assert_eq!(to_kebab_case("color"), "color");
/// ```
pub fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);

    if has_lowercase_vendor_prefix(key) {
        out.push('-');
    }

    for c in key.chars() {
        if c.is_uppercase() {
            out.push('-');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a CSS property name to its camel-case record key.
///
/// Surrounding whitespace is trimmed first.
///
/// # Examples
///
/// ```
/// use hcss::casing::to_camel_case;
///
/// assert_eq!(to_camel_case("background-color"), "backgroundColor");
/// assert_eq!(to_camel_case(" border-top-left-radius "), "borderTopLeftRadius");
/// assert_eq!(to_camel_case("-webkit-mask-image"), "WebkitMaskImage");
/// assert_eq!(to_camel_case("-ms-transform"), "msTransform");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let name = name.trim();
    match name.strip_prefix("-ms-") {
        Some(rest) => camelize(&format!("ms-{rest}")),
        None => camelize(name),
    }
}

/// Returns `true` for keys like `webkitMaskImage` or `msTransform`.
fn has_lowercase_vendor_prefix(key: &str) -> bool {
    LOWERCASE_VENDOR_PREFIXES.iter().any(|prefix| {
        key.strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_uppercase)
    })
}

fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_alphabetic() {
                    chars.next();
                    out.extend(next.to_uppercase());
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
