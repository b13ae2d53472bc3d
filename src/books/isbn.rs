//! Structural ISBN validation.
//!
//! Only the shape of the identifier is checked: ten or thirteen characters once
//! hyphens and whitespace are removed, all digits except an ISBN-10 check
//! character which may be `X`. Check digits are not verified.

const ISBN10_LEN: usize = 10;
const ISBN13_LEN: usize = 13;

/// Returns true when `raw` is a well-formed ISBN-10 or ISBN-13.
pub fn validate_isbn(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }

    let clean = strip_separators(raw);
    let len = clean.chars().count();
    if len != ISBN10_LEN && len != ISBN13_LEN {
        return false;
    }

    let mut chars = clean.chars();
    let last = match chars.next_back() {
        Some(c) => c,
        None => return false,
    };
    if !chars.all(|c| c.is_ascii_digit()) {
        return false;
    }

    match len {
        ISBN10_LEN => last.is_ascii_digit() || last == 'X' || last == 'x',
        _ => last.is_ascii_digit(),
    }
}

/// Removes hyphens and whitespace, the separators allowed inside an ISBN.
pub fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect()
}
