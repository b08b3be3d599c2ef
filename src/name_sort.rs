use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));
static AFTER_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\]([ -]*)(.*)").expect("valid regex"));

const NUMBER_WIDTH: usize = 4;

/// Appended to names that carried a `[...]` marker so they sort after their plain counterpart.
pub const BRACKET_SUFFIX: char = 'a';

/// Builds the key device names are ordered by.
///
/// The first run of digits is zero padded to four places and moved behind the remaining
/// characters, so `labmac-2` sorts before `labmac-10`. Names marked like `[lost] labmac-1`
/// lose the marker and get [`BRACKET_SUFFIX`] appended, placing them right after `labmac-1`.
pub fn sort_key(name: &str) -> String {
    let mut key = match DIGIT_RUN.find(name) {
        Some(run) => {
            let non_digits: String = name.chars().filter(|c| !c.is_ascii_digit()).collect();
            format!("{}{}", non_digits, pad_number(run.as_str()))
        }
        None => name.to_string(),
    };

    if key.contains('[') {
        if let Some(rest) = AFTER_BRACKET.captures(&key).and_then(|captures| captures.get(2)) {
            key = format!("{}{}", rest.as_str(), BRACKET_SUFFIX);
        }
    }

    key
}

fn pad_number(digits: &str) -> String {
    format!("{:0>width$}", digits.trim_start_matches('0'), width = NUMBER_WIDTH)
}
