mod client;
pub mod device_update;
pub mod devices;
pub mod domain;
mod error;
pub mod policy_fetcher;
pub mod privileges;
pub mod profiles;
pub mod reference_lists;
pub mod search;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub use client::{JssClient, new_client};
pub use error::JssError;

/// Characters left as-is in a path segment. `*` stays literal, it is the JSS match wildcard.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~').remove(b'*');

pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("labmac-1", "labmac-1")]
    #[case("*lab mac*", "*lab%20mac*")]
    #[case("Science/Lab", "Science%2FLab")]
    #[case("José", "Jos%C3%A9")]
    fn path_segment_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(path_segment(input), expected);
    }
}
