use std::cmp::Ordering;

/// String ordering in the manner of an `en_US` collation: letters compare without regard to
/// case first, and only names equal in that respect fall back to case, lowercase first.
pub trait Collate {
    fn collate(&self, other: &Self) -> Ordering;
}

impl Collate for str {
    fn collate(&self, other: &Self) -> Ordering {
        self.to_lowercase().cmp(&other.to_lowercase()).then_with(|| other.cmp(self))
    }
}

impl Collate for String {
    fn collate(&self, other: &Self) -> Ordering {
        self.as_str().collate(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Chrome", "Zoom", Ordering::Less)]
    #[case("chrome", "Zoom", Ordering::Less)]
    #[case("Zoom", "chrome", Ordering::Greater)]
    #[case("office", "Office", Ordering::Less)]
    #[case("Office", "Office", Ordering::Equal)]
    fn collate_cases(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(left.collate(right), expected);
    }

    #[test]
    fn collate_sorts_mixed_case_names_alphabetically() {
        let mut names = vec!["zoom".to_string(), "Adobe Reader".to_string(), "Microsoft Office".to_string()];
        names.sort_by(|a, b| a.collate(b));

        assert_eq!(names, vec!["Adobe Reader", "Microsoft Office", "zoom"]);
    }
}
