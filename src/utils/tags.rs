//! Codec for the comma-joined string columns (`techs`, `skills`,
//! `interested_categories`). The stored form is a single string; the domain
//! form is an ordered list. Elements are not trimmed, deduplicated or
//! validated, and an empty string maps to an empty list.

pub fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_empty_list() {
        assert!(split_tags("").is_empty());
        assert_eq!(join_tags(&[]), "");
    }

    #[test]
    fn splits_without_trimming() {
        assert_eq!(split_tags("python,django"), vec!["python", "django"]);
        assert_eq!(split_tags("a, b"), vec!["a", " b"]);
        assert_eq!(split_tags("one"), vec!["one"]);
    }

    #[test]
    fn keeps_empty_and_duplicate_elements() {
        assert_eq!(split_tags("a,,a"), vec!["a", "", "a"]);
    }

    #[test]
    fn round_trips() {
        for raw in ["", "python", "python,django", "a,, b ,a"] {
            assert_eq!(join_tags(&split_tags(raw)), raw);
        }
    }
}
