//! Classifies a `/teams...` request path by its final segment.

use std::sync::LazyLock;

use regex::Regex;

pub const COLLECTION: &str = "teams";

static TEAM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("team id pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    List,
    FetchById(&'a str),
    Unrecognized,
}

pub fn classify(path: &str) -> Intent<'_> {
    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or_default();

    if last == COLLECTION {
        return Intent::List;
    }

    // "/teams/" lists as well
    if last.is_empty() && segments.next() == Some(COLLECTION) {
        return Intent::List;
    }

    if TEAM_ID.is_match(last) {
        return Intent::FetchById(last);
    }

    Intent::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_paths_list() {
        assert_eq!(classify("/teams"), Intent::List);
        assert_eq!(classify("/teams/"), Intent::List);
        assert_eq!(classify("/teams/archive/teams"), Intent::List);
        assert_eq!(classify("/teams/archive/teams/"), Intent::List);
    }

    #[test]
    fn digit_segments_fetch_by_id() {
        assert_eq!(classify("/teams/7"), Intent::FetchById("7"));
        assert_eq!(classify("/teams/007"), Intent::FetchById("007"));
        assert_eq!(classify("/teams/cheese/42"), Intent::FetchById("42"));
    }

    #[test]
    fn everything_else_is_unrecognized() {
        assert_eq!(classify("/teams/notanumber"), Intent::Unrecognized);
        assert_eq!(classify("/teams/7a"), Intent::Unrecognized);
        assert_eq!(classify("/teams/-7"), Intent::Unrecognized);
        assert_eq!(classify("/teams/7/"), Intent::Unrecognized);
        assert_eq!(classify("/teams/٣"), Intent::Unrecognized);
        assert_eq!(classify("/teams/team"), Intent::Unrecognized);
    }
}
