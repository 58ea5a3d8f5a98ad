//! Current location as seen by the page.

use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

/// Pathname, query and hash of the current location.
///
/// `query` keeps its leading `?` and `hash` its leading `#`, matching what a
/// browser location reports, so the three parts concatenate back into the
/// original string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Path component, e.g. `/en/docs/install`.
    pub pathname: String,
    /// Query string including `?`.
    pub query: Option<String>,
    /// Fragment including `#`.
    pub hash: Option<String>,
}

impl Location {
    /// Location with only a pathname.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: None,
            hash: None,
        }
    }

    /// Splits `path?query#hash`. Empty parts are dropped; a missing
    /// pathname becomes `/`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.find('#') {
            Some(i) => (&raw[..i], Some(&raw[i..])),
            None => (raw, None),
        };
        let (pathname, query) = match rest.find('?') {
            Some(i) => (&rest[..i], Some(&rest[i..])),
            None => (rest, None),
        };

        Self {
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname.to_string()
            },
            query: query.filter(|q| q.len() > 1).map(str::to_string),
            hash: hash.filter(|h| h.len() > 1).map(str::to_string),
        }
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pathname)?;
        if let Some(query) = &self.query {
            f.write_str(query)?;
        }
        if let Some(hash) = &self.hash {
            f.write_str(hash)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let loc = Location::parse("/en/docs?tab=cli#install");
        assert_eq!(loc.pathname, "/en/docs");
        assert_eq!(loc.query.as_deref(), Some("?tab=cli"));
        assert_eq!(loc.hash.as_deref(), Some("#install"));
        assert_eq!(loc.to_string(), "/en/docs?tab=cli#install");
    }

    #[test]
    fn test_parse_path_only() {
        assert_eq!(Location::parse("/en/docs"), Location::new("/en/docs"));
    }

    #[test]
    fn test_question_mark_inside_hash() {
        let loc = Location::parse("/a#b?c");
        assert_eq!(loc.pathname, "/a");
        assert!(loc.query.is_none());
        assert_eq!(loc.hash.as_deref(), Some("#b?c"));
    }

    #[test]
    fn test_empty_parts_dropped() {
        let loc = Location::parse("?#");
        assert_eq!(loc, Location::new("/"));
    }

    #[test]
    fn test_from_str() {
        let loc: Location = "/x?y".parse().unwrap();
        assert_eq!(loc.query.as_deref(), Some("?y"));
    }
}
