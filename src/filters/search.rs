//! Case-insensitive substring search over display names

use crate::catalog::Hangout;

/// True when `query` is blank or appears in `haystack` ignoring case
pub fn matches(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Hangouts whose title or poster name contains the query
pub fn search_hangouts<'a>(hangouts: &'a [Hangout], query: &str) -> Vec<&'a Hangout> {
    hangouts
        .iter()
        .filter(|h| matches(&h.title, query) || matches(&h.poster.username, query))
        .collect()
}

/// Schools whose name contains the query, in catalogue order
pub fn search_schools<'a>(schools: &[&'a str], query: &str) -> Vec<&'a str> {
    schools.iter().copied().filter(|school| matches(school, query)).collect()
}
