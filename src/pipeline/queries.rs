//! Turn a pasted song list into search queries.

use std::sync::LazyLock;

use regex::Regex;

/// List decorations: "1. ", "02) ", "- ", "3 - "
static LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.\-)\s]+").expect("list prefix pattern is valid"));

/// One query per non-empty line, with leading numbering and bullets removed.
///
/// Numbers at the start of a line are always treated as list numbering, so a
/// title that starts with digits loses them.
pub fn parse_query_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| LIST_PREFIX.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
