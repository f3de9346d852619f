//! Mapping between the current page and the address bar's query string.
//!
//! The canonical URL for page 1 carries no `page` parameter at all; every
//! other page is written as its literal number. Unrelated parameters are
//! kept where they were.

/// Name of the query parameter holding the page number.
pub const PAGE_PARAM: &str = "page";

fn parse_pairs(search: &str) -> Vec<(String, String)> {
    let query = search.strip_prefix('?').unwrap_or(search);
    serde_urlencoded::from_str(query).unwrap_or_default()
}

/// Leading decimal digits of `value`, after any leading whitespace.
fn leading_number(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Page requested by a query string (`"?page=2"` or `"page=2"`).
///
/// Only the leading digits count, so `2abc` is page 2. Missing values and
/// values with no leading digits mean page 1. Numbers are returned as-is,
/// even when out of range; the server decides what page that is.
pub fn page_from_search(search: &str) -> u32 {
    parse_pairs(search)
        .into_iter()
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| leading_number(&value))
        .unwrap_or(1)
}

/// Rewrite a query string so it names `page`, dropping the parameter for
/// page 1. Returns the new query without a leading `?` (empty if nothing is
/// left).
pub fn search_with_page(search: &str, page: u32) -> String {
    let mut pairs: Vec<(String, String)> = parse_pairs(search);
    let position = pairs.iter().position(|(key, _)| key == PAGE_PARAM);
    pairs.retain(|(key, _)| key != PAGE_PARAM);

    if page != 1 {
        let entry = (PAGE_PARAM.to_string(), page.to_string());
        match position {
            Some(index) => pairs.insert(index.min(pairs.len()), entry),
            None => pairs.push(entry),
        }
    }

    serde_urlencoded::to_string(&pairs).unwrap_or_default()
}

/// Assemble a relative URL (`path?query#hash`) suitable for a history
/// replace, with the page parameter rewritten for `page`.
pub fn url_for_page(pathname: &str, search: &str, hash: &str, page: u32) -> String {
    let query = search_with_page(search, page);
    let mut url = String::from(if pathname.is_empty() { "/" } else { pathname });
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url.push_str(hash);
    url
}
