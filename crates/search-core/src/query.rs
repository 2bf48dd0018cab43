//! Query-term joining and search URL construction.
//!
//! Web searches never percent-encode: terms are split on whitespace and glued
//! together with `+`, then appended to a fixed base URL.

/// Join query terms with `+`, splitting each term on whitespace first.
///
/// ```rust
/// use search_core::query::join_terms;
///
/// assert_eq!(join_terms(&["foo", "bar"]), "foo+bar");
/// assert_eq!(join_terms(&["rust  async", "trait"]), "rust+async+trait");
/// ```
pub fn join_terms<S: AsRef<str>>(terms: &[S]) -> String {
    terms
        .iter()
        .flat_map(|term| term.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join("+")
}

/// Append the joined `terms` to `base_url`, or `None` when no term has content.
///
/// ```rust
/// use search_core::query::search_url;
///
/// let url = search_url("https://duckduckgo.com/?q=", &["borrow", "checker"]);
/// assert_eq!(url.as_deref(), Some("https://duckduckgo.com/?q=borrow+checker"));
/// assert_eq!(search_url("https://duckduckgo.com/?q=", &[""]), None);
/// ```
pub fn search_url<S: AsRef<str>>(base_url: &str, terms: &[S]) -> Option<String> {
    let query = join_terms(terms);
    if query.is_empty() {
        None
    } else {
        Some(format!("{base_url}{query}"))
    }
}
