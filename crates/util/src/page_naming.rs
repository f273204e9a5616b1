//! # Page Naming Utilities
//!
//! Helpers that derive page identities from addresses and file names. The
//! navigation bar compares these identities against its entry paths, so they
//! must match the bare file names the entries are written with.

/// Suffix of the per-page template files merged with the master page.
pub const PART_EXTENSION: &str = ".part.html";

/// Returns the current page identity for an address: everything after the last `/`.
///
/// Addresses without a `/` are returned unchanged. An address ending in `/`
/// yields an empty identity, which matches no navigation entry.
///
/// # Example
/// ```rust
/// use pacsite_util::current_page;
///
/// assert_eq!(current_page("http://example.com/site/about.html"), "about.html");
/// assert_eq!(current_page("about.html"), "about.html");
/// assert_eq!(current_page("http://example.com/"), "");
/// ```
pub fn current_page(address: &str) -> &str {
    match address.rfind('/') {
        Some(index) => &address[index + 1..],
        None => address,
    }
}

/// Whether `file_name` names a part template (`x.part.html`).
pub fn is_part_file(file_name: &str) -> bool {
    output_name_for_part(file_name).is_some()
}

/// Maps `x.part.html` to the generated page name `x.html`.
///
/// Returns `None` for names that are not part templates, including a bare
/// `.part.html` with no stem.
pub fn output_name_for_part(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(PART_EXTENSION)?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}.html"))
}
