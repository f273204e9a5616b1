//! Navigation bar rendering.
//!
//! The bar is returned as markup rather than written anywhere, so callers
//! decide where it goes (a generated page, stdout, a test assertion).

use pacsite_types::{NavBar, NavEntry, StaticLink};
use tracing::debug;

/// Renders `navbar` as a `<ul class="navbar">` fragment for `current_page`.
///
/// The entry whose path equals `current_page` (exact, case-sensitive) has its
/// label wrapped in `<b>`. Static links follow the entries and are never
/// emphasized. If no entry matches, nothing is emphasized.
///
/// # Example
/// ```rust
/// use pacsite_engine::render_nav_bar;
/// use pacsite_types::{NavBar, NavEntry, StaticLink};
///
/// let navbar = NavBar::new(
///     vec![NavEntry::new("index.html", "Main"), NavEntry::new("about.html", "About")],
///     vec![StaticLink::new("file.zip", "Download")],
/// )?;
/// let markup = render_nav_bar(&navbar, "about.html");
/// assert!(markup.contains(r#"<a href="about.html"><b>About</b></a>"#));
/// assert!(markup.contains(r#"<a href="index.html">Main</a>"#));
/// # Ok::<(), pacsite_types::ConfigError>(())
/// ```
pub fn render_nav_bar(navbar: &NavBar, current_page: &str) -> String {
    if navbar.entry_for(current_page).is_none() {
        debug!(
            page = current_page,
            "current page is not in the navigation bar; nothing emphasized"
        );
    }

    let item_count = navbar.entries().len() + navbar.static_links().len();
    let mut lines = Vec::with_capacity(item_count + 2);
    lines.push(r#"<ul class="navbar">"#.to_string());
    lines.extend(
        navbar
            .entries()
            .iter()
            .map(|entry| render_nav_item(entry, current_page)),
    );
    lines.extend(navbar.static_links().iter().map(render_static_link));
    lines.push("</ul>".to_string());
    lines.join("\n")
}

fn render_nav_item(entry: &NavEntry, current_page: &str) -> String {
    if entry.path == current_page {
        format!(r#"<li><a href="{}"><b>{}</b></a></li>"#, entry.path, entry.label)
    } else {
        format!(r#"<li><a href="{}">{}</a></li>"#, entry.path, entry.label)
    }
}

fn render_static_link(link: &StaticLink) -> String {
    format!(r#"<li><a href="{}">{}</a></li>"#, link.href, link.label)
}
