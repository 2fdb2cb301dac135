//! Plain-text rendering of each view.
//!
//! Renderers only read view state; they write into any `fmt::Write` so tests
//! can render into a `String`.

pub mod albums;
pub mod blogs;
pub mod detail;

use std::fmt::{self, Write};

use folio_shared::constants::APP_NAME;
use folio_shared::Page;

pub use albums::render_albums;
pub use blogs::render_blogs;
pub use detail::render_detail;

pub fn render_home(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{APP_NAME} - album & blog viewer")?;
    writeln!(out)?;
    writeln!(out, "  /albums      album gallery")?;
    writeln!(out, "  /blogs       blog posts, filterable by author")?;
    writeln!(out, "  /blogs/<id>  a single post with its comments")
}

pub fn render_not_found(out: &mut impl Write, path: &str) -> fmt::Result {
    writeln!(out, "404 - page not found: {path}")?;
    writeln!(out, "Try /albums or /blogs.")
}

pub(crate) fn render_error(out: &mut impl Write, message: &str) -> fmt::Result {
    writeln!(out, "Error")?;
    writeln!(out, "{message}")
}

/// `[Previous] Page 1 of 3 [Next]`, greyed controls in parentheses. Nothing
/// when everything fits on one page.
pub(crate) fn render_pager<T>(out: &mut impl Write, page: &Page<'_, T>) -> fmt::Result {
    if !page.shows_pager() {
        return Ok(());
    }

    let previous = if page.has_previous() { "[Previous]" } else { "(Previous)" };
    let next = if page.has_next() { "[Next]" } else { "(Next)" };

    writeln!(out)?;
    writeln!(
        out,
        "{previous} Page {} of {} {next}",
        page.page, page.total_pages
    )
}
