use std::fmt::{self, Write};

use folio_shared::constants::{ALL_AUTHORS, EXCERPT_CHARS};
use folio_shared::view::{BlogsView, LoadState};
use folio_shared::AuthorFilter;

use super::{render_error, render_pager};

pub fn render_blogs(out: &mut impl Write, view: &BlogsView) -> fmt::Result {
    writeln!(out, "Blogs")?;
    writeln!(out)?;

    match &view.posts {
        LoadState::Loading => return writeln!(out, "Loading..."),
        LoadState::Failed(message) => return render_error(out, message),
        LoadState::Ready(_) => {}
    }

    writeln!(out, "Filter by Author")?;
    let marker = |selected: bool| if selected { '*' } else { ' ' };
    writeln!(
        out,
        " {} {ALL_AUTHORS} (All Authors)",
        marker(view.author == AuthorFilter::All)
    )?;
    for author in view.authors() {
        let selected = matches!(&view.author, AuthorFilter::Name(name) if *name == author);
        writeln!(out, " {} {author}", marker(selected))?;
    }
    writeln!(out)?;

    let filtered = view.filtered_posts();
    if filtered.is_empty() {
        return writeln!(out, "No posts found");
    }

    let page = view.page_of(&filtered);
    for post in page.items {
        let like = if view.likes.is_liked(post.id) { "[Liked]" } else { "[Like]" };
        writeln!(out, "#{:<4} {}  {like}", post.id, post.title)?;
        writeln!(out, "      By {}", post.user.name)?;
        writeln!(out, "      {}", post.excerpt(EXCERPT_CHARS))?;
        writeln!(out, "      Read more: /blogs/{}", post.id)?;
        writeln!(out)?;
    }
    render_pager(out, &page)
}
