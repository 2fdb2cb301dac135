use std::fmt::{self, Write};

use folio_shared::view::{BlogDetailView, LoadState};

pub fn render_detail(out: &mut impl Write, view: &BlogDetailView) -> fmt::Result {
    writeln!(out, "< Back to Blogs (/blogs)")?;
    writeln!(out)?;

    let post = match &view.post {
        LoadState::Loading => return writeln!(out, "Loading..."),
        LoadState::Failed(message) => {
            writeln!(out, "{message}")?;
            return writeln!(
                out,
                "The blog post you're looking for doesn't exist or couldn't be loaded."
            );
        }
        LoadState::Ready(post) => post,
    };

    writeln!(out, "{}", post.title)?;
    writeln!(out, "By {}", post.user.name)?;
    writeln!(out)?;
    writeln!(out, "{}", post.body)?;
    writeln!(out)?;

    match &view.comments {
        LoadState::Loading => writeln!(out, "Comments (loading...)"),
        LoadState::Failed(message) => writeln!(out, "Comments unavailable: {message}"),
        LoadState::Ready(comments) => {
            writeln!(out, "Comments ({})", comments.len())?;
            for comment in comments {
                writeln!(out)?;
                writeln!(out, "  {} <{}>", comment.name, comment.email)?;
                writeln!(out, "  {}", comment.body)?;
            }
            Ok(())
        }
    }
}
