use std::fmt::{self, Write};

use folio_shared::view::{AlbumsView, LoadState};

use super::{render_error, render_pager};

pub fn render_albums(out: &mut impl Write, view: &AlbumsView) -> fmt::Result {
    writeln!(out, "Albums")?;
    writeln!(out)?;

    let albums = match &view.albums {
        LoadState::Loading => return writeln!(out, "Loading..."),
        LoadState::Failed(message) => return render_error(out, message),
        LoadState::Ready(albums) => albums,
    };

    if albums.is_empty() {
        return writeln!(out, "No albums found");
    }

    let page = view.current_page();
    for album in page.items {
        writeln!(out, "#{:<4} {}", album.id, album.title)?;
        writeln!(out, "      By {}", album.user.name)?;
    }
    render_pager(out, &page)?;

    if let Some(album_id) = view.selected_album {
        writeln!(out)?;
        writeln!(out, "Album Photos (album #{album_id})")?;
        match &view.photos {
            LoadState::Loading => writeln!(out, "  Loading...")?,
            LoadState::Failed(message) => writeln!(out, "  {message}")?,
            LoadState::Ready(photos) if photos.is_empty() => writeln!(out, "  No photos")?,
            LoadState::Ready(photos) => {
                for photo in photos {
                    writeln!(out, "  - {}", photo.title)?;
                    writeln!(out, "    thumbnail: {}", photo.thumbnail_url)?;
                    writeln!(out, "    full size: {}", photo.url)?;
                }
            }
        }
    }

    Ok(())
}
