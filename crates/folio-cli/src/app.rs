//! View activation.
//!
//! Each `*_view` method corresponds to one addressable view: it builds the
//! view's initial state, runs its loaders, and feeds the outcome through the
//! view reducer. The returned state is ready to render.

use folio_net::{
    load_albums, load_comments, load_photo_preview, load_posts, DataSource, LoadError, Liveness,
};
use folio_shared::view::{
    AlbumsAction, AlbumsView, BlogDetailAction, BlogDetailView, BlogsAction, BlogsView,
};
use folio_shared::{AuthorFilter, LikeMap};
use folio_store::Database;

use crate::config::AppConfig;

pub struct App<S> {
    pub config: AppConfig,
    pub source: S,
    pub db: Database,
}

impl<S: DataSource> App<S> {
    pub fn new(config: AppConfig, source: S, db: Database) -> Self {
        Self { config, source, db }
    }

    pub async fn albums_view(&self, page: usize, album: Option<u32>, liveness: &Liveness) -> AlbumsView {
        let mut view = AlbumsView::new(self.config.albums_per_page);

        let Some(loaded) = outcome(load_albums(&self.source, liveness).await, "albums") else {
            return view;
        };
        view = view
            .apply(AlbumsAction::Loaded(loaded))
            .apply(AlbumsAction::GoToPage(page));

        if let Some(album_id) = album {
            view = view.apply(AlbumsAction::OpenAlbum(album_id));
            match load_photo_preview(&self.source, album_id, liveness).await {
                Err(e) if e.is_cancelled() => {}
                photos => {
                    let photos = photos.map_err(|e| e.to_string());
                    view = view.apply(AlbumsAction::PhotosLoaded { album_id, photos });
                }
            }
        }

        view
    }

    pub async fn blogs_view(
        &self,
        page: usize,
        author: AuthorFilter,
        liveness: &Liveness,
    ) -> anyhow::Result<BlogsView> {
        let likes = self.db.load_likes()?;
        let view = BlogsView::new(self.config.posts_per_page).apply(BlogsAction::LikesLoaded(likes));

        let Some(loaded) = outcome(load_posts(&self.source, liveness).await, "posts") else {
            return Ok(view);
        };

        Ok(view
            .apply(BlogsAction::Loaded(loaded))
            .apply(BlogsAction::SelectAuthor(author))
            .apply(BlogsAction::GoToPage(page)))
    }

    pub async fn blog_detail_view(&self, post_id: u32, liveness: &Liveness) -> BlogDetailView {
        let view = BlogDetailView::new(post_id);

        let Some(loaded) = outcome(load_posts(&self.source, liveness).await, "posts") else {
            return view;
        };
        let view = view.apply(BlogDetailAction::PostsLoaded(loaded));
        if !view.wants_comments() {
            return view;
        }

        match load_comments(&self.source, post_id, liveness).await {
            Err(e) if e.is_cancelled() => view,
            comments => {
                view.apply(BlogDetailAction::CommentsLoaded(comments.map_err(|e| e.to_string())))
            }
        }
    }

    pub fn toggle_like(&self, post_id: u32) -> anyhow::Result<LikeMap> {
        Ok(self.db.toggle_like(post_id)?)
    }
}

/// What a page load hands to its view. `None` for a cancelled load, which
/// must leave the view untouched.
fn outcome<T>(result: Result<T, LoadError>, resource: &str) -> Option<Result<T, String>> {
    match result {
        Ok(value) => Some(Ok(value)),
        Err(err) if err.is_cancelled() => None,
        Err(err) => {
            tracing::error!(error = %err, resource, "page load failed");
            Some(Err(err.page_message(resource)))
        }
    }
}
