//! Per-view UI state.
//!
//! Each view is an immutable record advanced by `apply(action)`, so page
//! navigation, filter changes and async results can be exercised without a
//! front end. Front ends render from the record and never mutate it.

use std::num::NonZeroUsize;

use crate::authors::{distinct_authors, filter_by_author, AuthorFilter};
use crate::constants::PHOTO_PREVIEW_LIMIT;
use crate::likes::LikeMap;
use crate::pagination::{clamp_page, paginate, Page};
use crate::types::{Comment, EnrichedAlbum, EnrichedPost, Photo};

/// Progress of an asynchronous load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// User-facing error message.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

impl<T> From<Result<T, String>> for LoadState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(message) => LoadState::Failed(message),
        }
    }
}

// ---------------------------------------------------------------------------
// Album gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum AlbumsAction {
    Loaded(Result<Vec<EnrichedAlbum>, String>),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    OpenAlbum(u32),
    PhotosLoaded {
        album_id: u32,
        photos: Result<Vec<Photo>, String>,
    },
    CloseAlbum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumsView {
    pub albums: LoadState<Vec<EnrichedAlbum>>,
    pub page: NonZeroUsize,
    pub page_size: NonZeroUsize,
    /// Album whose photo preview is open.
    pub selected_album: Option<u32>,
    pub photos: LoadState<Vec<Photo>>,
}

impl AlbumsView {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            albums: LoadState::Loading,
            page: NonZeroUsize::MIN,
            page_size,
            selected_album: None,
            photos: LoadState::Ready(Vec::new()),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.albums
            .ready()
            .map_or(0, |albums| albums.len().div_ceil(self.page_size.get()))
    }

    /// Albums on the current page; empty while loading or after a failure.
    pub fn current_page(&self) -> Page<'_, EnrichedAlbum> {
        let albums = self.albums.ready().map_or(&[][..], Vec::as_slice);
        paginate(albums, self.page_size, self.page)
    }

    #[must_use]
    pub fn apply(self, action: AlbumsAction) -> Self {
        let total = self.total_pages();
        match action {
            AlbumsAction::Loaded(result) => Self {
                albums: result.into(),
                page: NonZeroUsize::MIN,
                ..self
            },
            AlbumsAction::NextPage => Self {
                page: clamp_page(self.page.get() + 1, total),
                ..self
            },
            AlbumsAction::PreviousPage => Self {
                page: clamp_page(self.page.get() - 1, total),
                ..self
            },
            AlbumsAction::GoToPage(page) => Self {
                page: clamp_page(page, total),
                ..self
            },
            AlbumsAction::OpenAlbum(album_id) => Self {
                selected_album: Some(album_id),
                photos: LoadState::Loading,
                ..self
            },
            AlbumsAction::PhotosLoaded { album_id, photos } => {
                // A late response for an album that is no longer open.
                if self.selected_album != Some(album_id) {
                    return self;
                }
                let photos = match photos {
                    Ok(mut photos) => {
                        photos.truncate(PHOTO_PREVIEW_LIMIT);
                        photos
                    }
                    Err(message) => {
                        tracing::warn!(album_id, error = %message, "photo preview unavailable");
                        Vec::new()
                    }
                };
                Self {
                    photos: LoadState::Ready(photos),
                    ..self
                }
            }
            AlbumsAction::CloseAlbum => Self {
                selected_album: None,
                photos: LoadState::Ready(Vec::new()),
                ..self
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Blog list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum BlogsAction {
    Loaded(Result<Vec<EnrichedPost>, String>),
    LikesLoaded(LikeMap),
    /// Changing the author always returns to page 1.
    SelectAuthor(AuthorFilter),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    ToggleLike(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogsView {
    pub posts: LoadState<Vec<EnrichedPost>>,
    pub author: AuthorFilter,
    pub page: NonZeroUsize,
    pub page_size: NonZeroUsize,
    pub likes: LikeMap,
}

impl BlogsView {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            posts: LoadState::Loading,
            author: AuthorFilter::All,
            page: NonZeroUsize::MIN,
            page_size,
            likes: LikeMap::new(),
        }
    }

    /// Options for the author selector, without the "all" entry.
    pub fn authors(&self) -> Vec<String> {
        self.posts.ready().map_or_else(Vec::new, |posts| distinct_authors(posts))
    }

    pub fn filtered_posts(&self) -> Vec<EnrichedPost> {
        self.posts
            .ready()
            .map_or_else(Vec::new, |posts| filter_by_author(posts, &self.author))
    }

    /// Current page of `filtered`, which must come from [`Self::filtered_posts`].
    pub fn page_of<'a>(&self, filtered: &'a [EnrichedPost]) -> Page<'a, EnrichedPost> {
        paginate(filtered, self.page_size, self.page)
    }

    pub fn total_pages(&self) -> usize {
        self.posts.ready().map_or(0, |posts| {
            posts
                .iter()
                .filter(|p| self.author.matches(p))
                .count()
                .div_ceil(self.page_size.get())
        })
    }

    #[must_use]
    pub fn apply(self, action: BlogsAction) -> Self {
        match action {
            BlogsAction::Loaded(result) => Self {
                posts: result.into(),
                page: NonZeroUsize::MIN,
                ..self
            },
            BlogsAction::LikesLoaded(likes) => Self { likes, ..self },
            BlogsAction::SelectAuthor(author) => Self {
                author,
                page: NonZeroUsize::MIN,
                ..self
            },
            BlogsAction::NextPage => {
                let page = clamp_page(self.page.get() + 1, self.total_pages());
                Self { page, ..self }
            }
            BlogsAction::PreviousPage => {
                let page = clamp_page(self.page.get() - 1, self.total_pages());
                Self { page, ..self }
            }
            BlogsAction::GoToPage(page) => {
                let page = clamp_page(page, self.total_pages());
                Self { page, ..self }
            }
            BlogsAction::ToggleLike(post_id) => Self {
                likes: self.likes.toggle(post_id),
                ..self
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Blog detail
// ---------------------------------------------------------------------------

pub const POST_NOT_FOUND: &str = "Blog post not found";

#[derive(Debug, Clone)]
pub enum BlogDetailAction {
    PostsLoaded(Result<Vec<EnrichedPost>, String>),
    CommentsLoaded(Result<Vec<Comment>, String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDetailView {
    pub post_id: Option<u32>,
    pub post: LoadState<EnrichedPost>,
    pub comments: LoadState<Vec<Comment>>,
}

impl BlogDetailView {
    pub fn new(post_id: u32) -> Self {
        Self {
            post_id: Some(post_id),
            post: LoadState::Loading,
            comments: LoadState::Loading,
        }
    }

    /// Detail view for an id that is not a number. Nothing is fetched.
    pub fn unresolved() -> Self {
        Self {
            post_id: None,
            post: LoadState::Failed(POST_NOT_FOUND.to_string()),
            comments: LoadState::Ready(Vec::new()),
        }
    }

    /// Whether comments should be fetched next.
    pub fn wants_comments(&self) -> bool {
        self.post.ready().is_some() && self.comments.is_loading()
    }

    #[must_use]
    pub fn apply(self, action: BlogDetailAction) -> Self {
        match action {
            BlogDetailAction::PostsLoaded(Ok(posts)) => {
                let post = match posts.into_iter().find(|p| Some(p.id) == self.post_id) {
                    Some(post) => LoadState::Ready(post),
                    None => LoadState::Failed(POST_NOT_FOUND.to_string()),
                };
                Self { post, ..self }
            }
            BlogDetailAction::PostsLoaded(Err(message)) => Self {
                post: LoadState::Failed(message),
                ..self
            },
            BlogDetailAction::CommentsLoaded(result) => {
                let comments = result.unwrap_or_else(|message| {
                    tracing::warn!(post_id = ?self.post_id, error = %message, "comments unavailable");
                    Vec::new()
                });
                Self {
                    comments: LoadState::Ready(comments),
                    ..self
                }
            }
        }
    }
}
