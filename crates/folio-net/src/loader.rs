//! Page loaders.
//!
//! A page load fetches its two collections concurrently, waits for both, and
//! only then joins them. If either fetch fails the load fails as a whole. The
//! caller hands in a [`Liveness`] token tied to the view that asked for the
//! data; a load whose view has gone away by the time the data arrives is
//! discarded with [`LoadError::Cancelled`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use folio_shared::{enrich, Comment, EnrichedAlbum, EnrichedPost, Photo};
use futures::future::try_join;
use tracing::{debug, info};

use crate::client::DataSource;
use crate::error::LoadError;

/// Shared flag marking whether the view that started a load is still active.
#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the view as gone. Every clone observes the change.
    pub fn revoke(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    fn check(&self) -> Result<(), LoadError> {
        if self.is_live() {
            Ok(())
        } else {
            debug!("view went away, discarding loaded data");
            Err(LoadError::Cancelled)
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Albums joined with their owners.
pub async fn load_albums<S: DataSource>(
    source: &S,
    liveness: &Liveness,
) -> Result<Vec<EnrichedAlbum>, LoadError> {
    let (albums, users) = try_join(source.list_albums(), source.list_users()).await?;
    liveness.check()?;

    let albums = enrich(&albums, &users)?;
    info!(count = albums.len(), "albums loaded");
    Ok(albums)
}

/// Posts joined with their owners.
pub async fn load_posts<S: DataSource>(
    source: &S,
    liveness: &Liveness,
) -> Result<Vec<EnrichedPost>, LoadError> {
    let (posts, users) = try_join(source.list_posts(), source.list_users()).await?;
    liveness.check()?;

    let posts = enrich(&posts, &users)?;
    info!(count = posts.len(), "posts loaded");
    Ok(posts)
}

/// Photos of one album. Trimming to the preview size is left to the view.
pub async fn load_photo_preview<S: DataSource>(
    source: &S,
    album_id: u32,
    liveness: &Liveness,
) -> Result<Vec<Photo>, LoadError> {
    let photos = source.list_photos_by_album(album_id).await?;
    liveness.check()?;
    Ok(photos)
}

pub async fn load_comments<S: DataSource>(
    source: &S,
    post_id: u32,
    liveness: &Liveness,
) -> Result<Vec<Comment>, LoadError> {
    let comments = source.list_comments_by_post(post_id).await?;
    liveness.check()?;
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_shared::{Album, JoinError, Post, User};
    use tokio::sync::Barrier;

    use super::*;
    use crate::error::FetchError;

    /// In-memory API. Both list calls rendezvous on `barrier` when set, so a
    /// sequential loader would never finish.
    #[derive(Default)]
    struct Fixture {
        users: Vec<User>,
        albums: Vec<Album>,
        posts: Vec<Post>,
        photos: Vec<Photo>,
        comments: Vec<Comment>,
        fail_users: bool,
        barrier: Option<Barrier>,
        revoke_on_fetch: Option<Liveness>,
    }

    impl Fixture {
        async fn rendezvous(&self) {
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            if let Some(liveness) = &self.revoke_on_fetch {
                liveness.revoke();
            }
        }
    }

    fn failure(url: &str) -> FetchError {
        FetchError::Status {
            url: url.into(),
            status: 500,
        }
    }

    impl DataSource for Fixture {
        async fn list_users(&self) -> Result<Vec<User>, FetchError> {
            self.rendezvous().await;
            if self.fail_users {
                return Err(failure("/users"));
            }
            Ok(self.users.clone())
        }

        async fn get_user(&self, id: u32) -> Result<User, FetchError> {
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(|| failure(&format!("/users/{id}")))
        }

        async fn list_albums(&self) -> Result<Vec<Album>, FetchError> {
            self.rendezvous().await;
            Ok(self.albums.clone())
        }

        async fn list_photos(&self) -> Result<Vec<Photo>, FetchError> {
            Ok(self.photos.clone())
        }

        async fn list_photos_by_album(&self, album_id: u32) -> Result<Vec<Photo>, FetchError> {
            self.rendezvous().await;
            Ok(self
                .photos
                .iter()
                .filter(|p| p.album_id == album_id)
                .cloned()
                .collect())
        }

        async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
            self.rendezvous().await;
            Ok(self.posts.clone())
        }

        async fn list_comments_by_post(&self, post_id: u32) -> Result<Vec<Comment>, FetchError> {
            Ok(self
                .comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect())
        }
    }

    fn user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.into(),
            username: name.to_lowercase(),
            email: String::new(),
        }
    }

    fn post(id: u32, user_id: u32) -> Post {
        Post {
            id,
            user_id,
            title: format!("post {id}"),
            body: String::new(),
        }
    }

    fn fixture() -> Fixture {
        Fixture {
            users: vec![user(1, "Ann"), user(2, "Bob")],
            albums: (1..=12)
                .map(|id| Album {
                    id,
                    user_id: id % 2 + 1,
                    title: format!("album {id}"),
                })
                .collect(),
            posts: vec![post(1, 1), post(2, 2), post(3, 1)],
            photos: (1..=8)
                .map(|id| Photo {
                    id,
                    album_id: if id <= 6 { 1 } else { 2 },
                    title: String::new(),
                    url: String::new(),
                    thumbnail_url: String::new(),
                })
                .collect(),
            comments: vec![Comment {
                id: 1,
                post_id: 3,
                name: "c".into(),
                email: "c@example.com".into(),
                body: "nice".into(),
            }],
            ..Fixture::default()
        }
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let source = Fixture {
            barrier: Some(Barrier::new(2)),
            ..fixture()
        };

        let albums = tokio::time::timeout(
            Duration::from_secs(2),
            load_albums(&source, &Liveness::new()),
        )
        .await
        .expect("both fetches must be in flight together")
        .unwrap();

        assert_eq!(albums.len(), 12);
        for album in &albums {
            assert_eq!(album.user.id, album.user_id);
        }
    }

    #[tokio::test]
    async fn test_posts_are_joined_in_order() {
        let posts = load_posts(&fixture(), &Liveness::new()).await.unwrap();
        let authors: Vec<&str> = posts.iter().map(|p| p.user.name.as_str()).collect();
        assert_eq!(authors, vec!["Ann", "Bob", "Ann"]);
    }

    #[tokio::test]
    async fn test_one_failed_fetch_fails_the_page() {
        let source = Fixture {
            fail_users: true,
            ..fixture()
        };
        let err = load_posts(&source, &Liveness::new()).await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch(FetchError::Status { status: 500, .. })));
        assert_eq!(
            err.page_message("posts"),
            "Failed to fetch posts: /users responded with HTTP 500"
        );
    }

    #[tokio::test]
    async fn test_missing_owner_is_reported() {
        let mut source = fixture();
        source.posts.push(post(4, 9));

        let err = load_posts(&source, &Liveness::new()).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Join(JoinError::MissingUser {
                item_id: 4,
                user_id: 9
            })
        ));
    }

    #[tokio::test]
    async fn test_results_for_a_gone_view_are_discarded() {
        let liveness = Liveness::new();
        let source = Fixture {
            revoke_on_fetch: Some(liveness.clone()),
            ..fixture()
        };

        let err = load_albums(&source, &liveness).await.unwrap_err();
        assert!(err.is_cancelled());

        let err = load_photo_preview(&source, 1, &liveness).await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_photo_preview_and_comments() {
        let source = fixture();
        let liveness = Liveness::new();

        let photos = load_photo_preview(&source, 1, &liveness).await.unwrap();
        assert_eq!(photos.len(), 6);

        let comments = load_comments(&source, 3, &liveness).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert!(load_comments(&source, 1, &liveness).await.unwrap().is_empty());

        liveness.revoke();
        assert!(load_comments(&source, 3, &liveness).await.unwrap_err().is_cancelled());
    }
}
