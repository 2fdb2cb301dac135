//! Persistence of the liked-post map.
//!
//! The map is read once when a front end starts and rewritten wholesale on
//! every toggle. Two processes toggling at the same time race on the whole
//! map; the last write wins.

use folio_shared::constants::LIKES_STORAGE_KEY;
use folio_shared::LikeMap;

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Stored likes. A missing or unreadable value counts as "no likes yet".
    pub fn load_likes(&self) -> Result<LikeMap> {
        let Some(json) = self.get_value(LIKES_STORAGE_KEY)? else {
            return Ok(LikeMap::new());
        };

        match LikeMap::from_json(&json) {
            Ok(likes) => Ok(likes),
            Err(e) => {
                tracing::warn!(error = %e, key = LIKES_STORAGE_KEY, "ignoring corrupt like map");
                Ok(LikeMap::new())
            }
        }
    }

    pub fn save_likes(&self, likes: &LikeMap) -> Result<()> {
        let json = likes.to_json()?;
        self.set_value(LIKES_STORAGE_KEY, &json)
    }

    /// Read-modify-write a single like and return the new map.
    pub fn toggle_like(&self, post_id: u32) -> Result<LikeMap> {
        let likes = self.load_likes()?.toggle(post_id);
        self.save_likes(&likes)?;

        tracing::info!(post_id, liked = likes.is_liked(post_id), "like toggled");

        Ok(likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("likes.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn empty_store_has_no_likes() {
        let (_dir, db) = open();
        assert!(db.load_likes().unwrap().is_empty());
    }

    #[test]
    fn toggle_twice_persists_false() {
        let (_dir, db) = open();

        let likes = db.toggle_like(5).unwrap();
        assert_eq!(likes.get(5), Some(true));
        assert_eq!(db.get_value("postLikes").unwrap().as_deref(), Some(r#"{"5":true}"#));

        let likes = db.toggle_like(5).unwrap();
        assert_eq!(likes.get(5), Some(false));
        assert_eq!(db.get_value("postLikes").unwrap().as_deref(), Some(r#"{"5":false}"#));
    }

    #[test]
    fn likes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.toggle_like(3).unwrap();
            db.toggle_like(8).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        let likes = db.load_likes().unwrap();
        assert_eq!(likes.liked_ids().collect::<Vec<_>>(), vec![3, 8]);
    }

    #[test]
    fn corrupt_value_reads_as_empty() {
        let (_dir, db) = open();
        db.set_value("postLikes", "{not json").unwrap();

        assert!(db.load_likes().unwrap().is_empty());

        // The next toggle replaces the corrupt blob.
        let likes = db.toggle_like(1).unwrap();
        assert!(likes.is_liked(1));
        assert_eq!(db.load_likes().unwrap(), likes);
    }
}
