//! Records served by the remote API.
//!
//! Field names follow the API's camelCase wire format. Extra fields the API
//! sends (addresses, companies, ...) are ignored on deserialization.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    /// Display name, used as the author label.
    pub name: String,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Album / Photo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u32,
    pub album_id: u32,
    pub title: String,
    /// Full-size image.
    pub url: String,
    pub thumbnail_url: String,
}

// ---------------------------------------------------------------------------
// Post / Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Body cut to at most `max_chars` characters, with `...` appended when
    /// anything was cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.body.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.body[..cut]),
            None => self.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub post_id: u32,
    /// Commenter name.
    pub name: String,
    pub email: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Ownership and enrichment
// ---------------------------------------------------------------------------

/// A record that belongs to a [`User`] through a foreign key.
pub trait OwnedByUser {
    fn id(&self) -> u32;
    fn owner_id(&self) -> u32;
}

impl OwnedByUser for Album {
    fn id(&self) -> u32 {
        self.id
    }

    fn owner_id(&self) -> u32 {
        self.user_id
    }
}

impl OwnedByUser for Post {
    fn id(&self) -> u32 {
        self.id
    }

    fn owner_id(&self) -> u32 {
        self.user_id
    }
}

/// A record together with the user that owns it.
///
/// Serializes flat, i.e. the item's own fields plus a `user` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WithUser<T> {
    #[serde(flatten)]
    pub item: T,
    pub user: User,
}

impl<T> Deref for WithUser<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

pub type EnrichedAlbum = WithUser<Album>;
pub type EnrichedPost = WithUser<Post>;
