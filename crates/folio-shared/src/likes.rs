//! Liked-post preferences.
//!
//! A [`LikeMap`] is an immutable value: [`LikeMap::toggle`] returns a new map.
//! Its JSON form is an object keyed by post id, e.g. `{"5": true, "7": false}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikeMap {
    entries: BTreeMap<u32, bool>,
}

impl LikeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this map with the flag for `post_id` inverted. An absent entry
    /// counts as not liked, so the first toggle stores `true`.
    #[must_use]
    pub fn toggle(&self, post_id: u32) -> Self {
        let mut entries = self.entries.clone();
        let liked = entries.get(&post_id).copied().unwrap_or(false);
        entries.insert(post_id, !liked);
        Self { entries }
    }

    pub fn is_liked(&self, post_id: u32) -> bool {
        self.entries.get(&post_id).copied().unwrap_or(false)
    }

    /// The stored flag, `None` if the post was never toggled.
    pub fn get(&self, post_id: u32) -> Option<bool> {
        self.entries.get(&post_id).copied()
    }

    pub fn liked_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries
            .iter()
            .filter(|(_, liked)| **liked)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Two maps are equal when they like the same posts; a stored `false` and a
/// missing entry are indistinguishable.
impl PartialEq for LikeMap {
    fn eq(&self, other: &Self) -> bool {
        self.liked_ids().eq(other.liked_ids())
    }
}

impl Eq for LikeMap {}

impl FromIterator<(u32, bool)> for LikeMap {
    fn from_iter<I: IntoIterator<Item = (u32, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
