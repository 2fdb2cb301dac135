//! Attaching owners to albums and posts.
//!
//! Users are indexed by id once per join, so enriching `n` items against
//! `m` users costs O(n + m) instead of a linear user scan per item.

use std::collections::HashMap;

use crate::error::JoinError;
use crate::types::{OwnedByUser, User, WithUser};

/// Users keyed by id. When the same id appears twice the first record wins.
pub struct UserIndex<'a> {
    by_id: HashMap<u32, &'a User>,
}

impl<'a> UserIndex<'a> {
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        for user in users {
            by_id.entry(user.id).or_insert(user);
        }
        Self { by_id }
    }

    pub fn get(&self, id: u32) -> Option<&'a User> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Pair every item with its owning user, preserving input order.
///
/// Fails on the first item whose owner is absent from `users`; no partial
/// output is returned.
pub fn enrich<T>(items: &[T], users: &[User]) -> Result<Vec<WithUser<T>>, JoinError>
where
    T: OwnedByUser + Clone,
{
    let index = UserIndex::new(users);

    let enriched = items
        .iter()
        .map(|item| {
            let user = index.get(item.owner_id()).ok_or(JoinError::MissingUser {
                item_id: item.id(),
                user_id: item.owner_id(),
            })?;
            Ok(WithUser {
                item: item.clone(),
                user: user.clone(),
            })
        })
        .collect::<Result<Vec<_>, JoinError>>()?;

    tracing::debug!(items = enriched.len(), users = index.len(), "joined items with owners");

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Album, Post};

    fn user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.into(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn album(id: u32, user_id: u32) -> Album {
        Album {
            id,
            user_id,
            title: format!("album {id}"),
        }
    }

    #[test]
    fn attaches_matching_owner_in_order() {
        let users = vec![user(1, "Ann"), user(2, "Bob")];
        let albums = vec![album(10, 2), album(11, 1), album(12, 2)];

        let enriched = enrich(&albums, &users).unwrap();

        assert_eq!(enriched.len(), albums.len());
        for (out, src) in enriched.iter().zip(&albums) {
            assert_eq!(out.item, *src);
            assert_eq!(out.user.id, src.user_id);
        }
        assert_eq!(enriched[0].user.name, "Bob");
    }

    #[test]
    fn empty_items_yield_empty_output() {
        let users = vec![user(1, "Ann")];
        let posts: Vec<Post> = Vec::new();
        assert!(enrich(&posts, &users).unwrap().is_empty());
        assert!(enrich(&posts, &[]).unwrap().is_empty());
    }

    #[test]
    fn missing_owner_is_an_error() {
        let users = vec![user(1, "Ann")];
        let albums = vec![album(10, 1), album(11, 9)];

        let err = enrich(&albums, &users).unwrap_err();
        assert_eq!(
            err,
            JoinError::MissingUser {
                item_id: 11,
                user_id: 9
            }
        );
    }

    #[test]
    fn first_duplicate_user_wins() {
        let users = vec![user(1, "First"), user(1, "Second")];
        let enriched = enrich(&[album(1, 1)], &users).unwrap();
        assert_eq!(enriched[0].user.name, "First");

        let index = UserIndex::new(&users);
        assert_eq!(index.len(), 1);
    }
}
