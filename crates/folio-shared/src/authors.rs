use std::collections::BTreeSet;
use std::fmt;

use crate::constants::ALL_AUTHORS;
use crate::types::EnrichedPost;

/// Author selector value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorFilter {
    #[default]
    All,
    /// Exact, case-sensitive author display name.
    Name(String),
}

impl AuthorFilter {
    pub fn matches(&self, post: &EnrichedPost) -> bool {
        match self {
            AuthorFilter::All => true,
            AuthorFilter::Name(name) => post.user.name == *name,
        }
    }
}

impl From<&str> for AuthorFilter {
    fn from(value: &str) -> Self {
        if value == ALL_AUTHORS {
            AuthorFilter::All
        } else {
            AuthorFilter::Name(value.to_string())
        }
    }
}

impl fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorFilter::All => f.write_str(ALL_AUTHORS),
            AuthorFilter::Name(name) => f.write_str(name),
        }
    }
}

/// Distinct author names, sorted ascending.
pub fn distinct_authors(posts: &[EnrichedPost]) -> Vec<String> {
    posts
        .iter()
        .map(|post| post.user.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Posts written by the selected author, in their original order.
pub fn filter_by_author(posts: &[EnrichedPost], author: &AuthorFilter) -> Vec<EnrichedPost> {
    match author {
        AuthorFilter::All => posts.to_vec(),
        AuthorFilter::Name(_) => posts
            .iter()
            .filter(|post| author.matches(post))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Post, User, WithUser};

    fn post(id: u32, author: &str) -> EnrichedPost {
        WithUser {
            item: Post {
                id,
                user_id: author.len() as u32,
                title: format!("post {id}"),
                body: String::new(),
            },
            user: User {
                id: author.len() as u32,
                name: author.into(),
                username: author.to_lowercase(),
                email: String::new(),
            },
        }
    }

    #[test]
    fn authors_are_distinct_and_sorted() {
        let posts = vec![post(1, "Ann"), post(2, "Bob"), post(3, "Ann")];
        assert_eq!(distinct_authors(&posts), vec!["Ann", "Bob"]);

        let posts = vec![post(1, "bob"), post(2, "Cid"), post(3, "Ann"), post(4, "Cid")];
        // Ordinary string order: uppercase sorts before lowercase.
        assert_eq!(distinct_authors(&posts), vec!["Ann", "Cid", "bob"]);
    }

    #[test]
    fn filter_keeps_exact_matches_in_order() {
        let posts = vec![post(1, "Ann"), post(2, "Bob"), post(3, "Ann")];

        let ann = filter_by_author(&posts, &AuthorFilter::from("Ann"));
        let ids: Vec<u32> = ann.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(filter_by_author(&posts, &"ann".into()).is_empty());
        assert!(filter_by_author(&posts, &"An".into()).is_empty());
    }

    #[test]
    fn all_is_identity() {
        let posts = vec![post(1, "Ann"), post(2, "Bob")];
        assert_eq!(filter_by_author(&posts, &AuthorFilter::All), posts);
        assert_eq!(AuthorFilter::from("all"), AuthorFilter::All);
        assert_eq!(AuthorFilter::All.to_string(), "all");
    }
}
