use thiserror::Error;

/// Failure of the user join.
///
/// The remote API is trusted to return an owner for every album and post;
/// when it does not, the join refuses to invent one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    #[error("no user with id {user_id} (owner of item {item_id})")]
    MissingUser { item_id: u32, user_id: u32 },
}

