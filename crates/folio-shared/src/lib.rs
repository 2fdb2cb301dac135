//! # folio-shared
//!
//! Domain types and the pure client-side routines of the Folio viewer:
//! joining albums and posts with their owners, paginating, filtering by
//! author, toggling likes, and the per-view state reducers.

pub mod authors;
pub mod constants;
pub mod error;
pub mod join;
pub mod likes;
pub mod pagination;
pub mod route;
pub mod types;
pub mod view;

pub use authors::{distinct_authors, filter_by_author, AuthorFilter};
pub use error::JoinError;
pub use join::{enrich, UserIndex};
pub use likes::LikeMap;
pub use pagination::{clamp_page, paginate, Page};
pub use route::Route;
pub use types::*;
