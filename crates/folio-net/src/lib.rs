// Read-only access to the demo REST API and the page loaders built on it.

pub mod client;
pub mod error;
pub mod loader;

pub use client::{ApiClient, DataSource};
pub use error::{FetchError, LoadError};
pub use loader::{load_albums, load_comments, load_photo_preview, load_posts, Liveness};
