//! Navigation table.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Albums,
    Blogs,
    /// `None` when the id segment is not a number; such a post never exists.
    BlogDetail(Option<u32>),
    NotFound,
}

impl Route {
    /// Resolve a path such as `/blogs/3`. Unknown paths resolve to
    /// [`Route::NotFound`]; `/blogs/abc` still opens the detail view.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["albums"] => Route::Albums,
            ["blogs"] => Route::Blogs,
            ["blogs", id] => Route::BlogDetail(id.parse().ok()),
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Albums => f.write_str("/albums"),
            Route::Blogs => f.write_str("/blogs"),
            Route::BlogDetail(Some(id)) => write!(f, "/blogs/{id}"),
            Route::BlogDetail(None) => f.write_str("/blogs/NaN"),
            Route::NotFound => f.write_str("/404"),
        }
    }
}
