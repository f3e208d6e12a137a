// src/page.rs
//! Read-only access to a rendered page.
//!
//! The extraction heuristic never talks to a browser directly; it goes
//! through these two traits so tests can run it against synthetic trees.
//! `browser::BrowserPage` is the live implementation.

use std::error::Error;
use std::fmt;

/// Failure modes of a page accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The requested node does not exist (e.g. walked past the document root).
    NotFound,
    /// The session itself misbehaved (stale handle, disconnect, bad reply).
    Session(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotFound => write!(f, "no such element"),
            PageError::Session(msg) => write!(f, "page session error: {msg}"),
        }
    }
}

impl Error for PageError {}

/// Handle to one rendered element.
pub trait PageNode: Sized {
    /// Element `levels` ancestors up. `NotFound` when the chain is shorter.
    fn ancestor(&self, levels: usize) -> Result<Self, PageError>;

    /// Aggregated rendered text of the element and its descendants.
    fn text(&self) -> Result<String, PageError>;
}

/// A loaded page, assumed stable for the duration of one scan.
pub trait Page {
    type Node: PageNode;

    /// All elements whose own text contains `marker`, in query order.
    /// An empty result is normal, not an error.
    fn find_text_nodes(&self, marker: &str) -> Result<Vec<Self::Node>, PageError>;

    /// URL of the page as currently loaded.
    fn current_url(&self) -> String;
}
