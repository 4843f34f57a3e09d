//! Data models for the blog backend.

mod post;

pub use post::*;
