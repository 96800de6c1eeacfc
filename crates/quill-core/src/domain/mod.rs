//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, POST_KEY_PREFIX, Post, PostKey};
