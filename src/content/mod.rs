//! Content module - handles posts, post documents, and content processing

mod frontmatter;
pub mod loader;
mod markdown;
pub mod normalize;
mod post;

pub use frontmatter::{FrontMatter, FrontMatterValue};
pub use loader::{load_document, load_posts, LoadError};
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostDocument, DEFAULT_TITLE};
