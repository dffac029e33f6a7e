//! Detail page extraction.
//!
//! # Module Structure
//!
//! - `content`: content container selection, noise removal, linearization
//! - `sanitize`: rule-table cleanup of the linearized text
//! - `media`: content images and file attachments
//!
//! # Usage
//!
//! ```rust
//! use board_extract::{dom, extractor, Options};
//! use url::Url;
//!
//! let doc = dom::parse(r#"<div class="view_cont"><p>본문</p><img src="/a.jpg"></div>"#);
//! let url = Url::parse("https://example.com/view?id=1").unwrap();
//!
//! let body = extractor::extract_post_body(&doc, &url, &Options::default());
//! assert_eq!(body.content, "본문");
//! assert_eq!(body.images, vec!["https://example.com/a.jpg"]);
//! ```

use dom_query::Document;
use url::Url;

use crate::result::FileAttachment;
use crate::Options;

pub mod content;
pub mod media;
pub mod sanitize;

pub use content::{container_text, select_container};
pub use media::{extract_media, Media};
pub use sanitize::{SanitizeRule, Sanitizer};

/// Everything a detail page contributes to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostBody {
    /// Sanitized body text, not yet truncated.
    pub content: String,
    pub images: Vec<String>,
    pub files: Vec<FileAttachment>,
}

/// Extract body text, images and attachments from a detail document.
#[must_use]
pub fn extract_post_body(doc: &Document, page_url: &Url, options: &Options) -> PostBody {
    let container = select_container(doc);
    let raw = container_text(&container);
    let content = options.sanitizer.sanitize(&raw);
    let Media { images, files } = extract_media(doc, &container, page_url);

    PostBody {
        content,
        images,
        files,
    }
}
