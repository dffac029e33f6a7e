//! Image and attachment extraction.
//!
//! Images come from known content-image selectors, or from the content
//! container when none match. Attachments are gathered by three strategies
//! whose results are unioned by URL: known file areas, links to document or
//! image files anywhere on the page, and values next to an "첨부파일" label.
//! Attachments that are really images are then folded into the image list.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use indexmap::{IndexMap, IndexSet};
use tracing::trace;
use url::Url;

use crate::dom;
use crate::result::FileAttachment;
use crate::selector::content::ATTACHMENT_LABELS;
use crate::selector::media::{
    ATTACHMENT_LABEL_SELECTOR, DOCUMENT_EXTENSIONS, FILE_AREA_SELECTORS, FILE_NOISE_LABELS,
    GENERIC_FILE_NAMES, IMAGE_EXTENSIONS, IMAGE_SELECTORS, JUNK_IMAGE_KEYWORDS, SIGNATURE_KEYS,
};
use crate::selector::utils::contains_any_ignore_case;
use crate::url_utils::{
    extract_filename, has_extension, name_has_extension, resolve_href,
};

/// Images and attachments of one post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media {
    pub images: Vec<String>,
    pub files: Vec<FileAttachment>,
}

/// Insertion-ordered image URLs, unique by URL.
#[derive(Debug, Default)]
struct ImageSet {
    urls: IndexSet<String>,
    signatures: HashSet<Vec<(String, String)>>,
}

impl ImageSet {
    /// Add a content image unless it is decoration or already present.
    fn insert(&mut self, url: &Url) -> bool {
        let url_str = url.as_str();
        if is_junk_image(url_str) || self.urls.contains(url_str) {
            return false;
        }

        let signature = file_signature(url);
        if !signature.is_empty() {
            self.signatures.insert(signature);
        }
        self.urls.insert(url_str.to_string())
    }

    /// Add an image attachment unless a collected image already points at
    /// the same stored file.
    fn insert_attachment(&mut self, url: &Url) -> bool {
        let signature = file_signature(url);
        if !signature.is_empty() && self.signatures.contains(&signature) {
            trace!(url = url.as_str(), "attachment shares an image's file signature");
            return false;
        }
        self.insert(url)
    }

    fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    fn into_vec(self) -> Vec<String> {
        self.urls.into_iter().collect()
    }
}

/// Sorted `(key, value)` pairs of the file-identifying query parameters.
///
/// Keys are lowercased, so `fileSn=5` and `filesn=5` name the same file.
fn file_signature(url: &Url) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, v)| !v.is_empty() && SIGNATURE_KEYS.iter().any(|s| s.eq_ignore_ascii_case(k)))
        .map(|(k, v)| (k.to_ascii_lowercase(), v.into_owned()))
        .collect();
    pairs.sort();
    pairs.dedup();
    pairs
}

/// Decoration images: logos, icons, buttons, banners, QR codes.
#[must_use]
pub fn is_junk_image(url: &str) -> bool {
    contains_any_ignore_case(url, JUNK_IMAGE_KEYWORDS)
}

/// Extract images and attachments from a post document.
///
/// `container` is the content element chosen for the body text; its images
/// are used when no known image selector matches.
#[must_use]
pub fn extract_media(doc: &Document, container: &Selection, page_url: &Url) -> Media {
    let body = doc.select("body");

    let mut images = collect_images(&body, container, page_url);
    let files = collect_files(&body, page_url);

    for file in &files {
        if !(is_image_link(&file.url) || name_has_extension(&file.name, IMAGE_EXTENSIONS)) {
            continue;
        }
        if let Ok(url) = Url::parse(&file.url) {
            images.insert_attachment(&url);
        }
    }

    Media {
        images: images.into_vec(),
        files,
    }
}

fn is_image_link(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| has_extension(&u, IMAGE_EXTENSIONS))
}

/// Resolved image source: `src` unless it is an inline `data:` placeholder,
/// else `data-src`.
fn image_source(img: &Selection, page_url: &Url) -> Option<Url> {
    dom::non_empty_attribute(img, "src")
        .filter(|src| !src.to_ascii_lowercase().starts_with("data:"))
        .or_else(|| dom::non_empty_attribute(img, "data-src"))
        .and_then(|src| resolve_href(&src, page_url))
}

fn collect_images(body: &Selection, container: &Selection, page_url: &Url) -> ImageSet {
    let mut images = ImageSet::default();

    for selector in IMAGE_SELECTORS {
        for img in dom::query_all(body, selector) {
            if let Some(url) = image_source(&img, page_url) {
                images.insert(&url);
            }
        }
    }

    if images.is_empty() {
        for img in dom::query_all(container, "img") {
            if let Some(url) = image_source(&img, page_url) {
                images.insert(&url);
            }
        }
    }

    images
}

fn collect_files(body: &Selection, page_url: &Url) -> Vec<FileAttachment> {
    let mut files: IndexMap<String, FileAttachment> = IndexMap::new();
    let mut add = |file: FileAttachment| {
        files.entry(file.url.clone()).or_insert(file);
    };

    // Known attachment areas
    for selector in FILE_AREA_SELECTORS {
        for area in dom::query_all(body, selector) {
            for anchor in dom::query_all(&area, "a") {
                if let Some(file) = attachment_from_anchor(&anchor, page_url) {
                    add(file);
                }
            }
        }
    }

    // Links to files anywhere on the page
    for anchor in dom::query_all(body, "a") {
        let Some(url) =
            dom::get_attribute(&anchor, "href").and_then(|href| resolve_href(&href, page_url))
        else {
            continue;
        };
        if has_extension(&url, DOCUMENT_EXTENSIONS) || has_extension(&url, IMAGE_EXTENSIONS) {
            if let Some(file) = attachment_from_anchor(&anchor, page_url) {
                add(file);
            }
        }
    }

    // Values next to an attachment label
    for label in dom::query_all(body, ATTACHMENT_LABEL_SELECTOR) {
        let own = dom::own_text(&label);
        if !ATTACHMENT_LABELS.iter().any(|l| own.contains(l)) {
            continue;
        }
        let Some(value) = dom::next_element_sibling(&label)
            .or_else(|| dom::parent_element(&label).and_then(|p| dom::next_element_sibling(&p)))
        else {
            continue;
        };
        for anchor in dom::query_all(&value, "a") {
            if let Some(file) = attachment_from_anchor(&anchor, page_url) {
                add(file);
            }
        }
    }

    files.into_values().collect()
}

/// Build an attachment from a download anchor.
///
/// Viewer and preview links are dropped. Anchors labelled only "download"
/// or "file" take their name from the `title` attribute, then the parent's
/// text without links and buttons, then the URL's file name.
fn attachment_from_anchor(anchor: &Selection, page_url: &Url) -> Option<FileAttachment> {
    let url = dom::get_attribute(anchor, "href").and_then(|href| resolve_href(&href, page_url))?;

    let text = dom::text(anchor);
    if contains_any_ignore_case(&text, FILE_NOISE_LABELS) {
        trace!(%url, "skipping viewer link");
        return None;
    }

    let name = if is_generic_name(&text) {
        dom::non_empty_attribute(anchor, "title")
            .filter(|t| !is_generic_name(t))
            .or_else(|| parent_label(anchor))
            .unwrap_or_else(|| url_file_name(&url))
    } else {
        text
    };

    Some(FileAttachment {
        name,
        url: url.into(),
    })
}

/// Empty, or only says "download" / "file".
fn is_generic_name(text: &str) -> bool {
    let inner = text.trim().trim_matches(|c: char| "[]()".contains(c) || c.is_whitespace());
    inner.is_empty() || GENERIC_FILE_NAMES.iter().any(|g| g.eq_ignore_ascii_case(inner))
}

/// Text of the anchor's parent with links and buttons removed.
fn parent_label(anchor: &Selection) -> Option<String> {
    let parent = dom::parent_element(anchor)?;
    let copy = dom::clone_contents(&parent);
    let root = copy.select("body");
    dom::remove(&root.select("a, button"));

    let text = dom::text(&root);
    (!is_generic_name(&text)).then_some(text)
}

fn url_file_name(url: &Url) -> String {
    let name = extract_filename(url.as_str());
    if name.is_empty() {
        url.to_string()
    } else {
        name
    }
}
