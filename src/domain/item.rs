//! Content items and the metadata derived from their paths

use chrono::NaiveDateTime;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser as MdParser, Tag, TagEnd};
use serde::Serialize;
use std::path::Path;

/// One source document selected into a collection.
///
/// `input_path`, `slug`, `url` and `title` are fixed when the item is
/// scanned. Only `date` changes afterwards, and only through date tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    input_path: String,
    slug: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDateTime>,
}

impl ContentItem {
    /// Create an item from its `/`-separated path relative to the input directory.
    pub fn new(input_path: &str, path_prefix: &str) -> Self {
        ContentItem {
            input_path: input_path.to_string(),
            slug: slug_for_path(input_path),
            url: url_for_path(input_path, path_prefix),
            title: None,
            date: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    pub(crate) fn set_date(&mut self, date: NaiveDateTime) {
        self.date = Some(date);
    }
}

/// Derive the slug for a content path.
///
/// The slug is the file stem. An `index` file takes its parent directory's
/// name instead (empty at the input root). Date prefixes are kept.
pub fn slug_for_path(input_path: &str) -> String {
    let path = Path::new(input_path);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    if stem != "index" {
        return stem.to_string();
    }

    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Build the public URL of a content path under `path_prefix`.
///
/// `2020/day1.md` becomes `<prefix>2020/day1/`, `2020/index.md` becomes
/// `<prefix>2020/`.
pub fn url_for_path(input_path: &str, path_prefix: &str) -> String {
    let without_ext = match input_path.rsplit_once('.') {
        Some((head, _)) if !head.is_empty() && !head.ends_with('/') => head,
        _ => input_path,
    };

    let trimmed = if without_ext == "index" {
        ""
    } else {
        without_ext.strip_suffix("/index").unwrap_or(without_ext)
    };

    let prefix = path_prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        format!("{}/", prefix)
    } else {
        format!("{}/{}/", prefix, trimmed)
    }
}

/// Extract the text of the first level-1 heading, if any.
pub fn title_from_markdown(content: &str) -> Option<String> {
    let parser = MdParser::new_ext(content, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    let mut in_title = false;
    let mut title = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => {
                in_title = true;
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_title = false;
            }
            Event::Text(text) | Event::Code(text) if in_title => {
                title.push_str(&text);
            }
            _ => {}
        }
    }

    None
}
