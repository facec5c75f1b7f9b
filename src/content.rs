//! Turning generated post text into renderable pieces.

use crate::types::GeneratedPost;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SLIDE_DELIMITER: &str = "---";
pub const EMPHASIS_DELIMITER: &str = "**";
const HEADING_MARKER: char = '【';

static EMPHASIS_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideLine {
    pub is_heading: bool,
    pub segments: Vec<Segment>,
}

/// Splits post content into slides, dropping blank segments.
pub fn split_slides(content: &str) -> Vec<String> {
    content
        .split(SLIDE_DELIMITER)
        .map(str::trim)
        .filter(|slide| !slide.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits one line into plain and emphasized segments.
///
/// Spans pair up left to right; a leftover `**` stays literal.
pub fn parse_emphasis(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for captures in EMPHASIS_SPAN.captures_iter(line) {
        let (Some(span), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if span.start() > cursor {
            segments.push(Segment::plain(&line[cursor..span.start()]));
        }
        segments.push(Segment::emphasized(inner.as_str()));
        cursor = span.end();
    }
    if cursor < line.len() {
        segments.push(Segment::plain(&line[cursor..]));
    }
    segments
}

/// Lays out a slide line by line. The first line, and any line carrying `【`, is a heading.
pub fn render_slide(slide: &str) -> Vec<SlideLine> {
    slide
        .split('\n')
        .enumerate()
        .map(|(index, line)| SlideLine {
            is_heading: index == 0 || line.contains(HEADING_MARKER),
            segments: parse_emphasis(line),
        })
        .collect()
}

pub fn display_tag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}

/// "Step n" header and "n / total" counter for a zero-based slide index.
pub fn slide_header(index: usize, total: usize) -> (String, String) {
    (
        format!("Step {}", index + 1),
        format!("{} / {}", index + 1, total),
    )
}

/// Title, body and tags as one copyable document.
pub fn assemble_document(post: &GeneratedPost) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        post.title,
        post.content.replace(SLIDE_DELIMITER, "\n"),
        post.tags.join(" ")
    )
}
