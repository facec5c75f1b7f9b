//! View model consumed by the phone preview.

use crate::content::{SlideLine, display_tag, render_slide, split_slides};
use crate::types::GeneratedPost;

/// Which generated image is the current cover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSelection {
    index: usize,
    seen: Vec<String>,
}

impl ImageSelection {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Resets to the first image whenever the image sequence changes.
    pub fn sync(&mut self, images: &[String]) {
        if self.seen.as_slice() != images {
            self.seen = images.to_vec();
            self.index = 0;
        }
    }

    /// Out-of-range indices leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.seen.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a String> {
        images.get(self.index)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSlide {
    /// Raw slide text, used for per-slide copy.
    pub text: String,
    pub lines: Vec<SlideLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostPreview {
    pub title: String,
    pub slides: Vec<RenderedSlide>,
    pub tags: Vec<String>,
    pub cover: Option<String>,
    pub image_count: usize,
}

impl PostPreview {
    pub fn build(post: &GeneratedPost, images: &[String], selection: &ImageSelection) -> Self {
        let slides = split_slides(&post.content)
            .into_iter()
            .map(|text| RenderedSlide {
                lines: render_slide(&text),
                text,
            })
            .collect();

        Self {
            title: post.title.clone(),
            slides,
            tags: post.tags.iter().map(|tag| display_tag(tag)).collect(),
            cover: selection.current(images).cloned(),
            image_count: images.len(),
        }
    }
}
