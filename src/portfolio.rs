//! The static work showcase and the markup each grid card is built from.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::config::StaggerConfig;
use crate::error::SiteError;
use crate::escape::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkItemId(pub u32);

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub title: String,
    pub thumbnail_path: String,
    pub video_embed_url: String,
}

impl WorkItem {
    pub fn new(id: u32, title: &str, thumbnail_path: &str, video_embed_url: &str) -> Self {
        Self {
            id: WorkItemId(id),
            title: title.to_owned(),
            thumbnail_path: thumbnail_path.to_owned(),
            video_embed_url: video_embed_url.to_owned(),
        }
    }

    /// Embed source with autoplay switched on.
    pub fn autoplay_src(&self) -> String {
        format!("{}?autoplay=1", self.video_embed_url)
    }
}

const DEMO_EMBED: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Ordered, immutable set of work items. Cloning shares the same items.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    items: Rc<[WorkItem]>,
}

impl Portfolio {
    /// Rejects data sets that reuse an id.
    pub fn new(items: Vec<WorkItem>) -> Result<Self, SiteError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(SiteError::DuplicateWorkItem(item.id));
            }
        }
        Ok(Self { items: items.into() })
    }

    /// The studio's published reel.
    pub fn showcase() -> Self {
        Self {
            items: vec![
                WorkItem::new(
                    1,
                    "Cinematic Short — Raat Ka Safar",
                    "media/thumb1.jpg",
                    DEMO_EMBED,
                ),
                WorkItem::new(
                    2,
                    "Game Trailer — Moksha Quest",
                    "media/thumb2.jpg",
                    DEMO_EMBED,
                ),
                WorkItem::new(3, "Ad Spot — Bijli", "media/thumb3.jpg", DEMO_EMBED),
                WorkItem::new(4, "VFX Reel — City Fall", "media/thumb4.jpg", DEMO_EMBED),
            ]
            .into(),
        }
    }

    pub fn get(&self, id: WorkItemId) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One plan per item, in data-set order.
    pub fn card_plans(&self, stagger: &StaggerConfig) -> Vec<CardPlan> {
        self.iter()
            .enumerate()
            .map(|(index, item)| CardPlan {
                id: item.id,
                markup: card_markup(item),
                css_delay: stagger.css_delay(index),
                reveal_after_ms: stagger.reveal_after_ms(index),
            })
            .collect()
    }
}

/// Everything the grid needs to materialise one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlan {
    pub id: WorkItemId,
    pub markup: String,
    /// Value for the card's `--delay` custom property.
    pub css_delay: String,
    pub reveal_after_ms: u32,
}

/// Inner HTML of a `.work-card`.
pub fn card_markup(item: &WorkItem) -> String {
    format!(
        concat!(
            r#"<img src="{src}" alt="{title}" loading="lazy">"#,
            r#"<div class="wc-body"><h4>{title}</h4><p>Click to play</p></div>"#,
        ),
        src = escape_html(&item.thumbnail_path),
        title = escape_html(&item.title),
    )
}
