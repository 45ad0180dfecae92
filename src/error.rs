use thiserror::Error;

use crate::portfolio::WorkItemId;

/// Everything that can go wrong while wiring or driving the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("no work item with id {0}")]
    UnknownWorkItem(WorkItemId),

    #[error("work item id {0} appears more than once")]
    DuplicateWorkItem(WorkItemId),

    #[error("reveal threshold {0} is outside 0..=1")]
    InvalidThreshold(f64),

    #[error("invalid value {value:?} for setting {key:?}")]
    InvalidSetting { key: String, value: String },

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    ElementType { id: String, expected: &'static str },

    #[error("graphics: {0}")]
    Graphics(String),
}
