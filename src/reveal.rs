//! One-way "in view" bookkeeping for a group of observed elements.

use crate::error::SiteError;

/// Browsers report ratios a hair under the threshold they just crossed.
const RATIO_SLACK: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealChange {
    Revealed,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Result<Self, SiteError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SiteError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            revealed: Vec::new(),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Registers a new element and returns its slot.
    pub fn track(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Feeds one intersection report. Only the first qualifying report for a
    /// slot yields `Revealed`; leaving the viewport never clears the flag.
    pub fn report(
        &mut self,
        slot: usize,
        is_intersecting: bool,
        visible_ratio: f64,
    ) -> RevealChange {
        let Some(flag) = self.revealed.get_mut(slot) else {
            return RevealChange::Unchanged;
        };
        if *flag || !is_intersecting || visible_ratio + RATIO_SLACK < self.threshold {
            return RevealChange::Unchanged;
        }
        *flag = true;
        RevealChange::Revealed
    }

    pub fn is_revealed(&self, slot: usize) -> bool {
        self.revealed.get(slot).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
