//! Page wiring constants. Everything here has a sensible default; a page can
//! override a few values through `data-*` attributes on `<body>`.

use log::LevelFilter;

use crate::error::SiteError;
use crate::portfolio::WorkItemId;

/// DOM ids the controllers bind to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub menu_button: &'static str,
    pub mobile_nav: &'static str,
    pub scene_container: &'static str,
    pub brand_mark: &'static str,
    pub portfolio_grid: &'static str,
    pub video_modal: &'static str,
    pub modal_close: &'static str,
    pub video_holder: &'static str,
    pub showreel_button: &'static str,
    pub contact_form: &'static str,
    pub contact_name: &'static str,
    pub footer_year: &'static str,
    pub service_card_selector: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_button: "menuBtn",
            mobile_nav: "mobileNav",
            scene_container: "threeWrap",
            brand_mark: "brandMark",
            portfolio_grid: "portfolioGrid",
            video_modal: "videoModal",
            modal_close: "modalClose",
            video_holder: "videoHolder",
            showreel_button: "showreelBtn",
            contact_form: "contactForm",
            contact_name: "cname",
            footer_year: "year",
            service_card_selector: ".service-card",
        }
    }
}

/// Timing of the sequential card entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerConfig {
    pub base_delay_ms: u32,
    pub step_ms: u32,
    pub css_step_secs: f64,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 100,
            step_ms: 120,
            css_step_secs: 0.06,
        }
    }
}

impl StaggerConfig {
    pub fn reveal_after_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms
            .saturating_add(self.step_ms.saturating_mul(index))
    }

    pub fn css_delay(&self, index: usize) -> String {
        let secs = self.css_step_secs * index as f64;
        // Round away float noise such as 0.18000000000000002.
        let secs = (secs * 1000.0).round() / 1000.0;
        format!("{secs}s")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub ids: ElementIds,
    pub service_reveal_threshold: f64,
    pub work_reveal_threshold: f64,
    pub stagger: StaggerConfig,
    pub showreel_item: WorkItemId,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            service_reveal_threshold: 0.18,
            work_reveal_threshold: 0.12,
            stagger: StaggerConfig::default(),
            showreel_item: WorkItemId(1),
            log_level: LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    /// Applies one `<body data-KEY="VALUE">` override. Keys are the dataset
    /// names (`logLevel`, `showreel`); unknown keys are ignored.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        let invalid = || SiteError::InvalidSetting {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        match key {
            "logLevel" => {
                self.log_level = value.trim().parse().map_err(|_| invalid())?;
            }
            "showreel" => {
                let id = value.trim().parse().map_err(|_| invalid())?;
                self.showreel_item = WorkItemId(id);
            }
            _ => {}
        }
        Ok(())
    }
}
