#![cfg(not(target_arch = "wasm32"))]

use log::LevelFilter;

use studio_site_wasm::contact::{handle_submission, validate, ContactError};
use studio_site_wasm::modal::{ModalState, VideoModal};
use studio_site_wasm::nav::{NavState, Navigation};
use studio_site_wasm::portfolio::card_markup;
use studio_site_wasm::reveal::{RevealChange, RevealTracker};
use studio_site_wasm::{escape_html, Portfolio, SiteConfig, SiteError, WorkItem, WorkItemId};

const EMBED: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

#[test]
fn escapes_every_markup_character() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("Raat Ka Safar"), "Raat Ka Safar");
}

#[test]
fn escaping_twice_escapes_the_ampersands_again() {
    let once = escape_html("&");
    assert_eq!(once, "&amp;");
    assert_eq!(escape_html(&once), "&amp;amp;");
}

#[test]
fn showcase_is_ordered_by_id() {
    let portfolio = Portfolio::showcase();
    let ids: Vec<u32> = portfolio.iter().map(|item| item.id.0).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
    assert!(portfolio.iter().all(|item| item.video_embed_url == EMBED));
    assert_eq!(
        portfolio.get(WorkItemId(3)).map(|i| i.title.as_str()),
        Some("Ad Spot — Bijli")
    );
    assert!(portfolio.get(WorkItemId(9)).is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Portfolio::new(vec![
        WorkItem::new(1, "a", "a.jpg", EMBED),
        WorkItem::new(2, "b", "b.jpg", EMBED),
        WorkItem::new(1, "c", "c.jpg", EMBED),
    ])
    .unwrap_err();
    assert_eq!(err, SiteError::DuplicateWorkItem(WorkItemId(1)));
}

#[test]
fn one_card_plan_per_item_in_order() {
    let portfolio = Portfolio::showcase();
    let plans = portfolio.card_plans(&SiteConfig::default().stagger);

    assert_eq!(plans.len(), portfolio.len());
    for (plan, item) in plans.iter().zip(portfolio.iter()) {
        assert_eq!(plan.id, item.id);
        assert!(plan.markup.contains(&item.thumbnail_path));
    }
    let delays: Vec<&str> = plans.iter().map(|p| p.css_delay.as_str()).collect();
    assert_eq!(delays, ["0s", "0.06s", "0.12s", "0.18s"]);
    let reveal: Vec<u32> = plans.iter().map(|p| p.reveal_after_ms).collect();
    assert_eq!(reveal, [100, 220, 340, 460]);
}

#[test]
fn card_markup_escapes_the_title() {
    let item = WorkItem::new(7, r#"<b>"Loud"</b>"#, "media/x.jpg", EMBED);
    let markup = card_markup(&item);
    assert!(markup.contains(r#"alt="&lt;b&gt;&quot;Loud&quot;&lt;/b&gt;""#));
    assert!(
        markup.contains("<h4>&lt;b&gt;&quot;Loud&quot;&lt;/b&gt;</h4>")
    );
    assert!(markup.contains(r#"loading="lazy""#));
    assert!(markup.contains("<p>Click to play</p>"));
}

#[test]
fn opening_a_known_item_embeds_its_video() {
    let mut modal = VideoModal::new(Portfolio::showcase());
    let title = modal.open(WorkItemId(2)).map(|item| item.title.clone());
    assert_eq!(title.as_deref(), Ok("Game Trailer — Moksha Quest"));
    assert_eq!(modal.state(), ModalState::Open(WorkItemId(2)));

    let view = modal.view();
    assert!(!view.hidden);
    assert_eq!(view.aria_hidden, "false");
    assert_eq!(view.body_overflow, "hidden");
    assert!(view.holder_markup.starts_with("<iframe"));
    assert!(view.holder_markup.contains(&format!(r#"src="{EMBED}?autoplay=1""#)));
    assert!(view.holder_markup.contains("allowfullscreen"));
}

#[test]
fn opening_an_unknown_item_changes_nothing() {
    let mut modal = VideoModal::new(Portfolio::showcase());
    let closed = modal.view();

    let err = modal.open(WorkItemId(99)).unwrap_err();
    assert_eq!(err, SiteError::UnknownWorkItem(WorkItemId(99)));
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(modal.view(), closed);

    modal.open(WorkItemId(1)).unwrap();
    assert!(modal.open(WorkItemId(0)).is_err());
    assert_eq!(modal.state(), ModalState::Open(WorkItemId(1)));
}

#[test]
fn closing_is_idempotent() {
    let mut modal = VideoModal::new(Portfolio::showcase());
    modal.open(WorkItemId(4)).unwrap();

    assert!(modal.close());
    let once = modal.view();
    assert!(!modal.close());
    let twice = modal.view();

    assert_eq!(once, twice);
    assert!(twice.hidden);
    assert_eq!(twice.aria_hidden, "true");
    assert_eq!(twice.body_overflow, "");
    assert!(twice.holder_markup.is_empty());
}

#[test]
fn nav_toggle_and_collapse() {
    let mut nav = Navigation::new();
    assert_eq!(nav.state(), NavState::Collapsed);

    let open = nav.toggle();
    assert_eq!(nav.state(), NavState::Expanded);
    assert_eq!(open.aria_expanded, "true");
    assert_eq!(open.aria_hidden, "false");
    assert!(open.data_open);
    assert_eq!(open.transform, "translateY(0)");
    assert_eq!(open.opacity, "1");

    let closed = nav.collapse();
    assert_eq!(closed, NavState::Collapsed.view());
    assert_eq!(closed.aria_expanded, "false");
    assert_eq!(closed.transform, "translateY(-8px)");

    // collapsing an already collapsed panel is a no-op
    assert_eq!(nav.collapse(), closed);
    assert_eq!(nav.toggle().aria_expanded, "true");
    assert_eq!(nav.toggle().aria_expanded, "false");
}

#[test]
fn reveal_threshold_must_be_a_fraction() {
    assert_eq!(
        RevealTracker::new(1.5).unwrap_err(),
        SiteError::InvalidThreshold(1.5)
    );
    assert!(RevealTracker::new(-0.1).is_err());
    assert!(RevealTracker::new(f64::NAN).is_err());
    assert!(RevealTracker::new(0.0).is_ok());
    assert!(RevealTracker::new(1.0).is_ok());
}

#[test]
fn revealed_elements_stay_revealed() {
    let mut tracker = RevealTracker::new(0.18).unwrap();
    let card = tracker.track();
    let other = tracker.track();

    assert_eq!(tracker.report(card, true, 0.05), RevealChange::Unchanged);
    assert!(!tracker.is_revealed(card));

    assert_eq!(tracker.report(card, true, 0.4), RevealChange::Revealed);
    // leaves the viewport, then comes back
    assert_eq!(tracker.report(card, false, 0.0), RevealChange::Unchanged);
    assert!(tracker.is_revealed(card));
    assert_eq!(tracker.report(card, true, 1.0), RevealChange::Unchanged);
    assert!(tracker.is_revealed(card));

    assert!(!tracker.is_revealed(other));
    assert_eq!(tracker.revealed_count(), 1);
}

#[test]
fn reveal_tolerates_ratio_rounding_and_ignores_unknown_slots() {
    let mut tracker = RevealTracker::new(0.12).unwrap();
    let card = tracker.track();
    assert_eq!(tracker.report(card, true, 0.1199), RevealChange::Revealed);
    assert_eq!(tracker.report(42, true, 1.0), RevealChange::Unchanged);
    assert!(!tracker.is_revealed(42));
}

#[test]
fn whitespace_name_is_rejected_without_reset() {
    assert_eq!(validate("  "), Err(ContactError::MissingName));
    let outcome = handle_submission("  ");
    assert_eq!(outcome.message, "Please enter your name");
    assert!(!outcome.reset);
}

#[test]
fn valid_name_is_thanked_and_resets() {
    let outcome = handle_submission("Asha");
    assert_eq!(outcome.message, "Thanks Asha! We'll reply shortly.");
    assert!(outcome.reset);
    assert_eq!(validate("  Asha \n").map(|s| s.name), Ok("Asha".to_owned()));
}

#[test]
fn config_defaults_match_the_page() {
    let config = SiteConfig::default();
    assert_eq!(config.ids.menu_button, "menuBtn");
    assert_eq!(config.ids.contact_name, "cname");
    assert_eq!(config.service_reveal_threshold, 0.18);
    assert_eq!(config.work_reveal_threshold, 0.12);
    assert_eq!(config.showreel_item, WorkItemId(1));
    assert_eq!(config.log_level, LevelFilter::Info);
}

#[test]
fn config_overrides() {
    let mut config = SiteConfig::default();
    config.apply_override("logLevel", "debug").unwrap();
    config.apply_override("showreel", " 3 ").unwrap();
    config.apply_override("theme", "dark").unwrap();
    assert_eq!(config.log_level, LevelFilter::Debug);
    assert_eq!(config.showreel_item, WorkItemId(3));

    let err = config.apply_override("showreel", "first").unwrap_err();
    assert_eq!(
        err,
        SiteError::InvalidSetting {
            key: "showreel".into(),
            value: "first".into()
        }
    );
    assert_eq!(config.showreel_item, WorkItemId(3));
    assert!(config.apply_override("logLevel", "loud").is_err());
}
