//! CLI output formatting.

use std::time::Duration;

use folio_core::event::SiteEvent;
use folio_core::site::Site;
use folio_core::target::ActiveFlag;

/// Format a virtual timestamp as `mm:ss.mmm`.
#[must_use]
pub fn format_clock(at: Duration) -> String {
    let millis = at.as_millis();
    let mins = millis / 60_000;
    let secs = (millis / 1000) % 60;
    let ms = millis % 1000;
    format!("{mins:02}:{secs:02}.{ms:03}")
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = d.as_secs() / 60;
        let remaining = secs - (mins * 60) as f64;
        format!("{mins}m{remaining:.1}s")
    }
}

/// Human-readable description of an event, without its name.
#[must_use]
pub fn describe_event(event: &SiteEvent) -> String {
    match event {
        SiteEvent::Started => "page started".to_string(),
        SiteEvent::Stopped => "page stopped".to_string(),
        SiteEvent::TypingText(text) => format!("\"{text}\""),
        SiteEvent::SlideChanged { index, cause } => {
            format!("slide {} ({})", index + 1, format!("{cause:?}").to_lowercase())
        }
        SiteEvent::ThemeChanged(mode) => {
            format!("{} mode", if mode.is_dark() { "dark" } else { "light" })
        }
        SiteEvent::MenuToggled(open) => {
            format!("menu {}", if *open { "opened" } else { "closed" })
        }
        SiteEvent::SectionChanged(Some(id)) => format!("#{id}"),
        SiteEvent::SectionChanged(None) => "no active section".to_string(),
        SiteEvent::Scrolled { y, progress } => format!("y={y}px {progress:.1}%"),
        SiteEvent::Revealed(id) => id.clone(),
        SiteEvent::ImageLoaded { id, src } => format!("{id} <- {src}"),
        SiteEvent::FilterApplied(name) => format!("filter {name}"),
        SiteEvent::CardVisibility { title, visible } => {
            format!("{title} {}", if *visible { "shown" } else { "hidden" })
        }
        SiteEvent::ContactSending => "sending message".to_string(),
        SiteEvent::ContactSent => "message sent".to_string(),
        SiteEvent::Notification { id, kind, message } => {
            format!("#{id} [{}] {message}", kind.label())
        }
        SiteEvent::NotificationRemoved(id) => format!("#{id} removed"),
    }
}

/// Format one event line: timestamp, padded name, description.
#[must_use]
pub fn format_event(at: Duration, event: &SiteEvent) -> String {
    format!(
        "[{}] {:<20} {}",
        format_clock(at),
        event.name(),
        describe_event(event)
    )
}

/// Key/value lines describing the page state at the end of a run.
#[must_use]
pub fn summary_lines(site: &Site) -> Vec<(&'static str, String)> {
    let carousel = site.carousel();
    let dots: String = carousel
        .indicators()
        .iter()
        .map(|d| if d.is_active() { '●' } else { '○' })
        .collect();
    let metrics = site.metrics();
    let reveal = site.reveal();
    vec![
        ("Clock", format_duration(site.now())),
        ("Typing", format!("\"{}\"", site.typing_text())),
        (
            "Phrase",
            format!(
                "{}/{} ({:?})",
                site.typing().phrase_index() + 1,
                site.typing().phrases().len(),
                site.typing().mode()
            ),
        ),
        (
            "Slide",
            format!("{}/{} {dots}", carousel.active_index() + 1, carousel.len()),
        ),
        ("Theme", format!("{:?}", site.theme())),
        ("Section", site.active_section_id().unwrap_or("-").to_string()),
        (
            "Scroll",
            format!("{}px ({:.1}%)", metrics.scroll_y, metrics.progress()),
        ),
        (
            "Revealed",
            format!("{}/{}", reveal.revealed().len(), reveal.len()),
        ),
        ("Filter", site.filter().active().to_string()),
        ("Timers", site.pending_timers().to_string()),
    ]
}
