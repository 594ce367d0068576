//! Scroll-driven effects: progress bar, reveal-on-scroll, lazy images,
//! parallax and throttling.

use std::time::Duration;

use crate::constants::{DEFAULT_PARALLAX_SPEED, REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};
use crate::content::{LazyImageSpec, RevealBlock};

/// A vertical extent on the page, in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

impl Span {
    #[must_use]
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Overlap with `[from, to)` in px.
    #[must_use]
    pub fn overlap(self, from: u32, to: u32) -> u32 {
        self.bottom().min(to).saturating_sub(self.top.max(from))
    }
}

/// Page scroll position and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_y: u32,
    pub document_height: u32,
    pub viewport_height: u32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(document_height: u32, viewport_height: u32) -> Self {
        Self {
            scroll_y: 0,
            document_height,
            viewport_height,
        }
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    /// Scroll to `y`, clamped to the document. Returns the applied offset.
    pub fn scroll_to(&mut self, y: u32) -> u32 {
        self.scroll_y = y.min(self.max_scroll());
        self.scroll_y
    }

    /// Scrolled fraction of the document in percent, 0 when nothing scrolls.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max == 0 {
            return 0.0;
        }
        (f64::from(self.scroll_y) / f64::from(max) * 100.0).clamp(0.0, 100.0)
    }

    /// Whether `span` lies entirely inside the viewport.
    #[must_use]
    pub fn in_viewport(&self, span: Span) -> bool {
        span.top >= self.scroll_y && span.bottom() <= self.scroll_y + self.viewport_height
    }
}

/// Fraction of `span` visible within `[from, to)`.
fn visible_ratio(span: Span, from: u32, to: u32) -> f64 {
    if span.height == 0 {
        return if span.top >= from && span.top < to { 1.0 } else { 0.0 };
    }
    f64::from(span.overlap(from, to)) / f64::from(span.height)
}

#[derive(Debug, Clone)]
struct RevealItem {
    id: String,
    span: Span,
    revealed: bool,
}

/// Elements that fade in once enough of them has been scrolled into view.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    items: Vec<RevealItem>,
}

impl RevealSet {
    #[must_use]
    pub fn new(blocks: &[RevealBlock]) -> Self {
        Self {
            items: blocks
                .iter()
                .map(|b| RevealItem {
                    id: b.id.clone(),
                    span: Span::new(b.top, b.height),
                    revealed: false,
                })
                .collect(),
        }
    }

    /// Reveal newly intersecting elements; returns their ids.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> Vec<String> {
        let from = metrics.scroll_y;
        let to = metrics.scroll_y
            + metrics
                .viewport_height
                .saturating_sub(REVEAL_BOTTOM_MARGIN);
        let mut newly = Vec::new();
        for item in self.items.iter_mut().filter(|i| !i.revealed) {
            let ratio = visible_ratio(item.span, from, to);
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                item.revealed = true;
                newly.push(item.id.clone());
            }
        }
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id && i.revealed)
    }

    /// Ids of revealed elements in declaration order.
    #[must_use]
    pub fn revealed(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.revealed)
            .map(|i| i.id.as_str())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An image with a deferred source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    pub id: String,
    span: Span,
    deferred: Option<String>,
    src: Option<String>,
}

impl LazyImage {
    /// Loaded source, `None` until first intersection.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Whether the image is still observed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deferred.is_some()
    }
}

/// Images that load their source on first intersection.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    images: Vec<LazyImage>,
}

impl LazyImages {
    #[must_use]
    pub fn new(specs: &[LazyImageSpec]) -> Self {
        Self {
            images: specs
                .iter()
                .map(|s| LazyImage {
                    id: s.id.clone(),
                    span: Span::new(s.top, s.height),
                    deferred: Some(s.src.clone()),
                    src: None,
                })
                .collect(),
        }
    }

    /// Load images intersecting the viewport; returns `(id, src)` per load.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> Vec<(String, String)> {
        let from = metrics.scroll_y;
        let to = metrics.scroll_y + metrics.viewport_height;
        let mut loaded = Vec::new();
        for image in &mut self.images {
            if image.deferred.is_none() || visible_ratio(image.span, from, to) <= 0.0 {
                continue;
            }
            if let Some(src) = image.deferred.take() {
                image.src = Some(src.clone());
                loaded.push((image.id.clone(), src));
            }
        }
        loaded
    }

    #[must_use]
    pub fn images(&self) -> &[LazyImage] {
        &self.images
    }
}

/// Vertical parallax translation in px.
#[must_use]
pub fn parallax_offset(scroll_y: u32, speed: Option<f64>) -> f64 {
    f64::from(scroll_y) * speed.unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Leading-edge throttle.
///
/// The first call in a window runs; later calls are remembered so the host
/// can run once more when the window closes.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    engaged: bool,
    dropped: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            engaged: false,
            dropped: false,
        }
    }

    /// Whether the caller may run now. Engages the throttle when it may.
    pub fn call(&mut self) -> bool {
        if self.engaged {
            self.dropped = true;
            false
        } else {
            self.engaged = true;
            true
        }
    }

    /// Close the window. Returns whether a call was dropped meanwhile.
    // Reporting the drop adds one trailing run on top of plain leading-edge
    // throttling, so the final scroll position is always applied.
    pub fn release(&mut self) -> bool {
        self.engaged = false;
        std::mem::take(&mut self.dropped)
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(y: u32) -> ScrollMetrics {
        let mut m = ScrollMetrics::new(3000, 1000);
        m.scroll_to(y);
        m
    }

    #[test]
    fn progress_percentage() {
        assert!((metrics(0).progress()).abs() < f64::EPSILON);
        assert!((metrics(1000).progress() - 50.0).abs() < 1e-9);
        assert!((metrics(2000).progress() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut m = ScrollMetrics::new(3000, 1000);
        assert_eq!(m.scroll_to(9999), 2000);
    }

    #[test]
    fn progress_when_document_fits() {
        let m = ScrollMetrics::new(500, 1000);
        assert!(m.progress().abs() < f64::EPSILON);
    }

    #[test]
    fn in_viewport_requires_full_containment() {
        let m = metrics(100);
        assert!(m.in_viewport(Span::new(100, 1000)));
        assert!(!m.in_viewport(Span::new(50, 100)));
        assert!(!m.in_viewport(Span::new(1000, 200)));
    }

    #[test]
    fn reveal_needs_ten_percent_above_margin() {
        let mut set = RevealSet::new(&[RevealBlock {
            id: "card".into(),
            top: 1000,
            height: 200,
        }]);
        // Viewport [0, 900) after the 100px margin: no overlap.
        assert!(set.update(&metrics(0)).is_empty());
        // [119, 1019): 19px visible, under 10%.
        assert!(set.update(&metrics(119)).is_empty());
        // [120, 1020): 20px visible, exactly 10%.
        assert_eq!(set.update(&metrics(120)), vec!["card".to_string()]);
        assert!(set.is_revealed("card"));
        // Stays revealed and is reported once.
        assert!(set.update(&metrics(0)).is_empty());
        assert_eq!(set.revealed(), vec!["card"]);
    }

    #[test]
    fn lazy_image_loads_once() {
        let mut images = LazyImages::new(&[LazyImageSpec {
            id: "img".into(),
            top: 1500,
            height: 100,
            src: "a.webp".into(),
        }]);
        assert!(images.update(&metrics(0)).is_empty());
        assert_eq!(
            images.update(&metrics(501)),
            vec![("img".to_string(), "a.webp".to_string())]
        );
        assert!(images.update(&metrics(600)).is_empty());
        assert_eq!(images.images()[0].src(), Some("a.webp"));
        assert!(!images.images()[0].is_pending());
    }

    #[test]
    fn parallax_default_speed() {
        assert!((parallax_offset(100, None) - 50.0).abs() < f64::EPSILON);
        assert!((parallax_offset(100, Some(0.2)) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn throttle_leading_edge_with_catch_up() {
        let mut t = Throttle::new(Duration::from_millis(100));
        assert!(t.call());
        assert!(!t.call());
        assert!(!t.call());
        assert!(t.release());
        assert!(t.call());
        assert!(!t.release());
        assert!(!t.is_engaged());
    }
}
