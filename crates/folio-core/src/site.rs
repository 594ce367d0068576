//! The whole page: every component wired to one timer queue.
//!
//! [`Site`] owns the scheduler and all components, turns user actions into
//! state changes and publishes each change as a [`SiteEvent`]. Hosts drive
//! it by dispatching actions and advancing the virtual clock.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::carousel::{Slide, SlideCarousel};
use crate::constants::SCROLL_THROTTLE;
use crate::contact::{ContactForm, SubmitOutcome, MISSING_FIELDS_MESSAGE, SENT_MESSAGE};
use crate::content::{SiteContent, Testimonial};
use crate::decor::Decorations;
use crate::error::FolioError;
use crate::event::{KeyInput, SiteAction, SiteEvent, SlideCause};
use crate::filter::ProjectFilter;
use crate::nav::{anchor_target, NavState};
use crate::notify::{NotificationKind, Notifier};
use crate::observer::{SiteObserver, SiteSubject};
use crate::options::Options;
use crate::scheduler::Scheduler;
use crate::scroll::{parallax_offset, LazyImages, RevealSet, ScrollMetrics, Throttle};
use crate::theme::{initial_mode, PreferenceStore, ThemeMode};
use crate::typing::TypingAnimator;

/// Timer payloads used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTask {
    TypingStep,
    SlideAdvance,
    ScrollThrottle,
    CardFadeIn(usize),
    CardFadeOut(usize),
    ContactSent,
    NotificationExit(u64),
    NotificationRemove(u64),
}

/// Testimonial carousel as the page builds it.
pub type TestimonialCarousel = SlideCarousel<Slide<Testimonial>>;

/// A running portfolio page.
pub struct Site {
    content: SiteContent,
    options: Options,
    timers: Scheduler<SiteTask>,
    typing: TypingAnimator<String>,
    carousel: TestimonialCarousel,
    theme: ThemeMode,
    store: Box<dyn PreferenceStore>,
    nav: NavState,
    metrics: ScrollMetrics,
    throttle: Throttle,
    reveal: RevealSet,
    images: LazyImages,
    filter: ProjectFilter,
    contact: ContactForm,
    notifier: Notifier,
    decorations: Decorations,
    subject: SiteSubject,
    running: bool,
}

impl Site {
    /// Build the page from validated content.
    ///
    /// The saved theme preference is applied immediately; timers are only
    /// armed by [`Site::start`].
    pub fn new(
        content: SiteContent,
        store: Box<dyn PreferenceStore>,
        options: Options,
    ) -> Result<Self, FolioError> {
        content.validate()?;
        let options = options.normalize();

        let typing = TypingAnimator::new(content.phrases.clone(), String::new())?
            .with_timings(options.typing);
        let slides = content
            .testimonials
            .iter()
            .cloned()
            .map(Slide::new)
            .collect::<Vec<_>>();
        let dots = vec![false; slides.len()];
        let carousel = SlideCarousel::new(slides, dots)?.with_interval(options.slide_interval);

        let theme = initial_mode(store.as_ref());
        let decorations = Decorations::generate(
            content.floating_cards,
            content.entrance_elements,
            options.seed,
        );

        Ok(Self {
            metrics: ScrollMetrics::new(content.document_height, content.viewport_height),
            reveal: RevealSet::new(&content.reveal),
            images: LazyImages::new(&content.images),
            filter: ProjectFilter::new(&content.projects),
            content,
            options,
            timers: Scheduler::new(),
            typing,
            carousel,
            theme,
            store,
            nav: NavState::new(),
            throttle: Throttle::new(SCROLL_THROTTLE),
            contact: ContactForm::new(),
            notifier: Notifier::new(),
            decorations,
            subject: SiteSubject::new(),
            running: false,
        })
    }

    /// Register an observer for every subsequent event.
    pub fn subscribe(&self, observer: Arc<dyn SiteObserver>) {
        self.subject.register(observer);
    }

    fn emit(&self, event: SiteEvent) {
        self.subject.notify(self.timers.now(), &event);
    }

    /// Start the animations and run the initial scroll pass.
    ///
    /// Returns `false` when the page is already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        info!(
            phrases = self.content.phrases.len(),
            slides = self.carousel.len(),
            theme = ?self.theme,
            "site started"
        );
        self.emit(SiteEvent::Started);
        self.emit(SiteEvent::ThemeChanged(self.theme));

        self.typing.start(&mut self.timers, SiteTask::TypingStep);
        self.emit_typing_text();
        self.carousel
            .start_auto_advance(&mut self.timers, SiteTask::SlideAdvance);

        self.on_scroll();
        true
    }

    /// Cancel every timer and stop the animations.
    ///
    /// Returns `false` when the page was not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.typing.stop(&mut self.timers);
        self.carousel.stop(&mut self.timers);
        self.filter.stop(&mut self.timers);
        self.contact.cancel(&mut self.timers);
        self.notifier.clear(&mut self.timers);
        self.throttle.release();
        self.timers.clear();
        self.running = false;
        info!(at = ?self.timers.now(), "site stopped");
        self.emit(SiteEvent::Stopped);
        true
    }

    /// Apply one user interaction.
    pub fn dispatch(&mut self, action: SiteAction) -> Result<(), FolioError> {
        trace!(?action, "dispatch");
        match action {
            SiteAction::ToggleDarkMode => self.toggle_theme(),
            SiteAction::ToggleMenu => {
                let open = self.nav.toggle_menu();
                self.emit(SiteEvent::MenuToggled(open));
            }
            SiteAction::NavigateTo(href) => {
                self.close_menu();
                match anchor_target(&self.content.sections, &href) {
                    Some(y) => self.scroll_to(y),
                    None => debug!(%href, "ignoring unknown anchor"),
                }
            }
            SiteAction::ScrollTo(y) => self.scroll_to(y),
            SiteAction::ScrollBy(delta) => {
                let y = i64::from(self.metrics.scroll_y).saturating_add(delta);
                let y = u32::try_from(y.max(0)).unwrap_or(u32::MAX);
                self.scroll_to(y);
            }
            SiteAction::ScrollToTop => self.scroll_to(0),
            SiteAction::NextSlide => {
                let index = self.carousel.next();
                self.emit_slide(index, SlideCause::Next);
            }
            SiteAction::PrevSlide => {
                let index = self.carousel.prev();
                self.emit_slide(index, SlideCause::Prev);
            }
            SiteAction::JumpToSlide(index) => {
                let before = self.carousel.active_index();
                self.carousel.go_to(index)?;
                if index != before {
                    self.emit_slide(index, SlideCause::Jump);
                }
            }
            SiteAction::Filter(name) => {
                self.filter.apply(
                    &name,
                    &mut self.timers,
                    SiteTask::CardFadeIn,
                    SiteTask::CardFadeOut,
                )?;
                debug!(filter = %name, "project filter applied");
                self.emit(SiteEvent::FilterApplied(name));
            }
            SiteAction::Focus(field) => self.contact.focus(field),
            SiteAction::Blur(field) => self.contact.blur(field),
            SiteAction::Input(field, value) => self.contact.set_value(field, value),
            SiteAction::Submit => self.submit_contact(),
            SiteAction::Key(KeyInput::Escape) => self.close_menu(),
            SiteAction::Key(KeyInput::ShortcutSlash) => trace!("shortcut reserved"),
        }
        Ok(())
    }

    /// Advance the clock by `delta`, running every timer that falls due.
    pub fn advance_by(&mut self, delta: Duration) -> usize {
        let until = self.timers.now() + delta;
        self.advance_to(until)
    }

    /// Advance the clock to `until`, running every timer that falls due.
    /// Returns the number of timers run.
    pub fn advance_to(&mut self, until: Duration) -> usize {
        let mut fired = 0;
        while let Some((_, task)) = self.timers.pop_due(until) {
            fired += 1;
            self.run_task(task);
        }
        self.timers.advance_to(until);
        fired
    }

    fn run_task(&mut self, task: SiteTask) {
        match task {
            SiteTask::TypingStep => {
                let before = self.typing.char_index();
                self.typing.fire(&mut self.timers, SiteTask::TypingStep);
                if self.typing.char_index() != before {
                    self.emit_typing_text();
                }
            }
            SiteTask::SlideAdvance => {
                let index = self.carousel.on_auto_advance();
                self.emit_slide(index, SlideCause::Auto);
            }
            SiteTask::ScrollThrottle => {
                if self.throttle.release() {
                    trace!("applying throttled scroll");
                    self.throttled_update();
                }
            }
            SiteTask::CardFadeIn(index) => {
                self.filter.finish_fade_in(index);
                self.emit_card(index, true);
            }
            SiteTask::CardFadeOut(index) => {
                self.filter.finish_fade_out(index);
                self.emit_card(index, false);
            }
            SiteTask::ContactSent => {
                self.contact.complete();
                info!("contact message sent");
                self.emit(SiteEvent::ContactSent);
                self.notify(NotificationKind::Success, SENT_MESSAGE);
            }
            SiteTask::NotificationExit(id) => {
                self.notifier
                    .begin_exit(id, &mut self.timers, SiteTask::NotificationRemove);
            }
            SiteTask::NotificationRemove(id) => {
                if self.notifier.remove(id) {
                    self.emit(SiteEvent::NotificationRemoved(id));
                }
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if self.options.persist_theme {
            if let Err(err) = self.store.save(self.theme.is_dark()) {
                warn!(%err, "could not save theme preference");
            }
        }
        debug!(theme = ?self.theme, "theme toggled");
        self.emit(SiteEvent::ThemeChanged(self.theme));
    }

    fn close_menu(&mut self) {
        if self.nav.close_menu() {
            self.emit(SiteEvent::MenuToggled(false));
        }
    }

    fn scroll_to(&mut self, y: u32) {
        self.metrics.scroll_to(y);
        self.close_menu();
        self.on_scroll();
    }

    /// Work done on every scroll; the section and progress recomputation is
    /// throttled.
    fn on_scroll(&mut self) {
        self.nav.on_scroll(self.metrics.scroll_y);

        for id in self.reveal.update(&self.metrics) {
            self.emit(SiteEvent::Revealed(id));
        }
        for (id, src) in self.images.update(&self.metrics) {
            debug!(%id, %src, "lazy image loaded");
            self.emit(SiteEvent::ImageLoaded { id, src });
        }

        if self.throttle.call() {
            self.throttled_update();
        }
    }

    fn throttled_update(&mut self) {
        if !self.throttle.is_engaged() {
            self.throttle.call();
        }
        self.timers.once(self.throttle.limit(), SiteTask::ScrollThrottle);

        let y = self.metrics.scroll_y;
        if self.nav.update_active(&self.content.sections, y) {
            let id = self.active_section_id().map(str::to_string);
            self.emit(SiteEvent::SectionChanged(id));
        }
        self.emit(SiteEvent::Scrolled {
            y,
            progress: self.metrics.progress(),
        });
    }

    fn submit_contact(&mut self) {
        match self.contact.submit(&mut self.timers, SiteTask::ContactSent) {
            SubmitOutcome::Rejected => {
                self.notify(NotificationKind::Error, MISSING_FIELDS_MESSAGE);
            }
            SubmitOutcome::Sending => self.emit(SiteEvent::ContactSending),
            SubmitOutcome::Busy => debug!("submit ignored while sending"),
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        let id = self
            .notifier
            .show(kind, message, &mut self.timers, SiteTask::NotificationExit);
        self.emit(SiteEvent::Notification {
            id,
            kind,
            message: message.to_string(),
        });
    }

    fn emit_typing_text(&self) {
        self.emit(SiteEvent::TypingText(self.typing.target().clone()));
    }

    fn emit_slide(&self, index: usize, cause: SlideCause) {
        self.emit(SiteEvent::SlideChanged { index, cause });
    }

    fn emit_card(&self, index: usize, visible: bool) {
        if let Some(card) = self.filter.cards().get(index) {
            self.emit(SiteEvent::CardVisibility {
                title: card.title.clone(),
                visible,
            });
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Deadline of the earliest armed timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Text currently shown by the typing animation.
    #[must_use]
    pub fn typing_text(&self) -> &str {
        self.typing.target()
    }

    #[must_use]
    pub fn typing(&self) -> &TypingAnimator<String> {
        &self.typing
    }

    #[must_use]
    pub fn carousel(&self) -> &TestimonialCarousel {
        &self.carousel
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Anchor id of the active section.
    #[must_use]
    pub fn active_section_id(&self) -> Option<&str> {
        self.nav
            .active_section()
            .and_then(|i| self.content.sections.get(i))
            .map(|s| s.id.as_str())
    }

    #[must_use]
    pub fn metrics(&self) -> &ScrollMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    #[must_use]
    pub fn images(&self) -> &LazyImages {
        &self.images
    }

    /// Translation of every parallax layer at the current scroll offset.
    #[must_use]
    pub fn parallax_offsets(&self) -> Vec<(&str, f64)> {
        self.content
            .parallax
            .iter()
            .map(|l| (l.id.as_str(), parallax_offset(self.metrics.scroll_y, l.speed)))
            .collect()
    }

    #[must_use]
    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[must_use]
    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }
}
