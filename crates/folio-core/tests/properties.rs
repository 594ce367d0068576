//! Property-based tests for the typing animator, the carousel and the timer
//! queue.

use std::time::Duration;

use proptest::prelude::*;

use folio_core::carousel::SlideCarousel;
use folio_core::options::TypingTimings;
use folio_core::scheduler::Scheduler;
use folio_core::target::{ActiveFlag, TextFrames};
use folio_core::typing::{TypingAnimator, TypingMode};

fn carousel(len: usize, start: usize) -> SlideCarousel<bool> {
    let mut c = SlideCarousel::new(vec![false; len], vec![false; len]).unwrap();
    c.go_to(start).unwrap();
    c
}

fn single_active(c: &SlideCarousel<bool>) -> bool {
    let slides = c.slides().iter().filter(|s| s.is_active()).count();
    let dots = c.indicators().iter().filter(|d| d.is_active()).count();
    slides == 1 && dots == 1 && c.slides()[c.active_index()] && c.indicators()[c.active_index()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `next` applied `len` times returns to the starting slide; so does `prev`.
    #[test]
    fn next_and_prev_wrap_around(len in 1usize..12, start_seed in 0usize..100) {
        let start = start_seed % len;
        let mut c = carousel(len, start);
        for _ in 0..len {
            c.next();
        }
        prop_assert_eq!(c.active_index(), start);
        for _ in 0..len {
            c.prev();
        }
        prop_assert_eq!(c.active_index(), start);
    }

    /// Any sequence of navigation leaves exactly one aligned active pair.
    #[test]
    fn exactly_one_active_slide(len in 1usize..8, ops in prop::collection::vec(0u8..3, 0..40)) {
        let mut c = carousel(len, 0);
        for (i, op) in ops.iter().enumerate() {
            match op {
                0 => { c.next(); }
                1 => { c.prev(); }
                _ => { c.go_to(i % len).unwrap(); }
            }
            prop_assert!(single_active(&c));
        }
    }

    /// The rendered text is always a prefix of the current phrase.
    #[test]
    fn rendered_text_is_a_phrase_prefix(
        phrases in prop::collection::vec("[a-zé😀 ]{0,8}", 1..4),
        steps in 0usize..200,
    ) {
        let mut animator = TypingAnimator::new(phrases, TextFrames::new()).unwrap();
        for _ in 0..steps {
            animator.step();
            let len = animator.current_phrase().chars().count();
            prop_assert!(animator.char_index() <= len);
            prop_assert!(animator.current_phrase().starts_with(animator.rendered()));
        }
    }

    /// One full cycle per phrase brings the animator back to the first phrase
    /// with nothing rendered, and shows each non-empty phrase in full exactly
    /// once on the way.
    #[test]
    fn full_cycle_returns_to_start(phrases in prop::collection::vec("[a-bé]{0,4}", 1..5)) {
        let steps: usize = phrases
            .iter()
            .map(|p| {
                let n = p.chars().count();
                // n typed, one pause, n deleted, one advance.
                2 * n + 2
            })
            .sum();
        let mut animator = TypingAnimator::new(phrases.clone(), TextFrames::new()).unwrap();
        let mut shown_in_full = vec![0usize; phrases.len()];
        for _ in 0..steps {
            let before = animator.target().frames().len();
            animator.step();
            let wrote = animator.target().frames().len() > before;
            if wrote && animator.target().last() == animator.current_phrase() {
                shown_in_full[animator.phrase_index()] += 1;
            }
        }
        prop_assert_eq!(animator.phrase_index(), 0);
        prop_assert_eq!(animator.char_index(), 0);
        prop_assert_eq!(animator.mode(), TypingMode::Advancing);
        for (phrase, shown) in phrases.iter().zip(&shown_in_full) {
            let expected = usize::from(!phrase.is_empty());
            prop_assert_eq!(*shown, expected, "phrase {:?}", phrase);
        }
    }

    /// A repeating timer fires `t / period` times by time `t`.
    #[test]
    fn repeating_timer_count(period in 1u64..5000, t in 0u64..60_000) {
        let mut timers = Scheduler::new();
        timers.every(Duration::from_millis(period), ());
        let mut fired = 0;
        while timers.pop_due(Duration::from_millis(t)).is_some() {
            fired += 1;
        }
        prop_assert_eq!(fired, t / period);
    }
}

#[test]
fn typing_delays_follow_timings() {
    let timings = TypingTimings {
        type_delay: Duration::from_millis(7),
        pause: Duration::from_millis(11),
        delete_delay: Duration::from_millis(3),
        advance_delay: Duration::from_millis(5),
    };
    let mut animator = TypingAnimator::new(vec!["ab".into()], TextFrames::new())
        .unwrap()
        .with_timings(timings);
    let delays: Vec<u128> = (0..8).map(|_| animator.step().as_millis()).collect();
    // type a, type b, full -> pause, delete b, delete a, empty -> advance, type a, type b
    assert_eq!(delays, vec![7, 7, 11, 3, 3, 5, 7, 7]);
}
