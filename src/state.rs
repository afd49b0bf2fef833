//! Transient view state of the landing page.
//!
//! Everything here lives for one page view and is rebuilt on reload. The
//! transitions are plain `&mut self` methods so they can be exercised without
//! a browser; [`UiState`] also implements [`Reducible`] so components drive it
//! through `use_reducer_eq` by dispatching [`UiAction`]s.

use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use crate::config::{FaqConfig, ScrollThresholds};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// Opening one entry closes whichever entry was open.
    #[default]
    SingleOpen,
    /// Every entry toggles on its own.
    MultiOpen,
}

/// Open/closed flags for a fixed-size FAQ list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    mode: AccordionMode,
    open: Vec<bool>,
}

impl FaqAccordion {
    pub fn new(len: usize, config: FaqConfig) -> Self {
        let mut open = vec![false; len];
        match config.initial_open {
            Some(index) if index < len => open[index] = true,
            Some(index) => warn!(
                "Initial FAQ index {} is outside 0..{}, starting collapsed",
                index, len
            ),
            None => {}
        }
        Self {
            mode: config.mode,
            open,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// The lowest open entry. In single-open mode this is the only one.
    pub fn active(&self) -> Option<usize> {
        self.open.iter().position(|&open| open)
    }

    pub fn toggle(&mut self, index: usize) {
        debug_assert!(
            index < self.open.len(),
            "FAQ index {} out of range for {} entries",
            index,
            self.open.len()
        );
        if index >= self.open.len() {
            warn!("Ignoring toggle of unknown FAQ entry {}", index);
            return;
        }

        let was_open = self.open[index];
        if self.mode == AccordionMode::SingleOpen {
            self.open.iter_mut().for_each(|open| *open = false);
        }
        self.open[index] = !was_open;
    }
}

/// Two independently thresholded views of the last scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub nav_scrolled: bool,
    pub scroll_top_visible: bool,
}

impl ScrollFlags {
    pub fn from_offset(offset: u32, thresholds: ScrollThresholds) -> Self {
        Self {
            nav_scrolled: offset > thresholds.nav,
            scroll_top_visible: offset > thresholds.scroll_top,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    nav_expanded: bool,
    scroll: ScrollFlags,
    thresholds: ScrollThresholds,
    faq: FaqAccordion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Scrolled(u32),
    ToggleNav,
    CloseNav,
    ToggleFaq(usize),
}

impl UiState {
    pub fn new(faq_len: usize, faq: FaqConfig, thresholds: ScrollThresholds) -> Self {
        Self {
            nav_expanded: false,
            scroll: ScrollFlags::default(),
            thresholds,
            faq: FaqAccordion::new(faq_len, faq),
        }
    }

    pub fn on_scroll(&mut self, offset: u32) {
        let flags = ScrollFlags::from_offset(offset, self.thresholds);
        if flags != self.scroll {
            debug!("Scroll offset {} -> {:?}", offset, flags);
        }
        self.scroll = flags;
    }

    pub fn toggle_nav(&mut self) {
        self.nav_expanded = !self.nav_expanded;
        debug!("Mobile nav expanded: {}", self.nav_expanded);
    }

    pub fn close_nav(&mut self) {
        self.nav_expanded = false;
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.faq.toggle(index);
        debug!("Active FAQ entry: {:?}", self.active_faq());
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Scrolled(offset) => self.on_scroll(offset),
            UiAction::ToggleNav => self.toggle_nav(),
            UiAction::CloseNav => self.close_nav(),
            UiAction::ToggleFaq(index) => self.toggle_faq(index),
        }
    }

    pub fn nav_expanded(&self) -> bool {
        self.nav_expanded
    }

    pub fn nav_scrolled(&self) -> bool {
        self.scroll.nav_scrolled
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll.scroll_top_visible
    }

    pub fn active_faq(&self) -> Option<usize> {
        self.faq.active()
    }

    pub fn faq(&self) -> &FaqAccordion {
        &self.faq
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            // Lets use_reducer_eq skip the re-render on repeated scroll events.
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAQ_LEN: usize = 4;

    fn collapsed() -> UiState {
        let config = FaqConfig {
            initial_open: None,
            ..FaqConfig::default()
        };
        UiState::new(FAQ_LEN, config, ScrollThresholds::default())
    }

    fn open_count(state: &UiState) -> usize {
        (0..FAQ_LEN).filter(|&i| state.faq().is_open(i)).count()
    }

    fn sequences(len: usize, alphabet: usize) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new()];
        for _ in 0..len {
            out = out
                .into_iter()
                .flat_map(|seq| {
                    (0..alphabet).map(move |i| {
                        let mut next = seq.clone();
                        next.push(i);
                        next
                    })
                })
                .collect();
        }
        out
    }

    #[test]
    fn starts_closed_collapsed_and_unscrolled() {
        let state = collapsed();
        assert!(!state.nav_expanded());
        assert!(!state.nav_scrolled());
        assert!(!state.scroll_top_visible());
        assert_eq!(state.active_faq(), None);
    }

    #[test]
    fn default_config_opens_first_entry() {
        let state = UiState::new(FAQ_LEN, FaqConfig::default(), ScrollThresholds::default());
        assert_eq!(state.active_faq(), Some(0));
    }

    #[test]
    fn out_of_range_initial_entry_starts_collapsed() {
        let config = FaqConfig {
            initial_open: Some(FAQ_LEN),
            ..FaqConfig::default()
        };
        let state = UiState::new(FAQ_LEN, config, ScrollThresholds::default());
        assert_eq!(state.active_faq(), None);
    }

    #[test]
    fn at_most_one_entry_open_for_any_toggle_sequence() {
        for len in 1..=5 {
            for seq in sequences(len, FAQ_LEN) {
                let mut state = collapsed();
                for &index in &seq {
                    state.toggle_faq(index);
                    assert!(
                        open_count(&state) <= 1,
                        "more than one entry open after {:?}",
                        seq
                    );
                }
            }
        }
    }

    #[test]
    fn toggling_same_entry_twice_restores_state() {
        for start in [None, Some(0), Some(2)] {
            for index in 0..FAQ_LEN {
                let config = FaqConfig {
                    initial_open: start,
                    ..FaqConfig::default()
                };
                let mut state = UiState::new(FAQ_LEN, config, ScrollThresholds::default());
                state.toggle_faq(index);
                state.toggle_faq(index);
                let expected = if start == Some(index) { Some(index) } else { None };
                assert_eq!(state.active_faq(), expected);
            }
        }
    }

    #[test]
    fn opening_another_entry_closes_the_previous_one() {
        let mut state = collapsed();
        state.toggle_faq(1);
        state.toggle_faq(3);
        assert_eq!(state.active_faq(), Some(3));
        assert!(!state.faq().is_open(1));
    }

    #[test]
    fn multi_open_entries_toggle_independently() {
        let config = FaqConfig {
            initial_open: None,
            mode: AccordionMode::MultiOpen,
        };
        let mut state = UiState::new(FAQ_LEN, config, ScrollThresholds::default());
        state.toggle_faq(0);
        state.toggle_faq(2);
        assert_eq!(open_count(&state), 2);
        state.toggle_faq(0);
        assert!(!state.faq().is_open(0));
        assert!(state.faq().is_open(2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_toggle_fails_fast_in_debug() {
        collapsed().toggle_faq(FAQ_LEN);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn out_of_range_toggle_is_ignored_in_release() {
        let mut state = collapsed();
        state.toggle_faq(1);
        state.toggle_faq(FAQ_LEN + 3);
        assert_eq!(state.active_faq(), Some(1));
    }

    #[test]
    fn nav_flag_boundary() {
        let mut state = collapsed();
        state.on_scroll(20);
        assert!(!state.nav_scrolled());
        state.on_scroll(21);
        assert!(state.nav_scrolled());
        state.on_scroll(0);
        assert!(!state.nav_scrolled());
    }

    #[test]
    fn scroll_top_flag_boundary() {
        let mut state = collapsed();
        state.on_scroll(400);
        assert!(!state.scroll_top_visible());
        assert!(state.nav_scrolled());
        state.on_scroll(401);
        assert!(state.scroll_top_visible());
    }

    #[test]
    fn repeated_scroll_is_idempotent() {
        for offset in [0, 20, 21, 399, 400, 401, 5000] {
            let mut once = collapsed();
            once.on_scroll(offset);
            let mut many = collapsed();
            for _ in 0..5 {
                many.on_scroll(offset);
            }
            assert_eq!(once, many);
        }
    }

    #[test]
    fn toggle_nav_parity() {
        for flips in 0..6 {
            let mut state = collapsed();
            for _ in 0..flips {
                state.toggle_nav();
            }
            assert_eq!(state.nav_expanded(), flips % 2 == 1);
        }
    }

    #[test]
    fn close_nav_always_closes() {
        let mut state = collapsed();
        state.close_nav();
        assert!(!state.nav_expanded());
        state.toggle_nav();
        state.close_nav();
        assert!(!state.nav_expanded());
    }

    #[test]
    fn landing_page_walkthrough() {
        let mut state = collapsed();
        state.apply(UiAction::Scrolled(500));
        assert!(state.scroll_top_visible());
        assert!(state.nav_scrolled());
        state.apply(UiAction::ToggleFaq(2));
        assert_eq!(state.active_faq(), Some(2));
        state.apply(UiAction::ToggleFaq(0));
        assert_eq!(state.active_faq(), Some(0));
        assert!(!state.faq().is_open(2));
        state.apply(UiAction::ToggleFaq(0));
        assert_eq!(state.active_faq(), None);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(collapsed());
        let next = state.clone().reduce(UiAction::Scrolled(10));
        assert!(Rc::ptr_eq(&state, &next));
        let next = next.reduce(UiAction::CloseNav);
        assert!(Rc::ptr_eq(&state, &next));

        let scrolled = next.reduce(UiAction::Scrolled(450));
        assert!(!Rc::ptr_eq(&state, &scrolled));
        assert!(scrolled.scroll_top_visible());
    }

    #[test]
    fn custom_thresholds_are_respected() {
        let thresholds = ScrollThresholds { nav: 100, scroll_top: 200 };
        let mut state = UiState::new(FAQ_LEN, FaqConfig { initial_open: None, ..FaqConfig::default() }, thresholds);
        state.on_scroll(150);
        assert!(state.nav_scrolled());
        assert!(!state.scroll_top_visible());
    }
}
