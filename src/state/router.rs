use log::{debug, info};
use yew_router::prelude::*;

use crate::config;
use crate::state::timers::{Ticket, TimerSlot};

/// The three pages. Unknown paths resolve to the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Routable)]
pub enum View {
    #[at("/")]
    #[not_found]
    Home,
    #[at("/prenota")]
    Booking,
    #[at("/contatti")]
    Contact,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Booking, View::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Booking => "Prenotazione",
            View::Contact => "Contatti",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterEffect {
    /// Call `commit(ticket)` once `delay_ms` have passed.
    CommitAfter { ticket: Ticket, delay_ms: u32 },
    /// Smooth-scroll the window back to the top. `push` is false when the
    /// address bar already shows `view`.
    ScrollToTop { view: View, push: bool },
}

/// Which page is showing, and which one we are fading to.
#[derive(Debug)]
pub struct ViewRouter {
    current: View,
    pending: Option<View>,
    /// The view the browser location points at.
    address: View,
    timer: TimerSlot,
}

impl ViewRouter {
    pub fn new(initial: View) -> Self {
        Self {
            current: initial,
            pending: None,
            address: initial,
            timer: TimerSlot::new(),
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests a switch. At most one request is pending; a newer target
    /// replaces an older one and the older commit is dropped.
    pub fn navigate_to(&mut self, view: View) -> Option<RouterEffect> {
        if self.pending == Some(view) {
            return None;
        }
        if view == self.current {
            if let Some(dropped) = self.pending.take() {
                debug!("navigation to {:?} dropped, staying on {:?}", dropped, view);
                self.timer.cancel();
            }
            return None;
        }

        if let Some(dropped) = self.pending.replace(view) {
            debug!("navigation to {:?} superseded by {:?}", dropped, view);
        }
        let ticket = self.timer.arm();
        Some(RouterEffect::CommitAfter { ticket, delay_ms: config::VIEW_TRANSITION_MS })
    }

    /// The browser location changed underneath us (back/forward, or our own
    /// push echoing back). Goes through the same transition as a click.
    pub fn location_changed(&mut self, view: View) -> Option<RouterEffect> {
        self.address = view;
        self.navigate_to(view)
    }

    /// Timer callback that ends the transition window.
    pub fn commit(&mut self, ticket: Ticket) -> Option<RouterEffect> {
        if !self.timer.fire(ticket) {
            return None;
        }
        let view = self.pending.take()?;
        info!("view {:?} -> {:?}", self.current, view);
        self.current = view;
        let push = self.address != view;
        self.address = view;
        Some(RouterEffect::ScrollToTop { view, push })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timers::testing::ManualClock;

    fn drive(clock: &mut ManualClock, effect: Option<RouterEffect>) {
        if let Some(RouterEffect::CommitAfter { ticket, delay_ms }) = effect {
            clock.schedule(ticket, delay_ms);
        }
    }

    #[test]
    fn navigating_to_current_view_is_a_noop() {
        let mut router = ViewRouter::new(View::Home);
        assert_eq!(router.navigate_to(View::Home), None);
        assert!(!router.is_transitioning());
    }

    #[test]
    fn switch_happens_after_the_transition_window() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Home);

        let effect = router.navigate_to(View::Contact);
        drive(&mut clock, effect);
        assert!(router.is_transitioning());
        assert_eq!(router.current(), View::Home);

        assert!(clock.advance(299).is_empty());
        let due = clock.advance(1);
        assert_eq!(due.len(), 1);
        assert_eq!(router.commit(due[0]), Some(RouterEffect::ScrollToTop { view: View::Contact, push: true }));
        assert_eq!(router.current(), View::Contact);
        assert!(!router.is_transitioning());
    }

    #[test]
    fn double_navigation_changes_view_exactly_once() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Home);
        let mut seen = vec![router.current()];

        let first = router.navigate_to(View::Booking);
        drive(&mut clock, first);
        clock.advance(100);
        let second = router.navigate_to(View::Booking);
        drive(&mut clock, second);

        for _ in 0..10 {
            for ticket in clock.advance(50) {
                router.commit(ticket);
            }
            if seen.last() != Some(&router.current()) {
                seen.push(router.current());
            }
        }
        assert_eq!(seen, vec![View::Home, View::Booking]);
    }

    #[test]
    fn last_request_wins_without_flicker() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Home);
        let mut changes = Vec::new();

        let first = router.navigate_to(View::Booking);
        drive(&mut clock, first);
        clock.advance(200);
        let second = router.navigate_to(View::Contact);
        drive(&mut clock, second);

        for ticket in clock.advance(1_000) {
            if let Some(RouterEffect::ScrollToTop { view, .. }) = router.commit(ticket) {
                changes.push(view);
            }
        }
        assert_eq!(changes, vec![View::Contact]);
    }

    #[test]
    fn returning_to_current_view_drops_the_pending_request() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Home);

        let effect = router.navigate_to(View::Booking);
        drive(&mut clock, effect);
        assert_eq!(router.navigate_to(View::Home), None);
        assert!(!router.is_transitioning());

        for ticket in clock.advance(300) {
            assert_eq!(router.commit(ticket), None);
        }
        assert_eq!(router.current(), View::Home);
    }

    #[test]
    fn paths_resolve_and_unknown_paths_go_home() {
        for view in View::ALL {
            assert_eq!(View::recognize(&view.to_path()), Some(view));
        }
        assert_eq!(View::Booking.to_path(), "/prenota");
        assert_eq!(View::not_found_route(), Some(View::Home));
    }

    #[test]
    fn back_button_switches_view_without_pushing_history() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Home);

        let effect = router.navigate_to(View::Booking);
        drive(&mut clock, effect);
        let ticket = clock.advance(300)[0];
        assert_eq!(
            router.commit(ticket),
            Some(RouterEffect::ScrollToTop { view: View::Booking, push: true })
        );
        // Our own push is reported back by the location listener.
        assert_eq!(router.location_changed(View::Booking), None);

        let effect = router.location_changed(View::Home);
        assert!(matches!(effect, Some(RouterEffect::CommitAfter { .. })));
        drive(&mut clock, effect);
        assert_eq!(router.current(), View::Booking);

        let ticket = clock.advance(300)[0];
        assert_eq!(
            router.commit(ticket),
            Some(RouterEffect::ScrollToTop { view: View::Home, push: false })
        );
        assert_eq!(router.current(), View::Home);
    }

    #[test]
    fn click_after_back_button_pushes_the_clicked_view() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Booking);

        let effect = router.location_changed(View::Home);
        drive(&mut clock, effect);
        clock.advance(100);
        let effect = router.navigate_to(View::Contact);
        drive(&mut clock, effect);

        let mut commits = Vec::new();
        for ticket in clock.advance(300) {
            commits.extend(router.commit(ticket));
        }
        assert_eq!(commits, vec![RouterEffect::ScrollToTop { view: View::Contact, push: true }]);
    }

    #[test]
    fn back_button_during_transition_cancels_it() {
        let mut clock = ManualClock::new();
        let mut router = ViewRouter::new(View::Home);

        let effect = router.navigate_to(View::Contact);
        drive(&mut clock, effect);
        assert_eq!(router.location_changed(View::Home), None);
        assert!(!router.is_transitioning());

        for ticket in clock.advance(300) {
            assert_eq!(router.commit(ticket), None);
        }
        assert_eq!(router.current(), View::Home);
    }
}
