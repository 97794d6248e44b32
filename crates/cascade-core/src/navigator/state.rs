//! The navigator state machine.
//!
//! Owns the page sequence and the cursor, serializes every navigation
//! request into single-step transitions guarded by the cooldown lock,
//! and notifies registered observers synchronously after each accepted
//! transition.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, Result};
use crate::page::Page;

use super::guard::TransitionGuard;
use super::visibility::{self, Visibility};

/// Payload delivered to observers after every accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub current_index: usize,
    pub total_pages: usize,
}

/// Named navigation commands for external collaborators (indicator
/// clicks, voice-style dispatch) that address operations by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
    First,
    Last,
    Jump(usize),
}

type Observer = Box<dyn FnMut(&PageChange)>;

/// Paginated scroll navigator.
///
/// Construction requires a non-empty deck; the first page starts active
/// and focused. `advance`/`retreat` are debounced by the cooldown lock,
/// `jump_to` deliberately bypasses it so direct navigation stays
/// responsive during the cooldown window.
pub struct PageNavigator<P: Page> {
    pages: Vec<P>,
    current: usize,
    visibility: Vec<Visibility>,
    guard: TransitionGuard,
    observers: Vec<Observer>,
}

impl<P: Page> PageNavigator<P> {
    pub fn new(mut pages: Vec<P>, cooldown: Duration) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyDeck);
        }
        let visibility = visibility::project_all(pages.len(), 0);
        pages[0].focus();
        debug!(total = pages.len(), "navigator initialized");
        Ok(Self {
            pages,
            current: 0,
            visibility,
            guard: TransitionGuard::new(cooldown),
            observers: Vec::new(),
        })
    }

    /// Register an observer invoked synchronously after every accepted
    /// transition, including direct jumps.
    pub fn on_page_change(&mut self, observer: impl FnMut(&PageChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn visibility(&self, index: usize) -> Visibility {
        self.visibility
            .get(index)
            .copied()
            .unwrap_or(Visibility::Hidden)
    }

    pub fn page(&self, index: usize) -> Option<&P> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut P> {
        self.pages.get_mut(index)
    }

    pub fn active_page(&self) -> &P {
        &self.pages[self.current]
    }

    pub fn active_page_mut(&mut self) -> &mut P {
        &mut self.pages[self.current]
    }

    pub fn is_locked(&self) -> bool {
        self.guard.is_locked(Instant::now())
    }

    pub(crate) fn is_locked_at(&self, now: Instant) -> bool {
        self.guard.is_locked(now)
    }

    /// Step to the next page. Returns `false` at the last page or while
    /// the cooldown lock is engaged.
    pub fn advance(&mut self) -> bool {
        self.advance_at(Instant::now())
    }

    pub fn advance_at(&mut self, now: Instant) -> bool {
        if self.current + 1 >= self.pages.len() {
            return false;
        }
        if self.guard.is_locked(now) {
            return false;
        }
        self.guard.engage(now);
        self.activate(self.current + 1);
        true
    }

    /// Step to the previous page. Returns `false` at the first page or
    /// while the cooldown lock is engaged.
    pub fn retreat(&mut self) -> bool {
        self.retreat_at(Instant::now())
    }

    pub fn retreat_at(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        if self.guard.is_locked(now) {
            return false;
        }
        self.guard.engage(now);
        self.activate(self.current - 1);
        true
    }

    /// Jump directly to `index`, clamped into range. Bypasses the
    /// cooldown lock and always succeeds.
    pub fn jump_to(&mut self, index: usize) {
        let index = index.min(self.pages.len() - 1);
        self.activate(index);
    }

    /// Dispatch a named command. `Jump` clamps like `jump_to` and always
    /// reports success.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Advance => self.advance(),
            NavCommand::Retreat => self.retreat(),
            NavCommand::First => {
                self.jump_to(0);
                true
            }
            NavCommand::Last => {
                self.jump_to(self.pages.len() - 1);
                true
            }
            NavCommand::Jump(index) => {
                self.jump_to(index);
                true
            }
        }
    }

    /// Re-render hook for viewport resizes: recompute the visibility
    /// projection without touching the cursor, lock, or timestamps.
    pub fn refresh(&mut self) {
        self.visibility = visibility::project_all(self.pages.len(), self.current);
    }

    fn activate(&mut self, index: usize) {
        self.current = index;
        self.visibility = visibility::project_all(self.pages.len(), index);
        self.pages[index].focus();
        debug!(index, "page activated");
        let change = PageChange {
            current_index: index,
            total_pages: self.pages.len(),
        };
        for observer in self.observers.iter_mut() {
            observer(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::navigator::testutil::{deck, TestPage};

    fn nav(n: usize) -> PageNavigator<TestPage> {
        PageNavigator::new(deck(n), Duration::from_millis(600)).unwrap()
    }

    #[test]
    fn test_empty_deck_fails() {
        let result = PageNavigator::new(Vec::<TestPage>::new(), Duration::from_millis(600));
        assert!(matches!(result, Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_initial_state() {
        let nav = nav(3);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.total_pages(), 3);
        assert_eq!(nav.visibility(0), Visibility::Active);
        assert_eq!(nav.visibility(1), Visibility::Next);
        assert_eq!(nav.visibility(2), Visibility::Hidden);
        assert!(nav.page(0).unwrap().focused);
    }

    #[test]
    fn test_advance_steps_once_per_cooldown() {
        let mut nav = nav(5);
        let t0 = Instant::now();
        assert!(nav.advance_at(t0));
        // Burst of advances inside the window: all rejected.
        for ms in [50, 100, 300, 599] {
            assert!(!nav.advance_at(t0 + Duration::from_millis(ms)));
        }
        assert_eq!(nav.current_index(), 1);
        // Window expired: next step accepted.
        assert!(nav.advance_at(t0 + Duration::from_millis(600)));
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_advance_noop_at_last_page() {
        let mut nav = nav(2);
        let t0 = Instant::now();
        assert!(nav.advance_at(t0));
        assert!(!nav.advance_at(t0 + Duration::from_secs(1)));
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.visibility(1), Visibility::Active);
    }

    #[test]
    fn test_retreat_noop_at_first_page() {
        let mut nav = nav(3);
        assert!(!nav.retreat_at(Instant::now()));
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.visibility(0), Visibility::Active);
    }

    #[test]
    fn test_retreat_symmetry() {
        let mut nav = nav(3);
        let t0 = Instant::now();
        assert!(nav.advance_at(t0));
        let t1 = t0 + Duration::from_secs(1);
        assert!(!nav.retreat_at(t0 + Duration::from_millis(100)));
        assert!(nav.retreat_at(t1));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_jump_to_clamps_both_ends() {
        let mut nav = nav(5);
        nav.jump_to(100);
        assert_eq!(nav.current_index(), 4);
        nav.jump_to(0);
        assert_eq!(nav.current_index(), 0);
        nav.jump_to(2);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_jump_bypasses_lock() {
        let mut nav = nav(5);
        let t0 = Instant::now();
        assert!(nav.advance_at(t0));
        assert!(nav.is_locked_at(t0 + Duration::from_millis(10)));
        nav.jump_to(0);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_jump_refocuses_target() {
        let mut nav = nav(4);
        nav.jump_to(3);
        assert!(nav.page(3).unwrap().focused);
    }

    #[test]
    fn test_observer_notified_on_every_transition() {
        let seen: Rc<RefCell<Vec<PageChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut nav = nav(4);
        nav.on_page_change(move |change| sink.borrow_mut().push(*change));

        let t0 = Instant::now();
        nav.advance_at(t0);
        nav.advance_at(t0 + Duration::from_millis(100)); // rejected, no event
        nav.jump_to(3);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].current_index, 1);
        assert_eq!(seen[1].current_index, 3);
        assert_eq!(seen[1].total_pages, 4);
    }

    #[test]
    fn test_apply_commands() {
        let mut nav = nav(5);
        assert!(nav.apply(NavCommand::Last));
        assert_eq!(nav.current_index(), 4);
        assert!(nav.apply(NavCommand::First));
        assert_eq!(nav.current_index(), 0);
        assert!(nav.apply(NavCommand::Jump(2)));
        assert_eq!(nav.current_index(), 2);
        // Step commands still honor the lock.
        let accepted = nav.apply(NavCommand::Advance);
        assert!(accepted);
        assert!(!nav.apply(NavCommand::Advance));
    }

    #[test]
    fn test_refresh_keeps_cursor_and_lock() {
        let mut nav = nav(3);
        let t0 = Instant::now();
        nav.advance_at(t0);
        nav.refresh();
        assert_eq!(nav.current_index(), 1);
        assert!(nav.is_locked_at(t0 + Duration::from_millis(10)));
        assert_eq!(nav.visibility(0), Visibility::Previous);
        assert_eq!(nav.visibility(2), Visibility::Next);
    }
}
