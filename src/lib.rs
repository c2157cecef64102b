use log::debug;

/// Default engine parameters
pub mod defaults {
    /// Carousel transition lock, in milliseconds. Fixed-duration debounce,
    /// deliberately decoupled from whatever CSS transition the theme runs.
    pub const ANIMATION_LOCK_MS: u32 = 800;
    /// Countdown tick period in milliseconds.
    pub const TICK_MS: u32 = 1_000;
    /// Rolling offer window: 22 hours in milliseconds.
    pub const OFFER_INTERVAL_MS: i64 = 22 * 60 * 60 * 1_000;
    /// Storage slot holding the shared offer deadline, as a decimal
    /// millisecond timestamp string.
    pub const OFFER_STORAGE_KEY: &str = "estudio_offer_deadline";
}

/// Visual category a card occupies relative to the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Center,
    Next,
    NextFar,
    Previous,
    PreviousFar,
    Hidden,
}

impl Slot {
    /// CSS class the stylesheet keys the card positions on.
    pub fn class_name(self) -> &'static str {
        match self {
            Slot::Center => "center",
            Slot::Next => "right-1",
            Slot::NextFar => "right-2",
            Slot::Previous => "left-1",
            Slot::PreviousFar => "left-2",
            Slot::Hidden => "hidden",
        }
    }
}

/// Rotating showcase state machine: a fixed set of cards cycles through
/// five visible positional slots around the active index.
///
/// The engine is pure; the view layer owns the clock. After every
/// successful transition the engine locks itself and stays locked until
/// [`Carousel::release`], so the caller decides the lock duration
/// (see [`defaults::ANIMATION_LOCK_MS`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    animating: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            animating: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the card currently in the center slot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether a transition lock is in effect.
    pub fn is_locked(&self) -> bool {
        self.animating
    }

    /// Activate a card and return the new slot assignment for every card.
    ///
    /// `target` may be any integer; it is normalized into `0..len` by
    /// euclidean modulo, so stepping past either end wraps around. Returns
    /// `None` without touching any state when the engine is empty or a
    /// transition is already in progress; in particular a rejected call
    /// does NOT restart the running lock.
    pub fn set_active(&mut self, target: isize) -> Option<Vec<Slot>> {
        if self.len == 0 {
            return None;
        }
        if self.animating {
            debug!("carousel locked, ignoring set_active({})", target);
            return None;
        }
        self.animating = true;
        self.current = target.rem_euclid(self.len as isize) as usize;
        Some(self.slots())
    }

    /// Activate the card `delta` steps away from the current one.
    pub fn step(&mut self, delta: isize) -> Option<Vec<Slot>> {
        self.set_active(self.current as isize + delta)
    }

    /// Clear the transition lock.
    pub fn release(&mut self) {
        self.animating = false;
    }

    /// Slot assignment for every card given the current index.
    pub fn slots(&self) -> Vec<Slot> {
        (0..self.len).map(|i| self.slot_of(i)).collect()
    }

    /// Classify one card by its circular offset from the active index.
    /// Offsets 1 and 2 take precedence over the wrap-around distances, so
    /// tiny decks (2 or 3 cards) fill the forward slots first.
    pub fn slot_of(&self, index: usize) -> Slot {
        let offset = (index + self.len - self.current) % self.len;
        if offset == 0 {
            Slot::Center
        } else if offset == 1 {
            Slot::Next
        } else if offset == 2 {
            Slot::NextFar
        } else if offset == self.len - 1 {
            Slot::Previous
        } else if offset == self.len - 2 {
            Slot::PreviousFar
        } else {
            Slot::Hidden
        }
    }

    /// Per-dot active flags. Exactly one is set whenever the deck is
    /// non-empty: the dot matching the current index.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.len).map(|i| i == self.current).collect()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Rolling countdown

/// Outcome of resolving the stored offer deadline against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineState {
    /// Absolute deadline in epoch milliseconds.
    pub deadline_ms: i64,
    /// True when a fresh deadline was computed and must be written back.
    pub renewed: bool,
}

/// Resolve the persisted deadline: keep a stored value that is still in the
/// future, otherwise advance in whole intervals until the deadline is ahead
/// of `now_ms` and flag it for write-back. Absent and unparseable stored
/// values take the same renewal path.
pub fn resolve_deadline(stored_ms: Option<i64>, now_ms: i64, interval_ms: i64) -> DeadlineState {
    debug_assert!(interval_ms > 0);
    if let Some(deadline) = stored_ms {
        if deadline > now_ms {
            return DeadlineState {
                deadline_ms: deadline,
                renewed: false,
            };
        }
        debug!("offer deadline {} elapsed, renewing", deadline);
    }
    let mut deadline = now_ms;
    while deadline <= now_ms {
        deadline += interval_ms;
    }
    DeadlineState {
        deadline_ms: deadline,
        renewed: true,
    }
}

/// Clock components of a remaining duration.
///
/// Hours wrap at 24 because the banner has no day field; with the 22-hour
/// offer window the wrap never shows, but the decomposition stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeParts {
    /// Decompose a duration; negative input clamps to zero so the display
    /// never renders a negative component.
    pub fn from_ms(remaining_ms: i64) -> Self {
        let ms = remaining_ms.max(0);
        Self {
            hours: ((ms % (24 * 60 * 60 * 1_000)) / (60 * 60 * 1_000)) as u32,
            minutes: ((ms % (60 * 60 * 1_000)) / (60 * 1_000)) as u32,
            seconds: ((ms % (60 * 1_000)) / 1_000) as u32,
        }
    }
}

/// Two-digit zero-padded rendering for the banner digits.
#[inline]
pub fn format_two_digits(value: u32) -> String {
    format!("{:02}", value)
}

/// One countdown tick: resolve the deadline and decompose what remains.
///
/// When the stored deadline has elapsed the renewal happens inside the same
/// tick, so the caller renders the corrected remainder immediately instead
/// of waiting a period.
pub fn countdown_tick(
    stored_ms: Option<i64>,
    now_ms: i64,
    interval_ms: i64,
) -> (DeadlineState, TimeParts) {
    let state = resolve_deadline(stored_ms, now_ms, interval_ms);
    (state, TimeParts::from_ms(state.deadline_ms - now_ms))
}

pub mod contact;
pub mod tools;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_active_wraps_by_modulo() {
        let mut a = Carousel::new(5);
        let mut b = Carousel::new(5);
        for raw in [-7isize, -1, 3, 8, 13] {
            let normalized = raw.rem_euclid(5);
            a.release();
            b.release();
            assert_eq!(a.set_active(raw), b.set_active(normalized));
            assert_eq!(a.current(), b.current());
        }
    }

    #[test]
    fn slot_layout_for_five_cards() {
        let mut c = Carousel::new(5);
        let slots = c.set_active(0).unwrap();
        assert_eq!(
            slots,
            vec![
                Slot::Center,
                Slot::Next,
                Slot::NextFar,
                Slot::PreviousFar,
                Slot::Previous,
            ]
        );
    }

    #[test]
    fn slot_layout_for_many_cards_hides_the_rest() {
        let mut c = Carousel::new(7);
        let slots = c.set_active(0).unwrap();
        assert_eq!(slots[0], Slot::Center);
        assert_eq!(slots[1], Slot::Next);
        assert_eq!(slots[2], Slot::NextFar);
        assert_eq!(slots[3], Slot::Hidden);
        assert_eq!(slots[4], Slot::Hidden);
        assert_eq!(slots[5], Slot::PreviousFar);
        assert_eq!(slots[6], Slot::Previous);
    }

    #[test]
    fn tiny_decks_fill_forward_slots_first() {
        let mut two = Carousel::new(2);
        assert_eq!(two.set_active(0).unwrap(), vec![Slot::Center, Slot::Next]);

        let mut three = Carousel::new(3);
        assert_eq!(
            three.set_active(0).unwrap(),
            vec![Slot::Center, Slot::Next, Slot::NextFar]
        );

        let mut four = Carousel::new(4);
        assert_eq!(
            four.set_active(0).unwrap(),
            vec![Slot::Center, Slot::Next, Slot::NextFar, Slot::Previous]
        );
    }

    #[test]
    fn locked_engine_ignores_activation() {
        let mut c = Carousel::new(5);
        c.set_active(2).unwrap();
        assert!(c.is_locked());
        assert_eq!(c.set_active(4), None);
        assert_eq!(c.current(), 2);
        assert_eq!(c.step(1), None);
        c.release();
        assert!(c.set_active(4).is_some());
        assert_eq!(c.current(), 4);
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut c = Carousel::new(0);
        assert_eq!(c.set_active(0), None);
        assert_eq!(c.step(-1), None);
        assert!(!c.is_locked());
        assert!(c.indicators().is_empty());
    }

    #[test]
    fn exactly_one_indicator_active() {
        let mut c = Carousel::new(5);
        for raw in [0isize, 3, -2, 9] {
            c.release();
            c.set_active(raw);
            let active: Vec<usize> = c
                .indicators()
                .iter()
                .enumerate()
                .filter_map(|(i, &on)| on.then_some(i))
                .collect();
            assert_eq!(active, vec![c.current()]);
        }
    }

    #[test]
    fn step_moves_relative_to_current() {
        let mut c = Carousel::new(5);
        c.set_active(0);
        c.release();
        c.step(1);
        assert_eq!(c.current(), 1);
        c.release();
        c.step(-2);
        assert_eq!(c.current(), 4);
    }

    #[test]
    fn future_deadline_is_kept() {
        let state = resolve_deadline(Some(10_000), 4_000, defaults::OFFER_INTERVAL_MS);
        assert_eq!(state.deadline_ms, 10_000);
        assert!(!state.renewed);
    }

    #[test]
    fn elapsed_or_missing_deadline_renews_into_the_future() {
        let interval = defaults::OFFER_INTERVAL_MS;
        for stored in [None, Some(0), Some(999), Some(1_000)] {
            let state = resolve_deadline(stored, 1_000, interval);
            assert!(state.renewed);
            assert_eq!(state.deadline_ms, 1_000 + interval);
        }
    }

    #[test]
    fn tick_self_corrects_on_expiry() {
        let interval = defaults::OFFER_INTERVAL_MS;
        let (state, parts) = countdown_tick(Some(5_000), 6_000, interval);
        assert!(state.renewed);
        // the corrected remainder renders immediately: a full window
        assert_eq!(parts, TimeParts::from_ms(interval));
        assert_eq!(parts.hours, 22);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 0);
    }

    #[test]
    fn time_parts_never_negative() {
        let parts = TimeParts::from_ms(-12_345);
        assert_eq!(
            parts,
            TimeParts {
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn time_parts_decomposition() {
        // 3h 07m 09s
        let parts = TimeParts::from_ms(3 * 3_600_000 + 7 * 60_000 + 9_000);
        assert_eq!(parts.hours, 3);
        assert_eq!(parts.minutes, 7);
        assert_eq!(parts.seconds, 9);
    }

    #[test]
    fn hours_wrap_at_twenty_four() {
        let parts = TimeParts::from_ms(25 * 3_600_000);
        assert_eq!(parts.hours, 1);
    }

    #[test]
    fn two_digit_padding() {
        assert_eq!(format_two_digits(4), "04");
        assert_eq!(format_two_digits(12), "12");
        assert_eq!(format_two_digits(0), "00");
    }
}
