use std::time::Duration;

use crate::site::TOOLTIP_DELAY;

/// How many list entries render inline before the rest move into a tooltip.
pub const INLINE_LIMIT: usize = 3;

/// A list split into what is shown inline and what hides behind the
/// "+N more" disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow<'a, T> {
    pub inline: &'a [T],
    pub hidden: &'a [T],
}

impl<'a, T> Overflow<'a, T> {
    pub fn split(items: &'a [T]) -> Self {
        let (inline, hidden) = items.split_at(items.len().min(INLINE_LIMIT));
        Self { inline, hidden }
    }

    pub fn has_disclosure(&self) -> bool {
        !self.hidden.is_empty()
    }

    /// Trigger text such as `+2 more features`, if anything is hidden.
    pub fn more_label(&self, noun: &str) -> Option<String> {
        self.has_disclosure()
            .then(|| format!("+{} more {noun}", self.hidden.len()))
    }
}

/// Identifies one pending open. Only the latest hover's ticket can open the
/// disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTicket(u64);

/// Hover state behind the "+N more" tooltip: opens once the delay after
/// entering has passed, closes immediately on leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverDisclosure {
    delay: Duration,
    hovers: u64,
    pending: Option<HoverTicket>,
    visible: bool,
}

impl Default for HoverDisclosure {
    fn default() -> Self {
        Self::new(TOOLTIP_DELAY)
    }
}

impl HoverDisclosure {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            hovers: 0,
            pending: None,
            visible: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer entered the trigger. The caller schedules
    /// [`HoverDisclosure::open`] with the returned ticket after [`Self::delay`].
    pub fn enter(&mut self) -> HoverTicket {
        self.hovers += 1;
        let ticket = HoverTicket(self.hovers);
        self.pending = Some(ticket);
        ticket
    }

    /// The delay for `ticket` ran out.
    pub fn open(&mut self, ticket: HoverTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
            self.visible = true;
        }
    }

    /// Pointer left the trigger. Cancels a pending open.
    pub fn leave(&mut self) {
        self.pending = None;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::content::{EXPERIENCES, PROJECTS};

    #[test]
    fn test_long_list_splits() {
        let items = ["a", "b", "c", "d", "e"];
        let overflow = Overflow::split(&items);
        assert_eq!(overflow.inline, &["a", "b", "c"]);
        assert_eq!(overflow.hidden, &["d", "e"]);
        assert!(overflow.has_disclosure());
        assert_eq!(
            overflow.more_label("highlights").as_deref(),
            Some("+2 more highlights")
        );
    }

    #[test]
    fn test_short_lists_have_no_disclosure() {
        for len in 0..=INLINE_LIMIT {
            let items = vec!["x"; len];
            let overflow = Overflow::split(&items);
            assert_eq!(overflow.inline.len(), len);
            assert!(overflow.hidden.is_empty());
            assert!(!overflow.has_disclosure());
            assert_eq!(overflow.more_label("features"), None);
        }
    }

    #[test]
    fn test_site_content() {
        let bite_code = Overflow::split(PROJECTS[0].features);
        assert_eq!(bite_code.inline.len(), 3);
        assert_eq!(
            bite_code.more_label("features").as_deref(),
            Some("+2 more features")
        );

        let education = Overflow::split(EXPERIENCES[0].highlights);
        assert_eq!(
            education.more_label("highlights").as_deref(),
            Some("+3 more highlights")
        );
    }

    #[test]
    fn test_hover_waits_for_timer() {
        let mut disclosure = HoverDisclosure::default();
        assert_eq!(disclosure.delay(), Duration::from_millis(300));

        let ticket = disclosure.enter();
        assert!(!disclosure.is_visible());

        disclosure.open(ticket);
        assert!(disclosure.is_visible());
    }

    #[test]
    fn test_leave_hides_at_once() {
        let mut disclosure = HoverDisclosure::default();
        let ticket = disclosure.enter();
        disclosure.open(ticket);

        disclosure.leave();
        assert!(!disclosure.is_visible());
    }

    #[test]
    fn test_leave_cancels_pending_open() {
        let mut disclosure = HoverDisclosure::default();
        let first = disclosure.enter();
        disclosure.leave();
        disclosure.open(first);
        assert!(!disclosure.is_visible());

        // a stale timer from an earlier hover cannot open a newer one early
        let second = disclosure.enter();
        disclosure.open(first);
        assert!(!disclosure.is_visible());
        disclosure.open(second);
        assert!(disclosure.is_visible());
    }

    /// Drives the disclosure the way the tooltip does: a timer per hover.
    fn hover(disclosure: &Rc<RefCell<HoverDisclosure>>) {
        let ticket = disclosure.borrow_mut().enter();
        let delay = disclosure.borrow().delay();
        let disclosure = Rc::clone(disclosure);
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            disclosure.borrow_mut().open(ticket);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_opens_only_after_delay() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let disclosure = Rc::new(RefCell::new(HoverDisclosure::default()));

                hover(&disclosure);
                tokio::time::sleep(Duration::from_millis(299)).await;
                assert!(!disclosure.borrow().is_visible());

                tokio::time::sleep(Duration::from_millis(2)).await;
                assert!(disclosure.borrow().is_visible());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_early_leave_never_opens() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let disclosure = Rc::new(RefCell::new(HoverDisclosure::default()));

                hover(&disclosure);
                tokio::time::sleep(Duration::from_millis(100)).await;
                disclosure.borrow_mut().leave();

                tokio::time::sleep(Duration::from_millis(500)).await;
                assert!(!disclosure.borrow().is_visible());
            })
            .await;
    }
}
