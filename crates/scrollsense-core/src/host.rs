//! Host collaborators the controller drives
//!
//! A host supplies the scroll offset, the header element being decorated, and
//! the document whose top space is reserved while the header is sticky.
//! [`HeadlessHost`] keeps all of it in memory.

use std::collections::BTreeSet;

use crate::presentation::PresentationHint;

/// Handle returned by [`ScrollSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Source of the viewport's vertical scroll offset
pub trait ScrollSource {
    fn scroll_offset(&self) -> f64;

    /// Start delivering offset changes to the controller
    fn subscribe(&mut self) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// The header element
pub trait HeaderSurface {
    /// Rendered height of the header, `None` when there is nothing mounted
    fn extent(&self) -> Option<f64>;

    fn apply_hint(&mut self, hint: PresentationHint);

    fn remove_hint(&mut self, hint: PresentationHint);

    fn has_hint(&self, hint: PresentationHint) -> bool;

    /// Vertical translation; negative values move the header out of view
    fn set_translate_y(&mut self, y: f64);
}

/// The document that compensates for the header leaving normal flow
pub trait LayoutReservation {
    /// Reserve `space` at the top of the document (0 releases it)
    fn reserve_top(&mut self, space: f64);
}

pub trait HeaderHost: ScrollSource + HeaderSurface + LayoutReservation {}

impl<T: ScrollSource + HeaderSurface + LayoutReservation> HeaderHost for T {}

/// In-memory host used by the CLI trace, the terminal demo and tests
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    offset: f64,
    extent: Option<f64>,
    hints: BTreeSet<PresentationHint>,
    translate_y: f64,
    reserved_top: f64,
    subscriptions: BTreeSet<SubscriptionId>,
    next_subscription: u64,
}

impl HeadlessHost {
    /// Host with a mounted header of the given height
    pub fn new(extent: f64) -> Self {
        Self {
            extent: Some(extent),
            ..Default::default()
        }
    }

    /// Host with no header mounted
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn set_extent(&mut self, extent: Option<f64>) {
        self.extent = extent;
    }

    pub fn hints(&self) -> impl Iterator<Item = PresentationHint> + '_ {
        self.hints.iter().copied()
    }

    /// Space-separated class names of the applied hints
    pub fn hint_classes(&self) -> String {
        self.hints
            .iter()
            .map(|h| h.class_name())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn translate_y(&self) -> f64 {
        self.translate_y
    }

    pub fn reserved_top(&self) -> f64 {
        self.reserved_top
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl ScrollSource for HeadlessHost {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.insert(id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }
}

impl HeaderSurface for HeadlessHost {
    fn extent(&self) -> Option<f64> {
        self.extent
    }

    fn apply_hint(&mut self, hint: PresentationHint) {
        self.hints.insert(hint);
    }

    fn remove_hint(&mut self, hint: PresentationHint) {
        self.hints.remove(&hint);
    }

    fn has_hint(&self, hint: PresentationHint) -> bool {
        self.hints.contains(&hint)
    }

    fn set_translate_y(&mut self, y: f64) {
        self.translate_y = y;
    }
}

impl LayoutReservation for HeadlessHost {
    fn reserve_top(&mut self, space: f64) {
        self.reserved_top = space;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriptions_are_tracked() {
        let mut host = HeadlessHost::new(64.0);
        let a = host.subscribe();
        let b = host.subscribe();
        assert_ne!(a, b);
        assert_eq!(host.subscriber_count(), 2);

        host.unsubscribe(a);
        host.unsubscribe(a);
        assert_eq!(host.subscriber_count(), 1);
    }

    #[test]
    fn test_hint_classes_sorted() {
        let mut host = HeadlessHost::new(64.0);
        host.apply_hint(PresentationHint::Hidden);
        host.apply_hint(PresentationHint::Sticky);
        host.apply_hint(PresentationHint::Sticky);
        assert_eq!(
            host.hint_classes(),
            "scroll-sense-header--sticky scroll-sense-header--hidden"
        );
    }

    #[test]
    fn test_unmounted_has_no_extent() {
        assert_eq!(HeadlessHost::unmounted().extent(), None);
        assert_eq!(HeadlessHost::new(10.0).extent(), Some(10.0));
    }
}
