//! Slider lifecycle notifications and the observer list that receives them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Layout;
use crate::gesture::PointerSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
/// When an event fires relative to the action it reports.
pub enum Phase {
    /// Ahead of the action.
    Before,
    /// Once the action is committed.
    After,
    /// Pointer and resize notifications, which have no before or after.
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
/// What happened.
pub enum EventKind {
    /// Setup.
    Init,
    /// A committed move.
    Slide,
    /// Teardown.
    Destroy,
    /// Pointer down.
    TouchStart,
    /// Pointer move.
    TouchMove,
    /// Pointer up or cancel.
    TouchEnd,
    /// Frame width change.
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
/// Data carried by an event.
pub enum EventPayload {
    /// Nothing beyond the phase and kind.
    None,
    /// Before a slide: the current index and the nominal next one.
    SlideStart {
        /// Padded index before the move.
        index: usize,
        /// Nominal target, before clamping or wrapping.
        next_slide: isize,
    },
    /// After a slide: where it came from and where it settled.
    SlideDone {
        /// Padded index before the move.
        previous_index: usize,
        /// Padded index after the move and any re-seat.
        current_slide: usize,
    },
    /// The pointer sample that raised the event.
    Pointer {
        /// Raw sample as forwarded by the host.
        sample: PointerSample,
    },
    /// Layout in effect after a resize.
    Resize {
        /// Frame and slide widths now applied.
        layout: Layout,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// One lifecycle notification, displayed as `<phase>.slidetrack.<kind>`.
pub struct SliderEvent {
    /// Timing relative to the action.
    pub phase: Phase,
    /// The action.
    pub kind: EventKind,
    /// Action details.
    pub payload: EventPayload,
}

impl SliderEvent {
    /// Event without a payload.
    pub fn new(phase: Phase, kind: EventKind) -> Self {
        Self {
            phase,
            kind,
            payload: EventPayload::None,
        }
    }

    /// Attach `payload`.
    pub fn with_payload(mut self, payload: EventPayload) -> Self {
        self.payload = payload;
        self
    }
}

impl fmt::Display for SliderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            Phase::Before => "before",
            Phase::After => "after",
            Phase::On => "on",
        };
        let kind = match self.kind {
            EventKind::Init => "init",
            EventKind::Slide => "slide",
            EventKind::Destroy => "destroy",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::Resize => "resize",
        };
        write!(f, "{phase}.slidetrack.{kind}")
    }
}

/// Receives slider notifications.
pub trait SliderObserver {
    /// Called synchronously, in subscription order.
    fn notify(&mut self, event: &SliderEvent);
}

impl<F> SliderObserver for F
where
    F: FnMut(&SliderEvent),
{
    fn notify(&mut self, event: &SliderEvent) {
        self(event)
    }
}

/// Ordered list of observers injected into a slider.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn SliderObserver + Send>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EventBus {
    /// Bus with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; it runs after those already subscribed.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: SliderObserver + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Builder-style [`subscribe`](Self::subscribe).
    pub fn with<O>(mut self, observer: O) -> Self
    where
        O: SliderObserver + Send + 'static,
    {
        self.subscribe(observer);
        self
    }

    /// Number of subscribed observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `event` to every observer.
    pub fn emit(&mut self, event: SliderEvent) {
        tracing::trace!(%event, "dispatch");
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn observers_run_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&seen);
        let second = Arc::clone(&seen);
        let mut bus = EventBus::new()
            .with(move |e: &SliderEvent| {
                first.lock().unwrap().push(("first", e.kind))
            })
            .with(move |e: &SliderEvent| {
                second.lock().unwrap().push(("second", e.kind))
            });

        bus.emit(SliderEvent::new(Phase::Before, EventKind::Init));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![("first", EventKind::Init), ("second", EventKind::Init)]
        );
    }

    #[test]
    fn event_names_follow_phase_and_kind() {
        let event = SliderEvent::new(Phase::After, EventKind::Slide);
        assert_eq!(event.to_string(), "after.slidetrack.slide");
        let event = SliderEvent::new(Phase::On, EventKind::TouchStart);
        assert_eq!(event.to_string(), "on.slidetrack.touchstart");
    }
}
