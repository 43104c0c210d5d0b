//! Discrete input events and a bounded, interrupt-safe queue for them.
//!
//! The rotary encoder / button layer (outside this crate) decodes physical
//! input and publishes at most one [`InputEvent::Click`] and one
//! [`InputEvent::LongClick`] per loop iteration. The queue is built on
//! `critical-section` and `heapless::Deque`, so an ISR can publish while
//! the control loop drains.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A discrete, payload-free input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Short press: forwarded to the active animation
    Click,
    /// Long press: advances to the next animation
    LongClick,
}

/// Error returned when publishing to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub InputEvent);

/// Error returned when draining an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe queue of input events
///
/// Synchronized with critical sections, making it suitable for sharing
/// between an interrupt handler and the main loop. Backed by a fixed-size
/// `heapless::Deque`; events published while the queue is full are
/// reported back to the publisher rather than dropped silently.
pub struct InputQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<InputEvent, SIZE>>>,
}

impl<const SIZE: usize> InputQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> InputSender<'_, SIZE> {
        InputSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> InputReceiver<'_, SIZE> {
        InputReceiver { queue: self }
    }

    /// Try to publish an event.
    ///
    /// Returns `Err(TrySendError(event))` if the queue is full.
    pub fn try_send(&self, event: InputEvent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Try to take the oldest pending event.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<InputEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for InputQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for an [`InputQueue`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct InputSender<'a, const SIZE: usize> {
    queue: &'a InputQueue<SIZE>,
}

impl<const SIZE: usize> InputSender<'_, SIZE> {
    /// Try to publish an event.
    pub fn try_send(&self, event: InputEvent) -> Result<(), TrySendError> {
        self.queue.try_send(event)
    }
}

/// A receiver handle for an [`InputQueue`].
#[derive(Clone, Copy)]
pub struct InputReceiver<'a, const SIZE: usize> {
    queue: &'a InputQueue<SIZE>,
}

impl<const SIZE: usize> InputReceiver<'_, SIZE> {
    /// Try to take the oldest pending event.
    pub fn try_receive(&self) -> Result<InputEvent, TryReceiveError> {
        self.queue.try_receive()
    }
}
