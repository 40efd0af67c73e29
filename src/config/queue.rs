//! Bounded queue of pending configuration changes.
//!
//! A `heapless::Deque` behind a `critical-section` mutex, so a settings
//! handler in another task or an interrupt can queue changes while the
//! renderer drains them between frames.
//!
//! Pending changes are coalesced: a change to a setting that is already
//! queued overwrites it in place, and a [`ConfigChange::Replace`] discards
//! everything queued before it. A burst of slider updates from a settings
//! page therefore occupies a single slot.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use super::ConfigChange;

/// The queue was full and no pending change could absorb this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub ConfigChange);

/// No change is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Queue holding at most `SIZE` distinct pending changes.
pub struct ConfigChannel<const SIZE: usize> {
    pending: Mutex<RefCell<Deque<ConfigChange, SIZE>>>,
}

impl<const SIZE: usize> ConfigChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the application side. Several may coexist.
    pub const fn sender(&self) -> ConfigSender<'_, SIZE> {
        ConfigSender { channel: self }
    }

    /// Handle for the renderer
    pub const fn receiver(&self) -> ConfigReceiver<'_, SIZE> {
        ConfigReceiver { channel: self }
    }

    /// Number of pending changes
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, change: ConfigChange) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow(cs).borrow_mut();
            if let ConfigChange::Replace(_) = change {
                pending.clear();
            } else if let Some(queued) = pending.iter_mut().find(|q| q.same_setting(&change)) {
                *queued = change;
                return Ok(());
            }
            pending.push_back(change).map_err(TrySendError)
        })
    }

    fn pop(&self) -> Option<ConfigChange> {
        critical_section::with(|cs| self.pending.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for ConfigChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`ConfigChannel`]
#[derive(Clone, Copy)]
pub struct ConfigSender<'a, const SIZE: usize> {
    channel: &'a ConfigChannel<SIZE>,
}

impl<const SIZE: usize> ConfigSender<'_, SIZE> {
    /// Queue a change for the next frame.
    ///
    /// Returns `Err(TrySendError(change))` only when the queue is full of
    /// changes to other settings.
    pub fn try_send(&self, change: ConfigChange) -> Result<(), TrySendError> {
        self.channel.push(change)
    }
}

/// Receiving half of a [`ConfigChannel`]
#[derive(Clone, Copy)]
pub struct ConfigReceiver<'a, const SIZE: usize> {
    channel: &'a ConfigChannel<SIZE>,
}

impl<const SIZE: usize> ConfigReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ConfigChange, TryReceiveError> {
        self.channel.pop().ok_or(TryReceiveError)
    }

    /// Take pending changes, oldest first, until none is left
    pub fn drain(&self) -> impl Iterator<Item = ConfigChange> + '_ {
        core::iter::from_fn(move || self.channel.pop())
    }
}
