use std::collections::HashMap;
use std::fmt;

use crate::consts::{LOAD_END, LOAD_START};

/// Subscriber callback. Invoked synchronously with no arguments.
pub type Callback = Box<dyn FnMut()>;

/// Events published by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CropEvent {
    LoadStart,
    LoadEnd,
}

impl CropEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadStart => LOAD_START,
            Self::LoadEnd => LOAD_END,
        }
    }

    /// Parse an event name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            LOAD_START => Some(Self::LoadStart),
            LOAD_END => Some(Self::LoadEnd),
            _ => None,
        }
    }
}

impl AsRef<str> for CropEvent {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for CropEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Synchronous publish/subscribe keyed by event name.
///
/// Any name is accepted; names that are never published simply never fire.
/// There is no unsubscribe.
#[derive(Default)]
pub struct EventChannel {
    subscribers: HashMap<String, Vec<Callback>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, event: impl AsRef<str>, callback: impl FnMut() + 'static) {
        self.subscribers
            .entry(event.as_ref().to_owned())
            .or_default()
            .push(Box::new(callback));
    }

    /// Run every callback registered under `event`, in registration order.
    pub fn publish(&mut self, event: impl AsRef<str>) {
        if let Some(callbacks) = self.subscribers.get_mut(event.as_ref()) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }
    }

    pub fn subscriber_count(&self, event: impl AsRef<str>) -> usize {
        self.subscribers.get(event.as_ref()).map_or(0, Vec::len)
    }
}
