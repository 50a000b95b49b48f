//! Minimal publish/subscribe list for load-completion notifications.

type Listener<T> = Box<dyn FnMut(&T)>;

struct Slot<T> {
    listener: Listener<T>,
    once: bool,
}

/// Ordered callbacks; dispatch runs them in registration order.
pub struct Signal<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl FnMut(&T) + 'static) {
        self.slots.push(Slot {
            listener: Box::new(listener),
            once: false,
        });
    }

    /// Listener removed after its first dispatch.
    pub fn add_once(&mut self, listener: impl FnMut(&T) + 'static) {
        self.slots.push(Slot {
            listener: Box::new(listener),
            once: true,
        });
    }

    pub fn dispatch(&mut self, value: &T) {
        for slot in &mut self.slots {
            (slot.listener)(value);
        }
        self.slots.retain(|s| !s.once);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
