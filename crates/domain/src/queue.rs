use crate::reminder::Reminder;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap over pending reminders, ordered by the `Reminder` tuple
/// ordering so the earliest fire time is always at the top.
///
/// The queue is pure in-memory state. Keeping it consistent with the
/// backing store is the responsibility of the layer that owns both.
#[derive(Debug, Default)]
pub struct ReminderQueue {
    heap: BinaryHeap<Reverse<Reminder>>,
}

impl ReminderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes heap order from an arbitrary sequence. Used once at
    /// startup with the reminders loaded from the store.
    pub fn from_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            heap: reminders.into_iter().map(Reverse).collect(),
        }
    }

    pub fn push(&mut self, reminder: Reminder) {
        self.heap.push(Reverse(reminder));
    }

    /// Whether the next reminder is due. A reminder with
    /// `fire_at == now` is due.
    pub fn peek_due(&self, now: i64) -> bool {
        self.heap
            .peek()
            .map_or(false, |Reverse(reminder)| reminder.fire_at <= now)
    }

    /// Removes and returns the next reminder if it is due.
    pub fn pop_next_due(&mut self, now: i64) -> Option<Reminder> {
        if self.peek_due(now) {
            self.heap.pop().map(|Reverse(reminder)| reminder)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// All pending reminders in ascending order. This is what gets
    /// persisted after every mutation.
    pub fn snapshot(&self) -> Vec<Reminder> {
        let mut reminders = self
            .heap
            .iter()
            .map(|Reverse(reminder)| reminder.clone())
            .collect::<Vec<_>>();
        reminders.sort();
        reminders
    }
}
