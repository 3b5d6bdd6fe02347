use crate::shared::entity::UserId;

/// A `Reminder` is a single unit of future work: at `fire_at` the
/// `message` should be delivered to `user_id` through the notification
/// gateway. A `Reminder` has no identity beyond its value, duplicates
/// are legal and independent.
///
/// The derived `Ord` follows field order, so reminders compare as the
/// `(fire_at, user_id, message)` tuple. `fire_at` is the real ordering
/// key; `user_id` and `message` only break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reminder {
    /// Unix timestamp in seconds at which this reminder becomes due
    pub fire_at: i64,
    /// The recipient that should be notified at `fire_at`
    pub user_id: UserId,
    /// Free-text payload, delivered verbatim
    pub message: String,
}

impl Reminder {
    pub fn new<U: Into<UserId>, M: Into<String>>(fire_at: i64, user_id: U, message: M) -> Self {
        Self {
            fire_at,
            user_id: user_id.into(),
            message: message.into(),
        }
    }
}
