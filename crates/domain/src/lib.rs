mod duration;
mod queue;
mod reminder;
mod shared;

pub use duration::parse_duration;
pub use queue::ReminderQueue;
pub use reminder::Reminder;
pub use shared::entity::UserId;
