pub mod amount;
pub mod recurrence;
