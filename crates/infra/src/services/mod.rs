pub mod alarm;
pub mod notifier;
