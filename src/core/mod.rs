pub mod error;
pub mod events;
pub mod money;

pub use error::{AppError, Result};
pub use events::{RefreshBus, RefreshEvent, RefreshTopic};
