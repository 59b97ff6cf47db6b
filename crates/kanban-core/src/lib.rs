pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::{AppConfig, DragAnchor};
pub use error::KanbanError;
pub use logging::{LogEntry, Loggable};
pub use result::KanbanResult;
