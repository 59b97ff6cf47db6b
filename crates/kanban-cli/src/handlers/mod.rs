pub mod board;
pub mod card;
pub mod checklist;
pub mod export;
pub mod list;
pub mod tag;
