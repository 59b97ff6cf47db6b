pub mod serialization;
pub mod slot;
pub mod store;
pub mod traits;

pub use serialization::*;
pub use slot::DocumentSlot;
pub use store::*;
pub use traits::*;
