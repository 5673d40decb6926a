pub mod memory;

pub use memory::{PageView, SessionStore};
