pub mod backends;
pub mod pages;

pub use backends::{PageView, SessionStore};
pub use pages::{PageState, PAGE_SIZE};

pub mod prelude {
    pub use super::backends::*;
    pub use super::pages::{PageState, PAGE_SIZE};
}
