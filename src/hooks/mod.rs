pub mod idle_scroll;
pub mod submission;

pub use idle_scroll::{use_hide_on_idle_scroll, DEFAULT_IDLE_MS};
pub use submission::use_submission;
