pub mod explore;
pub mod misc;
pub mod search;

pub use explore::explore;
pub use misc::{display_banner, generate_completions};
pub use search::search_repos;
