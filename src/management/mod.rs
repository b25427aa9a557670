mod file;
mod login;
mod memory;
mod store;
mod summary;

pub use file::JsonFileStore;
pub use login::login;
pub use memory::MemoryStore;
pub use store::{Stores, SummaryStore, UserStore};
pub use summary::{default_summaries, pick_summary, seed_summaries, summary_kind_for};
