pub mod keychain;
pub mod kv;
pub mod store;
pub mod time;

pub use keychain::MemoryKeychain;
pub use kv::{FileKeyValueStore, MemoryKeyValueStore};
pub use store::AccountStore;
pub use time::{ManualClock, SystemClock};
