pub mod clock;
pub mod config;
pub mod eta_cache;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SmartQueueConfig;
pub use eta_cache::{CachedEta, EtaCache, ServerTimestamp};
pub use kv::KeyValueStore;
pub use models::{QueueInfo, Ticket, TicketStatus, User};
pub use session::SessionStore;
