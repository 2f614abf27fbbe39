// taskpad - To-do task store with in-memory snapshots and full-document persistence

pub mod slot;
pub mod stats;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use slot::SlotStorage;
pub use stats::TaskStats;
pub use store::TaskStore;
pub use task::Task;
