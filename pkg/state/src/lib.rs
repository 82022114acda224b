//! Cluster storage for kdeck: the repository seam, its in-memory
//! implementation and the seed data the console starts from.

pub mod memory;
pub mod repository;
pub mod seed;
pub mod watch;

pub use memory::MemoryStore;
pub use repository::ClusterRepository;
