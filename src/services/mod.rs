// Service exports
pub mod cache;
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use cache::{CacheManager, CacheKey, CacheError};
pub use matching::MatchingService;
pub use memory::InMemoryRepository;
pub use postgres::PostgresClient;
pub use repository::{GeoProfileRepository, StoreError};
