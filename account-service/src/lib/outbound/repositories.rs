pub mod identity;

pub use identity::SqliteIdentityRepository;
