pub mod config;
pub mod hashing;
pub mod http;
pub mod persistence;

pub use config::{AllowedOrigins, ReclaimServiceSetting};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapUserStore, PostgresItemStore, PostgresUserStore, VecItemStore};
