pub mod hashmap_user_store;
pub mod postgres_item_store;
pub mod postgres_user_store;
pub mod vec_item_store;

pub use hashmap_user_store::HashMapUserStore;
pub use postgres_item_store::PostgresItemStore;
pub use postgres_user_store::PostgresUserStore;
pub use vec_item_store::VecItemStore;
