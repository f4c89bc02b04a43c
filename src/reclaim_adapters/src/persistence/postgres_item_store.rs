use chrono::NaiveDate;
use reclaim_core::{Item, ItemRecord, ItemStore, ItemStoreError, UserId};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresItemStore {
    pool: sqlx::PgPool,
}

impl PostgresItemStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresItemStore { pool }
    }
}

// The owner's username is materialized per query through the join; storage
// itself keeps only the foreign key.
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    title: String,
    description: String,
    category: String,
    item_type: String,
    location: String,
    date: NaiveDate,
    image: Vec<u8>,
    owner_id: Uuid,
    owner_username: String,
}

impl ItemRow {
    fn into_item(self) -> Result<Item, ItemStoreError> {
        Item::parse(ItemRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            item_type: self.item_type,
            location: self.location,
            date: self.date,
            image: self.image,
            owner_id: self.owner_id,
            owner_username: self.owner_username,
        })
        .map_err(|e| ItemStoreError::UnexpectedError(e.to_string()))
    }
}

const SELECT_ITEMS: &str = r#"
    SELECT i.id, i.title, i.description, i.category, i.item_type,
           i.location, i.date, i.image, i.owner_id,
           u.username AS owner_username
    FROM items i
    JOIN users u ON u.id = i.owner_id
"#;

#[async_trait::async_trait]
impl ItemStore for PostgresItemStore {
    #[tracing::instrument(name = "Adding item to PostgreSQL", skip_all, fields(title = %item.title()))]
    async fn add_item(&self, item: Item) -> Result<Item, ItemStoreError> {
        sqlx::query(
            r#"
                INSERT INTO items (id, title, description, category, item_type,
                                   location, date, image, owner_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id().as_uuid())
        .bind(item.title())
        .bind(item.description())
        .bind(item.category().as_str())
        .bind(item.item_type().as_str())
        .bind(item.location())
        .bind(item.date())
        .bind(item.image())
        .bind(item.owner_id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| ItemStoreError::UnexpectedError(e.to_string()))?;

        Ok(item)
    }

    #[tracing::instrument(name = "Listing items from PostgreSQL", skip_all)]
    async fn get_all_items(&self) -> Result<Vec<Item>, ItemStoreError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "{SELECT_ITEMS} ORDER BY i.created_at, i.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    #[tracing::instrument(name = "Listing items by owner from PostgreSQL", skip_all)]
    async fn get_items_by_owner(&self, owner: &UserId) -> Result<Vec<Item>, ItemStoreError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "{SELECT_ITEMS} WHERE i.owner_id = $1 ORDER BY i.created_at, i.id"
        ))
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }
}
