//! Cake Repository

use super::{BaseRepository, CountRow, Paginated, Pagination, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Cake, CakeCreate, CakeUpdate};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CAKE_TABLE: &str = "cake";

#[derive(Clone)]
pub struct CakeRepository {
    base: BaseRepository,
}

impl CakeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List non-deleted cakes, newest first, paginated
    pub async fn find_all(&self, page: &Pagination) -> RepoResult<Paginated<Cake>> {
        let counts: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM cake WHERE deleted_at = NONE GROUP ALL")
            .await?
            .take(0)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        let cakes: Vec<Cake> = self
            .base
            .db()
            .query(
                "SELECT * FROM cake WHERE deleted_at = NONE ORDER BY created_at DESC \
                 LIMIT $limit START $start",
            )
            .bind(("limit", page.limit))
            .bind(("start", page.offset()))
            .await?
            .take(0)?;

        Ok(Paginated::new(cakes, total, page))
    }

    /// Find cake by id; soft-deleted cakes are treated as absent
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Cake>> {
        let rid = parse_record_id(CAKE_TABLE, id)?;
        let cake: Option<Cake> = self.base.db().select(rid).await?;
        Ok(cake.filter(|c| c.deleted_at.is_none()))
    }

    pub async fn create(&self, data: CakeCreate) -> RepoResult<Cake> {
        let now = now_millis();
        let cake = Cake {
            id: None,
            title: data.title,
            description: data.description,
            rating: data.rating,
            image: data.image,
            price: data.price,
            category: data.category.unwrap_or_default(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Cake> = self.base.db().create(CAKE_TABLE).content(cake).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create cake".to_string()))
    }

    pub async fn update(&self, id: &str, data: CakeUpdate) -> RepoResult<Cake> {
        let rid = parse_record_id(CAKE_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.title.is_some() {
            set_parts.push("title = $title");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.rating.is_some() {
            set_parts.push("rating = $rating");
        }
        if data.image.is_some() {
            set_parts.push("image = $image");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Cake {id} not found")));
        }
        set_parts.push("updated_at = $now");

        let query_str = format!(
            "UPDATE $thing SET {} WHERE deleted_at = NONE RETURN AFTER",
            set_parts.join(", ")
        );

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("thing", rid))
            .bind(("now", now_millis()));
        if let Some(v) = data.title {
            query = query.bind(("title", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.rating {
            query = query.bind(("rating", v));
        }
        if let Some(v) = data.image {
            query = query.bind(("image", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("category", v));
        }

        let cakes: Vec<Cake> = query.await?.take(0)?;
        cakes
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Cake {id} not found")))
    }

    /// Soft delete — the row stays for order items that copied its price
    pub async fn soft_delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_record_id(CAKE_TABLE, id)?;
        let updated: Vec<Cake> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET deleted_at = $now, updated_at = $now \
                 WHERE deleted_at = NONE RETURN AFTER",
            )
            .bind(("thing", rid))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        if updated.is_empty() {
            return Err(RepoError::NotFound(format!("Cake {id} not found")));
        }
        Ok(())
    }
}
