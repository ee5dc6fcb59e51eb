use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::walk_in_customers::{RegisterWalkInCustomerEntity, WalkInCustomerEntity},
    repositories::walk_in_customers::WalkInCustomerRepository,
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, schema::walk_in_customers,
};

/// Search terms are plain substrings; `%`, `_` and the escape character
/// itself must not act as LIKE wildcards.
fn escape_like_pattern(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub struct WalkInCustomerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WalkInCustomerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WalkInCustomerRepository for WalkInCustomerPostgres {
    async fn register(
        &self,
        register_walk_in_customer_entity: RegisterWalkInCustomerEntity,
    ) -> Result<WalkInCustomerEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = insert_into(walk_in_customers::table)
            .values(&register_walk_in_customer_entity)
            .returning(WalkInCustomerEntity::as_returning())
            .get_result::<WalkInCustomerEntity>(&mut conn)?;

        Ok(row)
    }

    async fn exists_by_mac_address(&self, mac_address: String) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = walk_in_customers::table
            .filter(walk_in_customers::mac_address.eq(mac_address))
            .select(walk_in_customers::id)
            .first::<i64>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    async fn list(&self, search: Option<String>) -> Result<Vec<WalkInCustomerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = walk_in_customers::table.into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", escape_like_pattern(&term));
            query = query.filter(
                walk_in_customers::name
                    .ilike(pattern.clone())
                    .or(walk_in_customers::mac_address.ilike(pattern)),
            );
        }

        let rows = query
            .order(walk_in_customers::created_at.desc())
            .select(WalkInCustomerEntity::as_select())
            .load::<WalkInCustomerEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn delete(&self, customer_id: i64) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(walk_in_customers::table)
            .filter(walk_in_customers::id.eq(customer_id))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
