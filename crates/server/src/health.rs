use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use shopfront_core::storefront::Storefront;
use shopfront_db::DbPool;

#[derive(Clone)]
pub struct HealthState {
    db_pool: DbPool,
    storefront: Arc<Storefront>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: HealthCheck,
    pub store: HealthCheck,
    pub checked_at: String,
}

pub fn router(db_pool: DbPool, storefront: Arc<Storefront>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { db_pool, storefront })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let database = database_check(&state.db_pool).await;
    let store = if state.storefront.is_rehydrated() {
        HealthCheck { status: "ready", detail: "storefront state rehydrated".to_string() }
    } else {
        HealthCheck { status: "starting", detail: "storefront state is rehydrating".to_string() }
    };
    let ready = database.status == "ready" && store.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        database,
        store,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn database_check(pool: &DbPool) -> HealthCheck {
    match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await {
        Ok(_) => HealthCheck { status: "ready", detail: "database query succeeded".to_string() },
        Err(error) => {
            HealthCheck { status: "degraded", detail: format!("database query failed: {error}") }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use shopfront_core::storefront::{Storefront, StorefrontSettings};
    use shopfront_db::{connect_with_settings, InMemoryStateRepository};

    use crate::health::{health, HealthState};
    use crate::web::tests::StaticCatalog;

    fn storefront() -> Arc<Storefront> {
        Arc::new(Storefront::new(
            Arc::new(StaticCatalog::default()),
            Arc::new(InMemoryStateRepository::default()),
            StorefrontSettings::default(),
        ))
    }

    #[tokio::test]
    async fn health_is_degraded_until_state_is_rehydrated() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("pool should connect");
        let storefront = storefront();
        let state = HealthState { db_pool: pool.clone(), storefront: storefront.clone() };

        let (status, Json(payload)) = health(State(state.clone())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.store.status, "starting");
        assert_eq!(payload.database.status, "ready");

        storefront.hydrate().await;
        let (status, Json(payload)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");

        pool.close().await;
    }

    #[tokio::test]
    async fn health_returns_service_unavailable_when_database_is_unavailable() {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("pool should connect");
        pool.close().await;
        let storefront = storefront();
        storefront.hydrate().await;

        let (status, Json(payload)) = health(State(HealthState { db_pool: pool, storefront })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.database.status, "degraded");
        assert_eq!(payload.store.status, "ready");
    }
}
