//! Route registration: module routes plus system endpoints.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

/// Build the complete router.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    // Mount each module's routes under /{module_name}.
    for (name, router) in module_routes {
        app = app.nest(&format!("/{}", name), router);
    }

    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "mindfoodd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use catalog::{CatalogConfig, CatalogModule};
    use mindfood_core::Module;
    use mindfood_sql::{SQLStore, SqliteStore};
    use tower::ServiceExt;

    fn app() -> Router {
        let sql: Arc<dyn SQLStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
        let catalog = CatalogModule::new(sql, CatalogConfig::default()).unwrap();
        build_router(vec![(catalog.name(), catalog.routes())])
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::json!(null)))
    }

    #[tokio::test]
    async fn health_ok() {
        let (s, json) = get_json(app(), "/health").await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn catalog_mounted_under_module_name() {
        let (s, json) = get_json(app(), "/catalog/products/by-date?nb=2").await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(json["nb"], 2);
        assert_eq!(json["products"], serde_json::json!([]));

        let (s, _) = get_json(app(), "/products/by-date").await;
        assert_eq!(s, StatusCode::NOT_FOUND);
    }
}
