use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use storefront::Order;

use crate::{AppState, error::ApiError};

// Successful data response
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

// Order list endpoint
pub async fn list_orders(State(state): State<AppState>) -> Json<DataResponse<Vec<Order>>> {
    tokio::time::sleep(state.latency.list).await;
    tracing::info!(path = "/api/orders", "Serving mock order list");

    Json(DataResponse {
        success: true,
        data: state.repository.all().to_vec(),
    })
}

// First value of a query parameter; later repeats are ignored
fn first_param(params: Vec<(String, String)>, key: &str) -> Option<String> {
    params.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

// Order detail endpoint, a missing id is treated as an unknown path
pub async fn order_detail(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let id = first_param(params, "id")
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::NotFound)?;

    tokio::time::sleep(state.latency.detail).await;
    tracing::info!(path = "/api/orders/detail", id = %id, "Serving mock order");

    let order = state.repository.find(&id).cloned().ok_or_else(|| {
        tracing::warn!(id = %id, "Order not found");
        ApiError::OrderNotFound
    })?;

    Ok(Json(DataResponse {
        success: true,
        data: order,
    }))
}

#[cfg(test)]
mod tests {
    use super::first_param;
    use crate::tests::{read_json, send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_orders() {
        let response = send(test_app(), Method::GET, "/api/orders", "").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["success"], json!(true));
        let orders = body["data"].as_array().unwrap();
        assert_eq!(orders.len(), 5);
        assert_eq!(orders[0]["transactionId"], json!("#15325"));
        assert_eq!(orders[0]["goods"]["quantity"], json!(40500));
        assert!(orders[1].get("goods").is_none());
    }

    #[tokio::test]
    async fn test_list_orders_accepts_post() {
        let response = send(test_app(), Method::POST, "/api/orders", "").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_order_detail() {
        let response = send(test_app(), Method::GET, "/api/orders/detail?id=3", "").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["data"]["id"], json!("3"));
        assert_eq!(body["data"]["status"], json!("pending"));
        assert_eq!(body["data"]["gameName"], json!("Ernardd"));
        assert!((body["data"]["amount"].as_f64().unwrap() - 153.26).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_order_detail_unknown_id() {
        let response = send(test_app(), Method::GET, "/api/orders/detail?id=99", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(response).await,
            json!({ "success": false, "error": "Order not found" })
        );
    }

    #[tokio::test]
    async fn test_order_detail_without_id() {
        for uri in ["/api/orders/detail", "/api/orders/detail?id="] {
            let response = send(test_app(), Method::GET, uri, "").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(
                read_json(response).await,
                json!({ "success": false, "error": "Not found" })
            );
        }
    }

    #[test]
    fn test_first_param() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("id".to_string(), "3".to_string()),
            ("id".to_string(), "1".to_string()),
        ];
        assert_eq!(first_param(params, "id").as_deref(), Some("3"));
        assert_eq!(first_param(Vec::new(), "id"), None);
    }

    #[tokio::test]
    async fn test_order_detail_repeated_id_uses_first() {
        let response = send(test_app(), Method::GET, "/api/orders/detail?id=3&id=1", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["data"]["id"], json!("3"));

        let response = send(test_app(), Method::GET, "/api/orders/detail?id=&id=1", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
