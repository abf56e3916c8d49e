//! Macro-generated REST round-trip tests.
//!
//! `rest_api_tests!` builds the full router on top of a backend and drives
//! it over HTTP with `axum-test`, checking status codes and envelope tags.

/// Generate REST integration tests for a backend.
///
/// `$factory` must evaluate to an empty backend implementing `ShopBackend`.
#[macro_export]
macro_rules! rest_api_tests {
    ($factory:expr) => {
        mod rest_api_contract_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};
            use shop::server::ServerBuilder;

            async fn server() -> TestServer {
                let router = ServerBuilder::new()
                    .with_backend($factory)
                    .build()
                    .unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn create_priced_product(server: &TestServer, name: &str, price: f64) -> i64 {
                let response = server
                    .post("/api/v1/products")
                    .json(&json!({
                        "name": name,
                        "firm_id": 1,
                        "category_id": 1,
                        "stock": 10
                    }))
                    .await;
                response.assert_status_ok();
                let id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

                server
                    .post("/api/v1/prices")
                    .json(&json!({"product_id": id, "count": 1, "price": price}))
                    .await
                    .assert_status_ok();
                id
            }

            // ==================================================================
            // Routing
            // ==================================================================

            #[tokio::test]
            async fn test_health() {
                let server = server().await;
                let response = server.get("/health").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>()["status"], "ok");
            }

            #[tokio::test]
            async fn test_unknown_route_is_enveloped() {
                let server = server().await;
                let response = server.get("/api/v1/nope").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_status_tag(&response.json::<Value>(), "error_route_not_found");
            }

            // ==================================================================
            // Users
            // ==================================================================

            #[tokio::test]
            async fn test_user_lifecycle() {
                let server = server().await;

                let response = server
                    .post("/api/v1/users")
                    .json(&json!({"telegram_id": 555, "username": "bob"}))
                    .await;
                response.assert_status_ok();
                let body = response.json::<Value>();
                assert_status_tag(&body, "success_user_created");
                assert_eq!(body["data"]["username"], "bob");

                let response = server.get("/api/v1/users/555").await;
                response.assert_status_ok();
                assert_status_tag(&response.json::<Value>(), "success_user_retrieved");

                let response = server.get("/api/v1/users/username/bob").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>()["data"]["telegram_id"], 555);

                let response = server
                    .post("/api/v1/users")
                    .json(&json!({"telegram_id": 555, "username": "again"}))
                    .await;
                response.assert_status(StatusCode::CONFLICT);
                assert_status_tag(&response.json::<Value>(), "error_create_user");

                let response = server.get("/api/v1/users/556").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_status_tag(&response.json::<Value>(), "error_user_not_found");
            }

            #[tokio::test]
            async fn test_non_numeric_id_is_rejected() {
                let server = server().await;
                let response = server.get("/api/v1/orders/abc").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_invalid_order_id");
            }

            // ==================================================================
            // Catalog
            // ==================================================================

            #[tokio::test]
            async fn test_product_validation() {
                let server = server().await;
                let response = server
                    .post("/api/v1/products")
                    .json(&json!({"name": "Bad", "firm_id": 1, "category_id": 1, "stock": -1}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_invalid_data");

                let response = server
                    .post("/api/v1/prices")
                    .json(&json!({"product_id": 1, "count": 1, "price": -2.0}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_invalid_data");
            }

            #[tokio::test]
            async fn test_sell_count_increment() {
                let server = server().await;
                let id = create_priced_product(&server, "Mug", 3.0).await;

                let response = server
                    .patch(&format!("/api/v1/products/{}/sell", id))
                    .json(&json!({"count": 4}))
                    .await;
                response.assert_status_ok();
                let body = response.json::<Value>();
                assert_status_tag(&body, "success_sell_count_incremented");
                assert_eq!(body["data"]["sell_count"], 4);
            }

            #[tokio::test]
            async fn test_malformed_body_is_rejected() {
                let server = server().await;
                let response = server
                    .post("/api/v1/users")
                    .json(&json!({"telegram_id": "not a number"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_invalid_request_body");
            }

            // ==================================================================
            // Basket & favorites
            // ==================================================================

            #[tokio::test]
            async fn test_basket_flow() {
                let server = server().await;

                let response = server
                    .post("/api/v1/basket")
                    .json(&json!({"user_id": 1, "product_id": 2, "quantity": 0}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_invalid_quantity");

                for quantity in [1, 2] {
                    let response = server
                        .post("/api/v1/basket")
                        .json(&json!({"user_id": 1, "product_id": 2, "quantity": quantity}))
                        .await;
                    response.assert_status_ok();
                    assert_status_tag(&response.json::<Value>(), "success_item_added_to_basket");
                }

                let body = server.get("/api/v1/basket/1").await.json::<Value>();
                assert_status_tag(&body, "success_user_basket_retrieved");
                assert_eq!(body["data"][0]["quantity"], 3);

                let response = server.delete("/api/v1/basket/1").await;
                response.assert_status_ok();
                let body = response.json::<Value>();
                assert_status_tag(&body, "success_basket_cleared");
                assert_eq!(body["data"]["removed"], 1);
            }

            #[tokio::test]
            async fn test_favorite_check() {
                let server = server().await;
                server
                    .post("/api/v1/favorites")
                    .json(&json!({"user_id": 4, "product_id": 8}))
                    .await
                    .assert_status_ok();

                let body = server.get("/api/v1/favorites/4/8").await.json::<Value>();
                assert_status_tag(&body, "success_favorite_checked");
                assert_eq!(body["data"]["exists"], true);

                let body = server.get("/api/v1/favorites/4/9").await.json::<Value>();
                assert_eq!(body["data"]["exists"], false);
            }

            // ==================================================================
            // Orders
            // ==================================================================

            #[tokio::test]
            async fn test_order_placement_and_lookup() {
                let server = server().await;
                let tea = create_priced_product(&server, "Tea", 2.5).await;

                let response = server
                    .post("/api/v1/orders")
                    .json(&json!({"user_id": 77, "items": [{"product_id": tea, "quantity": 2}]}))
                    .await;
                response.assert_status_ok();
                let body = response.json::<Value>();
                assert_status_tag(&body, "success_order_created");
                assert_eq!(body["data"]["status"], "pending");
                assert_eq!(body["data"]["products"][0]["price"], 2.5);
                let order_id = body["data"]["id"].as_i64().unwrap();

                let response = server.get(&format!("/api/v1/orders/{}", order_id)).await;
                response.assert_status_ok();
                let fetched = response.json::<Value>();
                assert_status_tag(&fetched, "success_order_retrieved");
                assert_eq!(fetched["data"], body["data"]);

                let body = server.get("/api/v1/orders/user/77").await.json::<Value>();
                assert_status_tag(&body, "success_user_orders_retrieved");
                assert_eq!(body["data"].as_array().unwrap().len(), 1);

                let body = server.get("/api/v1/orders/all").await.json::<Value>();
                assert_status_tag(&body, "success_all_orders_retrieved");
            }

            #[tokio::test]
            async fn test_order_rejections() {
                let server = server().await;
                let tea = create_priced_product(&server, "Tea", 1.0).await;

                let response = server
                    .post("/api/v1/orders")
                    .json(&json!({"user_id": 1, "items": [{"product_id": tea, "quantity": 0}]}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_create_order");

                let response = server
                    .post("/api/v1/orders")
                    .json(&json!({"user_id": 1, "items": [
                        {"product_id": tea, "quantity": 1},
                        {"product_id": tea + 1000, "quantity": 1}
                    ]}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_create_order");

                let body = server.get("/api/v1/orders/user/1").await.json::<Value>();
                assert!(body["data"].as_array().unwrap().is_empty());

                let response = server.get("/api/v1/orders/999999").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_status_tag(&response.json::<Value>(), "error_order_not_found");
            }

            // ==================================================================
            // Marks, averages & comments
            // ==================================================================

            #[tokio::test]
            async fn test_marks_maintain_average() {
                let server = server().await;

                for (user, mark) in [(1, 4.0), (2, 5.0)] {
                    let response = server
                        .post(&format!("/api/v1/marks/user/{}/product/7", user))
                        .json(&json!({"mark": mark}))
                        .await;
                    response.assert_status_ok();
                    assert_status_tag(&response.json::<Value>(), "success_add_mark");
                }

                let body = server.get("/api/v1/avg_marks/product/7").await.json::<Value>();
                assert_status_tag(&body, "success_get_avg_mark");
                assert_eq!(body["data"]["sum"], 9.0);
                assert_eq!(body["data"]["count"], 2);

                for user in [1, 2] {
                    server
                        .delete(&format!("/api/v1/marks/user/{}/product/7", user))
                        .await
                        .assert_status_ok();
                }

                let response = server.get("/api/v1/avg_marks/product/7").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_status_tag(&response.json::<Value>(), "error_avg_mark_not_found");

                let response = server.delete("/api/v1/marks/user/1/product/7").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_status_tag(&response.json::<Value>(), "error_mark_not_found");

                let response = server.post("/api/v1/avg_marks/product/7/recalculate").await;
                response.assert_status_ok();
                let body = response.json::<Value>();
                assert_status_tag(&body, "success_recalculate");
                assert!(body["data"].is_null());
            }

            #[tokio::test]
            async fn test_comments() {
                let server = server().await;

                let response = server
                    .post("/api/v1/comments/user/1/product/2")
                    .json(&json!({"comment": ""}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_status_tag(&response.json::<Value>(), "error_invalid_comment");

                let response = server
                    .post("/api/v1/comments/user/1/product/2")
                    .json(&json!({"comment": "Great tea"}))
                    .await;
                response.assert_status_ok();
                assert_status_tag(&response.json::<Value>(), "success_add_comment");

                let body = server.get("/api/v1/comments/product/2").await.json::<Value>();
                assert_status_tag(&body, "success_get_comments_by_product");
                assert_eq!(body["data"][0]["comment"], "Great tea");
            }
        }
    };
}
