//! Macro-generated test suite for the store contracts.
//!
//! The `shop_store_tests!` macro generates a test module that validates any
//! backend implementing every store trait: users, catalog, basket,
//! favorites, orders, marks with their averages, and comments.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//!
//! use store_harness::*;
//! use shop::storage::InMemoryStore;
//!
//! shop_store_tests!(InMemoryStore::new());
//! ```

/// Generate a full store conformance test suite.
///
/// `$factory` must be an expression that evaluates to an empty backend
/// implementing `ShopBackend`. It is re-evaluated for each test to ensure
/// isolation.
#[macro_export]
macro_rules! shop_store_tests {
    ($factory:expr) => {
        mod shop_store_contract_tests {
            use super::*;
            use shop::core::StoreError;
            use shop::entities::avg_marks::AvgMarkService;
            use shop::entities::basket::BasketEntry;
            use shop::entities::categories::CategoryInput;
            use shop::entities::orders::model::STATUS_PENDING;
            use shop::entities::orders::{Order, OrderService};
            use shop::entities::products::UpdateProduct;
            use shop::storage::Stores;

            async fn stores() -> Stores {
                Stores::from_backend($factory)
            }

            // ==================================================================
            // Users
            // ==================================================================

            #[tokio::test]
            async fn test_user_create_and_lookup() {
                let stores = stores().await;

                let created = stores.users.create_user(new_user(100, "alice")).await.unwrap();
                assert_eq!(created.telegram_id, 100);
                assert_eq!(created.username, "alice");

                let by_telegram = stores.users.get_user(100).await.unwrap().unwrap();
                assert_eq!(by_telegram.id, created.id);

                let by_name = stores
                    .users
                    .get_user_by_username("alice")
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(by_name.id, created.id);

                assert!(stores.users.get_user(101).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_user_duplicate_telegram_id_conflicts() {
                let stores = stores().await;
                stores.users.create_user(new_user(7, "a")).await.unwrap();

                let err = stores.users.create_user(new_user(7, "b")).await.unwrap_err();
                assert!(matches!(err, StoreError::Conflict(_)), "got {:?}", err);
                assert_count(&stores.users.list_users().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_user_update_and_delete() {
                let stores = stores().await;
                stores.users.create_user(new_user(1, "old")).await.unwrap();

                let updated = stores.users.update_username(1, "new").await.unwrap().unwrap();
                assert_eq!(updated.username, "new");
                assert!(stores.users.update_username(2, "x").await.unwrap().is_none());

                assert!(stores.users.delete_user(1).await.unwrap());
                assert!(!stores.users.delete_user(1).await.unwrap());
                assert!(stores.users.get_user(1).await.unwrap().is_none());
            }

            // ==================================================================
            // Catalog
            // ==================================================================

            #[tokio::test]
            async fn test_product_mutations() {
                let stores = stores().await;
                let product = stores
                    .products
                    .create_product(new_product("Tea", 5))
                    .await
                    .unwrap();

                let p = stores
                    .products
                    .add_product_image(product.id, "a.png")
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(p.image, vec!["a.png".to_string()]);

                let p = stores
                    .products
                    .set_product_images(product.id, vec!["b.png".into(), "c.png".into()])
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(p.image, vec!["b.png".to_string(), "c.png".to_string()]);

                let p = stores
                    .products
                    .remove_product_image(product.id, "b.png")
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(p.image, vec!["c.png".to_string()]);

                let p = stores
                    .products
                    .increment_sell_count(product.id, 3)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(p.sell_count, 3);

                let p = stores.products.update_stock(product.id, 42).await.unwrap().unwrap();
                assert_eq!(p.stock, 42);

                // a full update leaves the sell count alone
                let p = stores
                    .products
                    .update_product(
                        product.id,
                        UpdateProduct {
                            name: "Green tea".into(),
                            firm_id: 2,
                            description: String::new(),
                            category_id: 3,
                            attributes: Default::default(),
                            stock: 1,
                            image: vec![],
                        },
                    )
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(p.name, "Green tea");
                assert_eq!(p.sell_count, 3);
                assert_eq!(p.stock, 1);

                assert!(stores.products.update_stock(9999, 1).await.unwrap().is_none());
                assert!(stores.products.delete_product(product.id).await.unwrap());
                assert!(stores.products.get_product(product.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_product_attributes_round_trip() {
                let stores = stores().await;
                let mut input = new_product("Coffee", 1);
                input.attributes.insert("roast".into(), serde_json::json!("dark"));
                input.attributes.insert("weight_g".into(), serde_json::json!(250));

                let created = stores.products.create_product(input).await.unwrap();
                let fetched = stores.products.get_product(created.id).await.unwrap().unwrap();
                assert_eq!(fetched.attributes["roast"], "dark");
                assert_eq!(fetched.attributes["weight_g"], 250);
            }

            #[tokio::test]
            async fn test_category_image_set_and_remove() {
                let stores = stores().await;
                let category = stores
                    .categories
                    .create_category(CategoryInput {
                        name: "Drinks".into(),
                        image: None,
                    })
                    .await
                    .unwrap();
                assert!(category.image.is_none());

                let c = stores
                    .categories
                    .set_category_image(category.id, "drinks.png")
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(c.image.as_deref(), Some("drinks.png"));

                let c = stores
                    .categories
                    .remove_category_image(category.id)
                    .await
                    .unwrap()
                    .unwrap();
                assert!(c.image.is_none());

                assert!(stores.categories.delete_category(category.id).await.unwrap());
                assert!(
                    stores
                        .categories
                        .set_category_image(category.id, "x.png")
                        .await
                        .unwrap()
                        .is_none()
                );
            }

            #[tokio::test]
            async fn test_firm_crud() {
                let stores = stores().await;
                let firm = stores.firms.create_firm("Acme").await.unwrap();
                let renamed = stores.firms.update_firm(firm.id, "Acme Ltd").await.unwrap().unwrap();
                assert_eq!(renamed.name, "Acme Ltd");
                assert_count(&stores.firms.list_firms().await.unwrap(), 1);
                assert!(stores.firms.delete_firm(firm.id).await.unwrap());
                assert!(stores.firms.get_firm(firm.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_prices_per_product() {
                let stores = stores().await;
                let first = stores.prices.create_price(new_price(1, 1, 10.0)).await.unwrap();
                let second = stores.prices.create_price(new_price(1, 10, 8.0)).await.unwrap();
                stores.prices.create_price(new_price(2, 1, 3.0)).await.unwrap();

                let ids: Vec<i64> = stores
                    .prices
                    .list_prices_for_product(1)
                    .await
                    .unwrap()
                    .iter()
                    .map(|p| p.id)
                    .collect();
                assert_eq!(ids, vec![first.id, second.id]);

                let p = stores
                    .prices
                    .update_price_count(second.id, 20)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(p.count, 20);
                assert_close(p.price, 8.0);

                assert_eq!(stores.prices.delete_prices_for_product(1).await.unwrap(), 2);
                assert!(stores.prices.list_prices_for_product(1).await.unwrap().is_empty());
                assert_count(&stores.prices.list_prices_for_product(2).await.unwrap(), 1);
            }

            // ==================================================================
            // Basket & favorites
            // ==================================================================

            #[tokio::test]
            async fn test_basket_sums_and_clears() {
                let stores = stores().await;
                let entry = |product_id, quantity| BasketEntry {
                    user_id: 5,
                    product_id,
                    quantity,
                };

                stores.basket.add_basket_item(entry(1, 2)).await.unwrap();
                let item = stores.basket.add_basket_item(entry(1, 3)).await.unwrap();
                assert_eq!(item.quantity, 5);
                stores.basket.add_basket_item(entry(2, 1)).await.unwrap();

                let updated = stores
                    .basket
                    .update_basket_item(entry(2, 4))
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(updated.quantity, 4);
                assert!(stores.basket.update_basket_item(entry(3, 1)).await.unwrap().is_none());

                assert_count(&stores.basket.list_basket(5).await.unwrap(), 2);
                assert!(stores.basket.remove_basket_item(5, 1).await.unwrap());
                assert!(!stores.basket.remove_basket_item(5, 1).await.unwrap());
                assert_eq!(stores.basket.clear_basket(5).await.unwrap(), 1);
                assert!(stores.basket.list_basket(5).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_counter_overflow_is_rejected() {
                let stores = stores().await;
                let entry = |quantity| BasketEntry {
                    user_id: 1,
                    product_id: 1,
                    quantity,
                };
                stores.basket.add_basket_item(entry(i32::MAX)).await.unwrap();
                let err = stores.basket.add_basket_item(entry(1)).await.unwrap_err();
                assert!(matches!(err, StoreError::Invalid(_)), "got {:?}", err);
                assert_eq!(stores.basket.list_basket(1).await.unwrap()[0].quantity, i32::MAX);

                let product = stores
                    .products
                    .create_product(new_product("Salt", 1))
                    .await
                    .unwrap();
                stores
                    .products
                    .increment_sell_count(product.id, i32::MAX)
                    .await
                    .unwrap();
                let err = stores
                    .products
                    .increment_sell_count(product.id, 1)
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::Invalid(_)), "got {:?}", err);
                let stored = stores.products.get_product(product.id).await.unwrap().unwrap();
                assert_eq!(stored.sell_count, i32::MAX);
            }

            #[tokio::test]
            async fn test_favorites_idempotent() {
                let stores = stores().await;
                stores.favorites.add_favorite(1, 10).await.unwrap();
                stores.favorites.add_favorite(1, 10).await.unwrap();
                stores.favorites.add_favorite(1, 11).await.unwrap();

                assert_count(&stores.favorites.list_favorites(1).await.unwrap(), 2);
                assert!(stores.favorites.is_favorite(1, 10).await.unwrap());
                assert!(stores.favorites.remove_favorite(1, 10).await.unwrap());
                assert!(!stores.favorites.is_favorite(1, 10).await.unwrap());
            }

            // ==================================================================
            // Orders
            // ==================================================================

            #[tokio::test]
            async fn test_order_line_takes_first_price() {
                let stores = stores().await;
                stores.prices.create_price(new_price(7, 1, 2.5)).await.unwrap();
                stores.prices.create_price(new_price(7, 10, 1.0)).await.unwrap();

                let order = stores.orders.create_order(new_order(42, &[(7, 2)])).await.unwrap();
                assert_eq!(order.user_id, 42);
                assert_eq!(order.status, STATUS_PENDING);
                assert_count(&order.lines, 1);
                assert_eq!(order.lines[0].product_id, 7);
                assert_eq!(order.lines[0].quantity, 2);
                assert_eq!(order.lines[0].order_id, order.id);
                assert_close(order.lines[0].price, 2.5);
                assert_close(order.total(), 5.0);
            }

            #[tokio::test]
            async fn test_order_without_price_is_rolled_back() {
                let stores = stores().await;
                stores.prices.create_price(new_price(1, 1, 4.0)).await.unwrap();

                let err = stores
                    .orders
                    .create_order(new_order(3, &[(1, 1), (2, 1)]))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::Invalid(_)), "got {:?}", err);

                assert!(stores.orders.list_orders().await.unwrap().is_empty());
                assert!(stores.orders.list_user_orders(3).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_order_without_items() {
                let stores = stores().await;
                let order = stores.orders.create_order(new_order(1, &[])).await.unwrap();
                assert!(order.lines.is_empty());

                let fetched = stores.orders.get_order(order.id).await.unwrap().unwrap();
                assert!(fetched.lines.is_empty());
            }

            #[tokio::test]
            async fn test_order_read_is_stable() {
                let stores = stores().await;
                stores.prices.create_price(new_price(1, 1, 1.5)).await.unwrap();
                stores.prices.create_price(new_price(2, 1, 2.5)).await.unwrap();
                let placed = stores
                    .orders
                    .create_order(new_order(9, &[(1, 1), (2, 3)]))
                    .await
                    .unwrap();

                let first = stores.orders.get_order(placed.id).await.unwrap().unwrap();
                let second = stores.orders.get_order(placed.id).await.unwrap().unwrap();
                assert_eq!(first, second);
                assert_eq!(first.lines, placed.lines);
                assert!(stores.orders.get_order(placed.id + 1000).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_order_listings_newest_first() {
                let stores = stores().await;
                let a = stores.orders.create_order(new_order(1, &[])).await.unwrap();
                let b = stores.orders.create_order(new_order(2, &[])).await.unwrap();
                let c = stores.orders.create_order(new_order(1, &[])).await.unwrap();

                let all: Vec<i64> = stores
                    .orders
                    .list_orders()
                    .await
                    .unwrap()
                    .iter()
                    .map(|o| o.id)
                    .collect();
                assert_eq!(all, vec![c.id, b.id, a.id]);

                let mine: Vec<i64> = stores
                    .orders
                    .list_user_orders(1)
                    .await
                    .unwrap()
                    .iter()
                    .map(|o| o.id)
                    .collect();
                assert_eq!(mine, vec![c.id, a.id]);
            }

            #[tokio::test]
            async fn test_order_listings_regroup_lines() {
                let stores = stores().await;
                for product_id in 1..=5 {
                    stores
                        .prices
                        .create_price(new_price(product_id, 1, product_id as f64))
                        .await
                        .unwrap();
                }

                let a = stores
                    .orders
                    .create_order(new_order(6, &[(1, 1), (2, 2)]))
                    .await
                    .unwrap();
                let b = stores.orders.create_order(new_order(6, &[])).await.unwrap();
                let c = stores
                    .orders
                    .create_order(new_order(6, &[(3, 1), (4, 1), (5, 3)]))
                    .await
                    .unwrap();
                stores.orders.create_order(new_order(7, &[(1, 9)])).await.unwrap();

                let check = |orders: Vec<Order>| {
                    let mine: Vec<&Order> = orders.iter().filter(|o| o.user_id == 6).collect();
                    let ids: Vec<i64> = mine.iter().map(|o| o.id).collect();
                    assert_eq!(ids, vec![c.id, b.id, a.id]);

                    assert_eq!(mine[0].lines, c.lines);
                    assert!(mine[1].lines.is_empty());
                    assert_eq!(mine[2].lines, a.lines);

                    for order in &mine {
                        let line_ids: Vec<i64> = order.lines.iter().map(|l| l.id).collect();
                        let mut sorted = line_ids.clone();
                        sorted.sort();
                        assert_eq!(line_ids, sorted);
                        assert!(order.lines.iter().all(|l| l.order_id == order.id));
                    }
                    let products: Vec<i64> = mine[0].lines.iter().map(|l| l.product_id).collect();
                    assert_eq!(products, vec![3, 4, 5]);
                };

                let all = stores.orders.list_orders().await.unwrap();
                assert_count(&all, 4);
                check(all);

                let user_orders = stores.orders.list_user_orders(6).await.unwrap();
                assert_count(&user_orders, 3);
                check(user_orders);
            }

            #[tokio::test]
            async fn test_service_rejects_non_positive_quantity() {
                let stores = stores().await;
                stores.prices.create_price(new_price(1, 1, 1.0)).await.unwrap();
                let service = OrderService::new(stores.orders.clone());

                let err = service.place(new_order(1, &[(1, 0)])).await.unwrap_err();
                assert!(matches!(err, StoreError::Invalid(_)));
                assert!(stores.orders.list_orders().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_concurrent_order_placement() {
                let stores = stores().await;
                stores.prices.create_price(new_price(1, 1, 1.0)).await.unwrap();

                let mut handles = Vec::new();
                for user_id in 0..8 {
                    let orders = stores.orders.clone();
                    handles.push(tokio::spawn(async move {
                        orders.create_order(new_order(user_id, &[(1, 1)])).await
                    }));
                }
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let all = stores.orders.list_orders().await.unwrap();
                assert_count(&all, 8);
                assert!(all.iter().all(|o| o.lines.len() == 1));
            }

            // ==================================================================
            // Marks & averages
            // ==================================================================

            #[tokio::test]
            async fn test_mark_upsert_get_delete() {
                let stores = stores().await;
                stores.marks.upsert_mark(1, 7, 3.0).await.unwrap();
                let replaced = stores.marks.upsert_mark(1, 7, 4.5).await.unwrap();
                assert_close(replaced.mark, 4.5);

                let mark = stores.marks.get_mark(1, 7).await.unwrap().unwrap();
                assert_close(mark.mark, 4.5);
                assert_count(&stores.marks.list_product_marks(7).await.unwrap(), 1);
                assert_count(&stores.marks.list_user_marks(1).await.unwrap(), 1);

                assert!(stores.marks.delete_mark(1, 7).await.unwrap());
                assert!(!stores.marks.delete_mark(1, 7).await.unwrap());
                assert!(stores.marks.get_mark(1, 7).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_replaced_mark_lists_last() {
                let stores = stores().await;
                stores.marks.upsert_mark(1, 10, 1.0).await.unwrap();
                stores.marks.upsert_mark(1, 20, 2.0).await.unwrap();
                stores.marks.upsert_mark(1, 10, 3.0).await.unwrap();

                let marks = stores.marks.list_user_marks(1).await.unwrap();
                let products: Vec<i64> = marks.iter().map(|m| m.product_id).collect();
                assert_eq!(products, vec![20, 10]);
                assert_close(marks[1].mark, 3.0);
                assert!(marks[0].created_at <= marks[1].created_at);
            }

            #[tokio::test]
            async fn test_average_follows_marks() {
                let stores = stores().await;
                let averages = AvgMarkService::new(stores.marks.clone(), stores.avg_marks.clone());

                stores.marks.upsert_mark(1, 7, 4.0).await.unwrap();
                stores.marks.upsert_mark(2, 7, 5.0).await.unwrap();
                let avg = averages.recalculate(7).await.unwrap().unwrap();
                assert_close(avg.sum, 9.0);
                assert_eq!(avg.count, 2);
                assert_close(avg.average().unwrap(), 4.5);

                let stored = stores.avg_marks.get_avg_mark(7).await.unwrap().unwrap();
                assert_close(stored.sum, 9.0);

                stores.marks.delete_mark(1, 7).await.unwrap();
                stores.marks.delete_mark(2, 7).await.unwrap();
                assert!(averages.recalculate(7).await.unwrap().is_none());
                assert!(stores.avg_marks.get_avg_mark(7).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_avg_marks_listed_by_product() {
                let stores = stores().await;
                stores.avg_marks.upsert_avg_mark(9, 4.0, 1).await.unwrap();
                stores.avg_marks.upsert_avg_mark(3, 6.0, 2).await.unwrap();
                stores.avg_marks.upsert_avg_mark(9, 8.0, 2).await.unwrap();

                let all = stores.avg_marks.list_avg_marks().await.unwrap();
                let products: Vec<i64> = all.iter().map(|a| a.product_id).collect();
                assert_eq!(products, vec![3, 9]);
                assert_close(all[1].sum, 8.0);
            }

            // ==================================================================
            // Comments
            // ==================================================================

            #[tokio::test]
            async fn test_comments_edit_and_delete_oldest() {
                let stores = stores().await;
                let first = stores.comments.add_comment(1, 2, "first").await.unwrap();
                let second = stores.comments.add_comment(1, 2, "second").await.unwrap();
                stores.comments.add_comment(3, 2, "other user").await.unwrap();

                let edited = stores
                    .comments
                    .edit_comment(1, 2, "edited")
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(edited.id, first.id);
                assert_eq!(edited.comment, "edited");

                assert!(stores.comments.delete_comment(1, 2).await.unwrap());
                let left: Vec<i64> = stores
                    .comments
                    .list_user_comments(1)
                    .await
                    .unwrap()
                    .iter()
                    .map(|c| c.id)
                    .collect();
                assert_eq!(left, vec![second.id]);
                assert_count(&stores.comments.list_product_comments(2).await.unwrap(), 2);

                assert!(stores.comments.edit_comment(9, 9, "x").await.unwrap().is_none());
                assert!(!stores.comments.delete_comment(9, 9).await.unwrap());
            }
        }
    };
}
