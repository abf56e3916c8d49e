//! Shop resources
//!
//! Each resource lives in its own module with the same layout:
//!
//! - `model`: records and request bodies
//! - `store`: the `#[async_trait]` storage contract
//! - `handlers`: axum handlers returning the `{status, data}` envelope
//! - `descriptor`: an [`EntityDescriptor`](crate::server::EntityDescriptor)
//!   that contributes the resource's routes
//!
//! `orders` and `avg_marks` additionally carry a `service` for the logic
//! that spans more than one statement.

pub mod avg_marks;
pub mod basket;
pub mod categories;
pub mod comments;
pub mod favorites;
pub mod firms;
pub mod marks;
pub mod orders;
pub mod prices;
pub mod products;
pub mod users;

use crate::server::EntityRegistry;
use crate::storage::Stores;

/// Register every resource backed by `stores`.
pub fn register_all(registry: &mut EntityRegistry, stores: &Stores) {
    let averages = avg_marks::AvgMarkService::new(stores.marks.clone(), stores.avg_marks.clone());

    registry.register(Box::new(users::UserDescriptor::new(stores.users.clone())));
    registry.register(Box::new(products::ProductDescriptor::new(
        stores.products.clone(),
    )));
    registry.register(Box::new(categories::CategoryDescriptor::new(
        stores.categories.clone(),
    )));
    registry.register(Box::new(firms::FirmDescriptor::new(stores.firms.clone())));
    registry.register(Box::new(prices::PriceDescriptor::new(stores.prices.clone())));
    registry.register(Box::new(basket::BasketDescriptor::new(stores.basket.clone())));
    registry.register(Box::new(favorites::FavoriteDescriptor::new(
        stores.favorites.clone(),
    )));
    registry.register(Box::new(orders::OrderDescriptor::new(
        orders::OrderService::new(stores.orders.clone()),
    )));
    registry.register(Box::new(marks::MarkDescriptor::new(
        stores.marks.clone(),
        averages.clone(),
    )));
    registry.register(Box::new(avg_marks::AvgMarkDescriptor::new(averages)));
    registry.register(Box::new(comments::CommentDescriptor::new(
        stores.comments.clone(),
    )));
}
