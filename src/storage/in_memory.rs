//! In-memory implementation of every store, for tests and development
//!
//! All tables live behind a single `RwLock`; guards are never held across
//! an `.await`. Ids come from per-table sequences starting at 1.

use crate::core::{StoreError, StoreResult};
use crate::entities::avg_marks::{AvgMark, AvgMarkStore};
use crate::entities::basket::{BasketEntry, BasketItem, BasketStore};
use crate::entities::categories::{Category, CategoryInput, CategoryStore};
use crate::entities::comments::{Comment, CommentStore};
use crate::entities::favorites::{Favorite, FavoriteStore};
use crate::entities::firms::{Firm, FirmStore};
use crate::entities::marks::{Mark, MarkStore};
use crate::entities::orders::model::STATUS_PENDING;
use crate::entities::orders::{NewOrder, Order, OrderLine, OrderStore};
use crate::entities::prices::{NewPrice, Price, PriceStore, UpdatePrice};
use crate::entities::products::{NewProduct, Product, ProductStore, UpdateProduct};
use crate::entities::users::{NewUser, User, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Sequence(i64);

impl Sequence {
    fn next(&mut self) -> i64 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    user_seq: Sequence,
    products: BTreeMap<i64, Product>,
    product_seq: Sequence,
    categories: BTreeMap<i64, Category>,
    category_seq: Sequence,
    firms: BTreeMap<i64, Firm>,
    firm_seq: Sequence,
    prices: BTreeMap<i64, Price>,
    price_seq: Sequence,
    basket: IndexMap<(i64, i64), BasketItem>,
    favorites: IndexMap<(i64, i64), Favorite>,
    orders: BTreeMap<i64, Order>,
    order_seq: Sequence,
    order_line_seq: Sequence,
    marks: IndexMap<(i64, i64), Mark>,
    avg_marks: BTreeMap<i64, AvgMark>,
    comments: BTreeMap<i64, Comment>,
    comment_seq: Sequence,
}

impl Tables {
    fn first_price(&self, product_id: i64) -> Option<f64> {
        self.prices
            .values()
            .find(|p| p.product_id == product_id)
            .map(|p| p.price)
    }

    fn oldest_comment_id(&self, user_id: i64, product_id: i64) -> Option<i64> {
        self.comments
            .values()
            .find(|c| c.user_id == user_id && c.product_id == product_id)
            .map(|c| c.id)
    }
}

/// Process-local backend
///
/// Cloning is cheap and clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(StoreError::poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(StoreError::poisoned)
    }
}

/// Counter addition that fails instead of wrapping, like an INTEGER column.
fn checked_sum(current: i32, delta: i32, column: &str) -> StoreResult<i32> {
    current
        .checked_add(delta)
        .ok_or_else(|| StoreError::Invalid(format!("{} out of range", column)))
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    orders
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, input: NewUser) -> StoreResult<User> {
        let mut tables = self.write()?;
        if tables
            .users
            .values()
            .any(|u| u.telegram_id == input.telegram_id)
        {
            return Err(StoreError::Conflict(format!(
                "user with telegram id {} already exists",
                input.telegram_id
            )));
        }

        let user = User {
            id: tables.user_seq.next(),
            telegram_id: input.telegram_id,
            username: input.username,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, telegram_id: i64) -> StoreResult<Option<User>> {
        let tables = self.read()?;
        Ok(tables
            .users
            .values()
            .find(|u| u.telegram_id == telegram_id)
            .cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.read()?;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn update_username(
        &self,
        telegram_id: i64,
        username: &str,
    ) -> StoreResult<Option<User>> {
        let mut tables = self.write()?;
        Ok(tables
            .users
            .values_mut()
            .find(|u| u.telegram_id == telegram_id)
            .map(|user| {
                user.username = username.to_string();
                user.clone()
            }))
    }

    async fn delete_user(&self, telegram_id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let before = tables.users.len();
        tables.users.retain(|_, u| u.telegram_id != telegram_id);
        Ok(tables.users.len() != before)
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

impl InMemoryStore {
    fn modify_product<F>(&self, id: i64, f: F) -> StoreResult<Option<Product>>
    where
        F: FnOnce(&mut Product),
    {
        let mut tables = self.write()?;
        Ok(tables.products.get_mut(&id).map(|product| {
            f(product);
            product.clone()
        }))
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn create_product(&self, input: NewProduct) -> StoreResult<Product> {
        let mut tables = self.write()?;
        let product = Product::from_new(tables.product_seq.next(), input);
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: i64) -> StoreResult<Option<Product>> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    async fn update_product(&self, id: i64, input: UpdateProduct) -> StoreResult<Option<Product>> {
        self.modify_product(id, |p| p.apply(input))
    }

    async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.products.remove(&id).is_some())
    }

    async fn add_product_image(&self, id: i64, image: &str) -> StoreResult<Option<Product>> {
        self.modify_product(id, |p| p.image.push(image.to_string()))
    }

    async fn remove_product_image(&self, id: i64, image: &str) -> StoreResult<Option<Product>> {
        self.modify_product(id, |p| p.image.retain(|i| i != image))
    }

    async fn set_product_images(
        &self,
        id: i64,
        images: Vec<String>,
    ) -> StoreResult<Option<Product>> {
        self.modify_product(id, |p| p.image = images)
    }

    async fn increment_sell_count(&self, id: i64, count: i32) -> StoreResult<Option<Product>> {
        let mut tables = self.write()?;
        let Some(product) = tables.products.get_mut(&id) else {
            return Ok(None);
        };
        product.sell_count = checked_sum(product.sell_count, count, "sell_count")?;
        Ok(Some(product.clone()))
    }

    async fn update_stock(&self, id: i64, stock: i32) -> StoreResult<Option<Product>> {
        self.modify_product(id, |p| p.stock = stock)
    }
}

// ---------------------------------------------------------------------------
// Categories and firms
// ---------------------------------------------------------------------------

#[async_trait]
impl CategoryStore for InMemoryStore {
    async fn create_category(&self, input: CategoryInput) -> StoreResult<Category> {
        let mut tables = self.write()?;
        let category = Category {
            id: tables.category_seq.next(),
            name: input.name,
            image: input.image,
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn update_category(
        &self,
        id: i64,
        input: CategoryInput,
    ) -> StoreResult<Option<Category>> {
        let mut tables = self.write()?;
        Ok(tables.categories.get_mut(&id).map(|c| {
            c.name = input.name;
            c.image = input.image;
            c.clone()
        }))
    }

    async fn delete_category(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.categories.remove(&id).is_some())
    }

    async fn set_category_image(&self, id: i64, image: &str) -> StoreResult<Option<Category>> {
        let mut tables = self.write()?;
        Ok(tables.categories.get_mut(&id).map(|c| {
            c.image = Some(image.to_string());
            c.clone()
        }))
    }

    async fn remove_category_image(&self, id: i64) -> StoreResult<Option<Category>> {
        let mut tables = self.write()?;
        Ok(tables.categories.get_mut(&id).map(|c| {
            c.image = None;
            c.clone()
        }))
    }
}

#[async_trait]
impl FirmStore for InMemoryStore {
    async fn create_firm(&self, name: &str) -> StoreResult<Firm> {
        let mut tables = self.write()?;
        let firm = Firm {
            id: tables.firm_seq.next(),
            name: name.to_string(),
        };
        tables.firms.insert(firm.id, firm.clone());
        Ok(firm)
    }

    async fn get_firm(&self, id: i64) -> StoreResult<Option<Firm>> {
        Ok(self.read()?.firms.get(&id).cloned())
    }

    async fn list_firms(&self) -> StoreResult<Vec<Firm>> {
        Ok(self.read()?.firms.values().cloned().collect())
    }

    async fn update_firm(&self, id: i64, name: &str) -> StoreResult<Option<Firm>> {
        let mut tables = self.write()?;
        Ok(tables.firms.get_mut(&id).map(|f| {
            f.name = name.to_string();
            f.clone()
        }))
    }

    async fn delete_firm(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.firms.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

#[async_trait]
impl PriceStore for InMemoryStore {
    async fn create_price(&self, input: NewPrice) -> StoreResult<Price> {
        let mut tables = self.write()?;
        let price = Price {
            id: tables.price_seq.next(),
            product_id: input.product_id,
            count: input.count,
            price: input.price,
        };
        tables.prices.insert(price.id, price.clone());
        Ok(price)
    }

    async fn get_price(&self, id: i64) -> StoreResult<Option<Price>> {
        Ok(self.read()?.prices.get(&id).cloned())
    }

    async fn list_prices_for_product(&self, product_id: i64) -> StoreResult<Vec<Price>> {
        let tables = self.read()?;
        Ok(tables
            .prices
            .values()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn update_price(&self, id: i64, input: UpdatePrice) -> StoreResult<Option<Price>> {
        let mut tables = self.write()?;
        Ok(tables.prices.get_mut(&id).map(|p| {
            p.count = input.count;
            p.price = input.price;
            p.clone()
        }))
    }

    async fn update_price_count(&self, id: i64, count: i32) -> StoreResult<Option<Price>> {
        let mut tables = self.write()?;
        Ok(tables.prices.get_mut(&id).map(|p| {
            p.count = count;
            p.clone()
        }))
    }

    async fn delete_price(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.prices.remove(&id).is_some())
    }

    async fn delete_prices_for_product(&self, product_id: i64) -> StoreResult<u64> {
        let mut tables = self.write()?;
        let before = tables.prices.len();
        tables.prices.retain(|_, p| p.product_id != product_id);
        Ok((before - tables.prices.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// Basket and favorites
// ---------------------------------------------------------------------------

#[async_trait]
impl BasketStore for InMemoryStore {
    async fn add_basket_item(&self, entry: BasketEntry) -> StoreResult<BasketItem> {
        let mut tables = self.write()?;
        let key = (entry.user_id, entry.product_id);
        if let Some(item) = tables.basket.get_mut(&key) {
            item.quantity = checked_sum(item.quantity, entry.quantity, "quantity")?;
            return Ok(item.clone());
        }

        let item = BasketItem {
            user_id: entry.user_id,
            product_id: entry.product_id,
            quantity: entry.quantity,
            added_at: Utc::now(),
        };
        tables.basket.insert(key, item.clone());
        Ok(item)
    }

    async fn list_basket(&self, user_id: i64) -> StoreResult<Vec<BasketItem>> {
        let tables = self.read()?;
        Ok(tables
            .basket
            .values()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_basket_item(&self, entry: BasketEntry) -> StoreResult<Option<BasketItem>> {
        let mut tables = self.write()?;
        Ok(tables
            .basket
            .get_mut(&(entry.user_id, entry.product_id))
            .map(|item| {
                item.quantity = entry.quantity;
                item.clone()
            }))
    }

    async fn remove_basket_item(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.basket.shift_remove(&(user_id, product_id)).is_some())
    }

    async fn clear_basket(&self, user_id: i64) -> StoreResult<u64> {
        let mut tables = self.write()?;
        let before = tables.basket.len();
        tables.basket.retain(|(owner, _), _| *owner != user_id);
        Ok((before - tables.basket.len()) as u64)
    }
}

#[async_trait]
impl FavoriteStore for InMemoryStore {
    async fn add_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<Favorite> {
        let mut tables = self.write()?;
        let favorite = tables
            .favorites
            .entry((user_id, product_id))
            .or_insert_with(|| Favorite {
                user_id,
                product_id,
                added_at: Utc::now(),
            });
        Ok(favorite.clone())
    }

    async fn list_favorites(&self, user_id: i64) -> StoreResult<Vec<Favorite>> {
        let tables = self.read()?;
        Ok(tables
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn is_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        Ok(self.read()?.favorites.contains_key(&(user_id, product_id)))
    }

    async fn remove_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.favorites.shift_remove(&(user_id, product_id)).is_some())
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn create_order(&self, input: NewOrder) -> StoreResult<Order> {
        let mut tables = self.write()?;

        // Resolve every price before writing anything.
        let priced = input
            .items
            .iter()
            .map(|item| {
                tables
                    .first_price(item.product_id)
                    .map(|price| (*item, price))
                    .ok_or_else(|| {
                        StoreError::Invalid(format!("product {} has no price", item.product_id))
                    })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let order_id = tables.order_seq.next();
        let mut lines = Vec::with_capacity(priced.len());
        for (item, price) in priced {
            lines.push(OrderLine {
                id: tables.order_line_seq.next(),
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
                price,
            });
        }

        let order = Order {
            id: order_id,
            user_id: input.user_id,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
            lines,
        };
        tables.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn get_order(&self, id: i64) -> StoreResult<Option<Order>> {
        Ok(self.read()?.orders.get(&id).cloned())
    }

    async fn list_user_orders(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        let orders = self
            .read()?
            .orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(orders))
    }

    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let orders = self.read()?.orders.values().cloned().collect();
        Ok(newest_first(orders))
    }
}

// ---------------------------------------------------------------------------
// Marks and averages
// ---------------------------------------------------------------------------

#[async_trait]
impl MarkStore for InMemoryStore {
    async fn upsert_mark(&self, user_id: i64, product_id: i64, value: f64) -> StoreResult<Mark> {
        let mut tables = self.write()?;
        let mark = Mark {
            user_id,
            product_id,
            mark: value,
            created_at: Utc::now(),
        };
        // a replaced mark moves to the end, matching its new created_at
        tables.marks.shift_remove(&(user_id, product_id));
        tables.marks.insert((user_id, product_id), mark.clone());
        Ok(mark)
    }

    async fn get_mark(&self, user_id: i64, product_id: i64) -> StoreResult<Option<Mark>> {
        Ok(self.read()?.marks.get(&(user_id, product_id)).cloned())
    }

    async fn list_user_marks(&self, user_id: i64) -> StoreResult<Vec<Mark>> {
        let tables = self.read()?;
        Ok(tables
            .marks
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_product_marks(&self, product_id: i64) -> StoreResult<Vec<Mark>> {
        let tables = self.read()?;
        Ok(tables
            .marks
            .values()
            .filter(|m| m.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn delete_mark(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.marks.shift_remove(&(user_id, product_id)).is_some())
    }
}

#[async_trait]
impl AvgMarkStore for InMemoryStore {
    async fn get_avg_mark(&self, product_id: i64) -> StoreResult<Option<AvgMark>> {
        Ok(self.read()?.avg_marks.get(&product_id).cloned())
    }

    async fn list_avg_marks(&self) -> StoreResult<Vec<AvgMark>> {
        Ok(self.read()?.avg_marks.values().cloned().collect())
    }

    async fn upsert_avg_mark(
        &self,
        product_id: i64,
        sum: f64,
        count: i64,
    ) -> StoreResult<AvgMark> {
        let avg = AvgMark {
            product_id,
            sum,
            count,
            updated_at: Utc::now(),
        };
        self.write()?.avg_marks.insert(product_id, avg.clone());
        Ok(avg)
    }

    async fn delete_avg_mark(&self, product_id: i64) -> StoreResult<bool> {
        Ok(self.write()?.avg_marks.remove(&product_id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[async_trait]
impl CommentStore for InMemoryStore {
    async fn add_comment(&self, user_id: i64, product_id: i64, text: &str) -> StoreResult<Comment> {
        let mut tables = self.write()?;
        let comment = Comment {
            id: tables.comment_seq.next(),
            user_id,
            product_id,
            comment: text.to_string(),
            created_at: Utc::now(),
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn edit_comment(
        &self,
        user_id: i64,
        product_id: i64,
        text: &str,
    ) -> StoreResult<Option<Comment>> {
        let mut tables = self.write()?;
        let Some(id) = tables.oldest_comment_id(user_id, product_id) else {
            return Ok(None);
        };
        Ok(tables.comments.get_mut(&id).map(|c| {
            c.comment = text.to_string();
            c.clone()
        }))
    }

    async fn delete_comment(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let Some(id) = tables.oldest_comment_id(user_id, product_id) else {
            return Ok(false);
        };
        Ok(tables.comments.remove(&id).is_some())
    }

    async fn list_product_comments(&self, product_id: i64) -> StoreResult<Vec<Comment>> {
        let tables = self.read()?;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn list_user_comments(&self, user_id: i64) -> StoreResult<Vec<Comment>> {
        let tables = self.read()?;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }
}
