//! 内存商品仓储
//!
//! 单把粗粒度锁保护商品表和 id 计数器。所有变更（插入、改价）以及
//! 快照读取都在锁内完成，每个操作都是一步原子动作，锁内没有任何
//! await 点。

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use errors::{AppError, AppResult};

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;

struct StoreInner {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

/// 内存商品仓储
///
/// 在 `main` 中显式构造，以 `Arc<dyn ProductRepository>` 注入 handler，
/// 生命周期由进程启动代码持有，不存在全局单例。
pub struct InMemoryProductRepository {
    inner: Mutex<StoreInner>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("product store lock poisoned"))
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: NewProduct) -> AppResult<i64> {
        let mut inner = self.lock()?;

        let id = inner.next_id;
        if inner.products.contains_key(&id) {
            // 计数器逻辑正确时不可达
            return Err(AppError::already_exists(format!(
                "a product with id {} already exists",
                id
            )));
        }

        inner.products.insert(id, product.with_id(id));
        inner.next_id += 1;

        Ok(id)
    }

    async fn get(&self, id: i64) -> AppResult<Product> {
        let inner = self.lock()?;

        inner
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("no product found with this ID"))
    }

    async fn update_price(&self, id: i64, price: f64) -> AppResult<()> {
        let mut inner = self.lock()?;

        let product = inner
            .products
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("no product found with this ID"))?;
        product.price = price;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let inner = self.lock()?;

        Ok(inner.products.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::enums::Category;

    fn sample_product(name: &str, warehouse_id: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: 99.9,
            weight: 1.5,
            category: Category::General,
            create_date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            warehouse_id,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_contiguous_ids_from_one() {
        let repo = InMemoryProductRepository::new();

        for expected in 1..=5 {
            let id = repo.add(sample_product("tea", 1)).await.unwrap();
            assert_eq!(id, expected);
        }
    }

    #[tokio::test]
    async fn test_get_round_trip() {
        let repo = InMemoryProductRepository::new();
        let new = sample_product("kettle", 3);

        let id = repo.add(new.clone()).await.unwrap();
        let stored = repo.get(id).await.unwrap();

        assert_eq!(stored, new.with_id(id));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let err = repo.get(17).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_price_changes_only_price() {
        let repo = InMemoryProductRepository::new();
        let first = repo.add(sample_product("soap", 1)).await.unwrap();
        let second = repo.add(sample_product("brush", 2)).await.unwrap();
        let before_first = repo.get(first).await.unwrap();
        let before_second = repo.get(second).await.unwrap();

        repo.update_price(first, 5.25).await.unwrap();

        let after_first = repo.get(first).await.unwrap();
        assert_eq!(after_first.price, 5.25);
        assert_eq!(
            Product {
                price: before_first.price,
                ..after_first
            },
            before_first
        );
        // 其他商品不受影响
        assert_eq!(repo.get(second).await.unwrap(), before_second);
    }

    #[tokio::test]
    async fn test_update_price_unknown_id_is_not_found() {
        let repo = InMemoryProductRepository::new();
        repo.add(sample_product("soap", 1)).await.unwrap();

        let err = repo.update_price(999, 1.0).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_returns_consistent_snapshot() {
        let repo = InMemoryProductRepository::new();
        repo.add(sample_product("a", 1)).await.unwrap();
        repo.add(sample_product("b", 1)).await.unwrap();

        let snapshot = repo.list().await.unwrap();
        assert_eq!(snapshot.len(), 2);

        // 快照是拷贝：后续写入不会改写已取出的快照
        repo.update_price(1, 1.0).await.unwrap();
        repo.add(sample_product("c", 1)).await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].price, 99.9);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_adds_never_lose_or_duplicate_ids() {
        const TASKS: usize = 8;
        const PER_TASK: usize = 50;

        let repo = Arc::new(InMemoryProductRepository::new());

        let mut handles = Vec::new();
        for task in 0..TASKS {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::with_capacity(PER_TASK);
                for i in 0..PER_TASK {
                    let name = format!("p-{}-{}", task, i);
                    ids.push(repo.add(sample_product(&name, 1)).await.unwrap());
                }
                ids
            }));
        }

        let mut all_ids = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(all_ids.insert(id), "duplicate id {}", id);
            }
        }

        assert_eq!(all_ids.len(), TASKS * PER_TASK);
        // id 连续：1..=N 全部出现
        for id in 1..=(TASKS * PER_TASK) as i64 {
            assert!(all_ids.contains(&id), "missing id {}", id);
        }
        assert_eq!(repo.list().await.unwrap().len(), TASKS * PER_TASK);
    }
}
