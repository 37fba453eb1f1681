use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Clone)]
pub struct Cache<K, V>
where
    K: Eq + Hash + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Arc<Mutex<HashMap<K, V>>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let cache = self.inner.lock().await;
        let value = cache.get(key).cloned();
        if value.is_some() {
            debug!("Cache HIT for {key:?}");
        } else {
            debug!("Cache MISS for {key:?}");
        }
        value
    }

    pub async fn put(&self, key: K, value: V) {
        let mut cache = self.inner.lock().await;
        debug!("Cache PUT for {key:?}");
        cache.insert(key, value);
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quote::Quote;

    #[tokio::test]
    async fn test_cache_get_put() {
        let cache = Cache::<String, Quote>::new();

        assert!(cache.get(&"AAPL".to_string()).await.is_none());

        let quote = Quote {
            price: 150.65,
            currency: "USD".to_string(),
        };
        cache.put("AAPL".to_string(), quote.clone()).await;

        assert_eq!(cache.get(&"AAPL".to_string()).await, Some(quote));
        assert!(cache.get(&"MSFT".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_put_overwrites() {
        let cache = Cache::<String, f64>::new();
        cache.put("AAPL".to_string(), 150.0).await;
        cache.put("AAPL".to_string(), 151.5).await;

        assert_eq!(cache.get(&"AAPL".to_string()).await, Some(151.5));
    }
}
