use async_trait::async_trait;
use memoria::{AsyncCache, AsyncCompute, Cache, OnEvict};
use std::convert::Infallible;
use std::time::Duration;

#[derive(Default, Debug)]
struct Evict {}

impl OnEvict<u32, u32> for Evict {
    fn evict(&self, k: &u32, v: &u32) {
        println!("Evict item. k={}, v={}", k, v);
    }
}

struct SlowSquares;

#[async_trait]
impl AsyncCompute<u32, u32> for SlowSquares {
    type Error = Infallible;

    async fn compute(&self, key: u32) -> Result<u32, Self::Error> {
        //stand-in for a remote fetch
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(key * key)
    }
}

#[tokio::main]
async fn main() {
    //memoizing squares with room for two of them
    let mut cache =
        Cache::with_on_evict(2, |k: &u32| Ok::<_, Infallible>(k * k), Evict::default())
            .with_metrics();
    assert!(cache.is_empty());
    assert_eq!(cache.get(&1), Ok(&1));
    assert_eq!(cache.get(&2), Ok(&4));
    //full now, the next new key evicts 1
    assert_eq!(cache.get(&3), Ok(&9));
    assert!(!cache.contains(&1));
    //asking for 1 again computes it again and evicts 2
    assert_eq!(cache.get(&1), Ok(&1));
    assert!(!cache.contains(&2));
    for (k, v) in cache.iter() {
        println!("Item: k: {}, v: {}", k, v);
    }
    println!(
        "\nCache metrics. {:?}",
        cache.metrics().expect("Cache should have metrics")
    );

    //the async front keeps answering while slow computes are in flight,
    //and concurrent requests for one key share a single compute
    let cache = AsyncCache::new(3, SlowSquares).with_metrics();
    assert_eq!(cache.get(7).await.unwrap(), 49);
    let (a, b) = tokio::join!(cache.get(8), cache.get(8));
    assert_eq!(a.unwrap(), 64);
    assert_eq!(b.unwrap(), 64);
    assert_eq!(cache.len().await, 2);
    println!(
        "\nAsync cache metrics. {:?}",
        cache.metrics().await.expect("Cache should have metrics")
    );
}
