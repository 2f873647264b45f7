//! Canned upstream source and call-counting cache for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use marquee_cache::TtlCache;
use marquee_core::error::UpstreamError;
use marquee_core::traits::{CacheStore, MovieSource};
use marquee_core::types::UpstreamRequest;

/// Routes requests by `path` (plus `?page=N` when paged) to canned bodies.
#[derive(Default)]
pub struct FakeSource {
    routes: Mutex<HashMap<String, Value>>,
    failing: Mutex<HashSet<String>>,
    calls: Mutex<Vec<UpstreamRequest>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, route: impl Into<String>, body: Value) -> &Self {
        self.routes.lock().unwrap().insert(route.into(), body);
        self
    }

    pub fn fail(&self, route: impl Into<String>) -> &Self {
        self.failing.lock().unwrap().insert(route.into());
        self
    }

    /// Canned listing page of movies with the given ids.
    pub fn listing(&self, route: impl Into<String>, ids: &[u64], total_pages: u32) -> &Self {
        let results: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "id": id, "title": format!("Movie {}", id), "genre_ids": [18] }))
            .collect();
        self.route(route, json!({ "page": 1, "total_pages": total_pages, "results": results }))
    }

    /// Canned KR provider lookup for one movie.
    pub fn providers_for(&self, movie_id: u64, flatrate: &[(u64, &str)], buy: &[(u64, &str)]) -> &Self {
        let to_json = |list: &[(u64, &str)]| -> Vec<Value> {
            list.iter()
                .map(|(id, name)| json!({ "provider_id": id, "provider_name": name, "logo_path": "/logo.png" }))
                .collect()
        };
        self.route(
            format!("/movie/{}/watch/providers", movie_id),
            json!({ "id": movie_id, "results": { "KR": { "flatrate": to_json(flatrate), "buy": to_json(buy) } } }),
        )
    }

    pub fn calls(&self) -> Vec<UpstreamRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, path: &str) -> Vec<UpstreamRequest> {
        self.calls().into_iter().filter(|r| r.path == path).collect()
    }

    fn route_key(request: &UpstreamRequest) -> String {
        match request.get_param("page") {
            Some(page) => format!("{}?page={}", request.path, page),
            None => request.path.clone(),
        }
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(request.clone());
        let key = Self::route_key(request);

        let failing = self.failing.lock().unwrap();
        if failing.contains(&key) || failing.contains(&request.path) {
            return Err(UpstreamError::Transport {
                path: request.path.clone(),
                reason: "connection reset".into(),
            });
        }
        drop(failing);

        let routes = self.routes.lock().unwrap();
        routes
            .get(&key)
            .or_else(|| routes.get(&request.path))
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                path: request.path.clone(),
                status: 404,
            })
    }
}

/// TTL cache that counts reads and writes.
#[derive(Default)]
pub struct CountingStore {
    inner: TtlCache,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.get(key).is_some()
    }

    pub fn interactions(&self) -> usize {
        self.gets.load(Ordering::SeqCst) + self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for CountingStore {
    async fn get(&self, key: &str) -> Option<Value> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    async fn set(&self, key: &str, value: Value) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }
}
