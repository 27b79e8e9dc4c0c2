// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounded, content-addressed cache for rendered output.
//!
//! Renderers are pure functions of `(markup, options)`, so the output for a given raw
//! string never changes for a given renderer instance. Game servers send the same strings
//! over and over (room descriptions, prompts, channel prefixes), so it pays to remember
//! the rendered form. The cache is keyed by the raw markup string.
//!
//! ## Eviction
//!
//! Eviction is strictly FIFO: once the cache holds `capacity` entries, inserting a new key
//! removes the entry that was *inserted* first. Reads do not affect the eviction order,
//! which keeps [`RenderCache::get`] cheap and means a read never reorders anything.
//!
//! ## Sharing
//!
//! There is no global cache. Each renderer owns an optional [`SharedRenderCache`] handle,
//! which can be shared between renderers (or threads) by cloning the [`Arc`].
//!
//! ## Example
//!
//! ```
//! use r3bl_markup::RenderCache;
//!
//! let mut cache = RenderCache::new(2);
//! cache.insert("|rred|n", "\x1b[1;31mred\x1b[0m");
//! assert_eq!(cache.get("|rred|n"), Some("\x1b[1;31mred\x1b[0m"));
//! ```

use std::{collections::VecDeque,
          sync::{Arc, Mutex}};

use rustc_hash::{FxBuildHasher, FxHashMap};

/// Default number of rendered strings to remember.
pub const DEFAULT_RENDER_CACHE_CAPACITY: usize = 1024;

/// A bounded cache mapping raw markup to rendered output, with FIFO eviction.
#[derive(Debug)]
pub struct RenderCache {
    map: FxHashMap<String, String>,
    insertion_order: VecDeque<String>,
    capacity: usize,
}

impl Default for RenderCache {
    fn default() -> Self { Self::new(DEFAULT_RENDER_CACHE_CAPACITY) }
}

impl RenderCache {
    /// Creates a new cache with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Cache capacity must be greater than 0");
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            insertion_order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the rendered output for `raw`, if present. Does not change eviction order.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&str> {
        let it = self.map.get(raw).map(String::as_str);
        if it.is_some() {
            tracing::trace!(message = "render cache hit", raw_len = raw.len());
        }
        it
    }

    /// Inserts the rendered output for `raw`. Replacing an existing key keeps its original
    /// insertion position. Returns the previous value for the key, if any.
    pub fn insert(
        &mut self,
        raw: impl Into<String>,
        rendered: impl Into<String>,
    ) -> Option<String> {
        let raw = raw.into();
        let rendered = rendered.into();

        if let Some(existing) = self.map.get_mut(&raw) {
            return Some(std::mem::replace(existing, rendered));
        }

        while self.map.len() >= self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.map.remove(&oldest);
            tracing::debug!(
                message = "render cache evicted oldest entry",
                capacity = self.capacity
            );
        }

        self.insertion_order.push_back(raw.clone());
        self.map.insert(raw, rendered)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.map.clear();
        self.insertion_order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn contains_key(&self, raw: &str) -> bool { self.map.contains_key(raw) }
}

/// Thread-safe handle to a [`RenderCache`], so several renderers can share one.
pub type SharedRenderCache = Arc<Mutex<RenderCache>>;

/// Creates a new [`SharedRenderCache`] with the specified capacity.
#[must_use]
pub fn new_shared_render_cache(capacity: usize) -> SharedRenderCache {
    Arc::new(Mutex::new(RenderCache::new(capacity)))
}

/// Looks up `raw` in the (optional) cache, and renders + remembers it on a miss. A
/// poisoned mutex is treated as a cache miss, the output is still rendered.
pub fn get_or_render(
    maybe_cache: Option<&SharedRenderCache>,
    raw: &str,
    render: impl FnOnce() -> String,
) -> String {
    let Some(cache) = maybe_cache else {
        return render();
    };

    if let Ok(guard) = cache.lock()
        && let Some(hit) = guard.get(raw)
    {
        return hit.to_string();
    }

    let rendered = render();
    if let Ok(mut guard) = cache.lock() {
        guard.insert(raw, rendered.clone());
    }
    rendered
}
