//! Registry of live carousel instances keyed by root identity.
//!
//! The page keeps one registry (see `boot`), keyed by the root `Element`
//! whose `PartialEq` is JavaScript identity. Lookup is linear; a page holds a
//! handful of carousels at most.

/// Ordered map from root key to instance.
#[derive(Debug)]
pub struct Registry<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> Registry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Return the instance for `key`, building it with `build` on first use.
    ///
    /// The boolean is `true` when a new instance was inserted. A failed build
    /// leaves the registry unchanged.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        build: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<(V, bool), E>
    where
        V: Clone,
    {
        if let Some(existing) = self.get(&key) {
            return Ok((existing.clone(), false));
        }
        let value = build(&key)?;
        self.entries.push((key, value.clone()));
        Ok((value, true))
    }

    /// Remove and return the instance for `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Remove every instance rejected by `keep`, returning them in order.
    pub fn drain_unless(&mut self, mut keep: impl FnMut(&K, &V) -> bool) -> Vec<V> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for (key, value) in self.entries.drain(..) {
            if keep(&key, &value) {
                kept.push((key, value));
            } else {
                removed.push(value);
            }
        }
        self.entries = kept;
        removed
    }

    /// Remove every instance, returning them in insertion order.
    pub fn drain(&mut self) -> Vec<V> {
        self.entries.drain(..).map(|(_, v)| v).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}
