//! Exact LRU bookkeeping: hash map + doubly linked recency list.
//!
//! Single-threaded; [`RenderCache`](crate::cache::RenderCache) provides
//! the mutex. Nodes live in a slab `Vec` and link to each other by index,
//! with freed slots recycled, so no operation allocates beyond the entry
//! itself and everything is O(1).

use std::collections::HashMap;

const NIL: usize = usize::MAX;

struct Node {
    key: String,
    value: String,
    prev: usize,
    next: usize,
}

pub(crate) struct LruList {
    map: HashMap<String, usize>,
    nodes: Vec<Node>,
    free: Vec<usize>,
    /// Most recently used.
    head: usize,
    /// Least recently used.
    tail: usize,
}

impl LruList {
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::new(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Look up `key` and promote it to most recently used.
    pub(crate) fn get(&mut self, key: &str) -> Option<&str> {
        let idx = *self.map.get(key)?;
        self.detach(idx);
        self.push_front(idx);
        Some(&self.nodes[idx].value)
    }

    /// Insert or overwrite `key`, promoting it to most recently used.
    /// Capacity enforcement is the caller's job (`pop_lru` first).
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        if let Some(&idx) = self.map.get(key) {
            self.nodes[idx].value = value.to_string();
            self.detach(idx);
            self.push_front(idx);
            return;
        }

        let node = Node {
            key: key.to_string(),
            value: value.to_string(),
            prev: NIL,
            next: NIL,
        };
        let idx = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.map.insert(key.to_string(), idx);
        self.push_front(idx);
    }

    /// Remove `key` if present. Returns whether an entry was removed.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        match self.map.remove(key) {
            Some(idx) => {
                self.detach(idx);
                self.free.push(idx);
                true
            }
            None => false,
        }
    }

    /// Evict the least-recently-used entry, returning its key.
    pub(crate) fn pop_lru(&mut self) -> Option<String> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        let key = self.nodes[idx].key.clone();
        self.map.remove(&key);
        self.detach(idx);
        self.free.push(idx);
        Some(key)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Unlink `idx` from the recency list.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev != NIL {
            self.nodes[prev].next = next;
        } else if self.head == idx {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else if self.tail == idx {
            self.tail = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    /// Link `idx` in as the most-recently-used entry.
    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }
}
