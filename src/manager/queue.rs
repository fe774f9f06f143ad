//! Priority queues whose keys can be changed after insertion.

/// A min-priority queue over small integer items (vertex indices) that
/// supports replacing an item's key in place.
pub trait AdaptableQueue<C> {
    /// Inserts `item`. An item may be in the queue at most once.
    fn insert(&mut self, item: usize, key: C);

    /// Removes the item with the smallest key.
    fn pop_min(&mut self) -> Option<(usize, C)>;

    /// Replaces the key of a queued item. Returns `false` if `item` is not
    /// queued.
    fn replace_key(&mut self, item: usize, key: C) -> bool;

    fn contains(&self, item: usize) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug)]
pub struct MinHeapNode<T, C> {
    pub contents: T,
    pub score: C,
}

impl<T, C> MinHeapNode<T, C> {
    pub const fn new(contents: T, score: C) -> Self {
        Self { contents, score }
    }
}

/// Binary min-heap that remembers where each item sits so keys can be
/// replaced in `O(log n)`.
#[derive(Clone, Debug)]
pub struct HeapQueue<C> {
    heap: Vec<MinHeapNode<usize, C>>,

    /// **map item -> heap index** for queued items
    positions: Vec<Option<usize>>,
}

impl<C> Default for HeapQueue<C> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            positions: Vec::new(),
        }
    }
}

impl<C: Ord + Copy> HeapQueue<C> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    fn position(&self, item: usize) -> Option<usize> {
        self.positions.get(item).copied().flatten()
    }

    fn set_position(&mut self, item: usize, position: Option<usize>) {
        if item >= self.positions.len() {
            self.positions.resize(item + 1, None);
        }
        self.positions[item] = position;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        let item_a = self.heap[a].contents;
        let item_b = self.heap[b].contents;
        self.set_position(item_a, Some(a));
        self.set_position(item_b, Some(b));
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx].score < self.heap[parent].score {
                self.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.heap[left].score < self.heap[smallest].score {
                smallest = left;
            }
            if right < len && self.heap[right].score < self.heap[smallest].score {
                smallest = right;
            }

            if smallest == idx {
                break;
            }

            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<C: Ord + Copy> AdaptableQueue<C> for HeapQueue<C> {
    fn insert(&mut self, item: usize, key: C) {
        debug_assert!(!self.contains(item), "item {item} is already queued");

        let idx = self.heap.len();
        self.heap.push(MinHeapNode::new(item, key));
        self.set_position(item, Some(idx));
        self.sift_up(idx);
    }

    fn pop_min(&mut self) -> Option<(usize, C)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);

        let node = self.heap.pop()?;
        self.set_position(node.contents, None);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((node.contents, node.score))
    }

    fn replace_key(&mut self, item: usize, key: C) -> bool {
        let Some(idx) = self.position(item) else {
            return false;
        };

        let old = self.heap[idx].score;
        self.heap[idx].score = key;

        if key < old {
            self.sift_up(idx);
        } else {
            self.sift_down(idx);
        }

        true
    }

    fn contains(&self, item: usize) -> bool {
        self.position(item).is_some()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
