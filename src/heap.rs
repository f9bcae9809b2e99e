/*
Indexed binary min-heap over dense vertex indices 0..n, keyed by a mutable tentative score.

The heap keeps, per vertex, its current array position (or NOT_IN_HEAP once extracted) so that
decrease_key can find the vertex in O(1) and repair the order in O(log n).
Supported operations are Build, ExtractMin and DecreaseKey. There is no insert: every vertex
enters at build time and the heap only shrinks.
*/

use crate::graph::Cost;

/// Position sentinel for a vertex that has been extracted.
pub const NOT_IN_HEAP: usize = usize::MAX;

#[inline(always)]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    heap: Vec<usize>,
    positions: Vec<usize>,
    scores: Vec<Cost>,
}

impl IndexedMinHeap {
    /// Heapifies every vertex `0..scores.len()` bottom-up in O(n).
    pub fn build(scores: Vec<Cost>) -> Self {
        debug_assert!(scores.iter().all(|s| !s.is_nan()), "NaN score passed to build");
        let n = scores.len();
        let mut heap = Self {
            heap: (0..n).collect(),
            positions: (0..n).collect(),
            scores,
        };
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.positions[vertex] != NOT_IN_HEAP
    }

    pub fn position(&self, vertex: usize) -> usize {
        self.positions[vertex]
    }

    /// Current tentative score; for an extracted vertex this is the score it left with.
    pub fn score(&self, vertex: usize) -> Cost {
        self.scores[vertex]
    }

    pub fn peek(&self) -> Option<(usize, Cost)> {
        self.heap.first().map(|&v| (v, self.scores[v]))
    }

    /// Removes and returns the vertex with the smallest score.
    ///
    /// Panics if the heap is empty.
    pub fn extract_min(&mut self) -> (usize, Cost) {
        assert!(!self.heap.is_empty(), "extract_min on an empty heap");
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap[last];
        self.heap.truncate(last);
        self.positions[min] = NOT_IN_HEAP;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        (min, self.scores[min])
    }

    /// Lowers `vertex`'s score to `new_score` and sifts it up.
    ///
    /// Panics if the vertex was already extracted or if `new_score` is larger than the current score.
    pub fn decrease_key(&mut self, vertex: usize, new_score: Cost) {
        let position = self.positions[vertex];
        assert_ne!(position, NOT_IN_HEAP, "decrease_key on vertex {} which is not in the heap", vertex);
        assert!(
            new_score <= self.scores[vertex],
            "decrease_key would raise vertex {} from {} to {}",
            vertex,
            self.scores[vertex],
            new_score
        );
        self.scores[vertex] = new_score;
        self.sift_up(position);
    }

    #[inline(always)]
    fn less(&self, a: usize, b: usize) -> bool {
        self.scores[self.heap[a]] < self.scores[self.heap[b]]
    }

    // Both positions are rewritten together with the slots so invariant 1 holds after every swap.
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = a;
        self.positions[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if !self.less(index, p) {
                break;
            }
            self.swap(index, p);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let l = left(index);
            if l >= len {
                break;
            }
            let mut smallest = index;
            if self.less(l, smallest) {
                smallest = l;
            }
            let r = l + 1;
            if r < len && self.less(r, smallest) {
                smallest = r;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Checks heap order, position bookkeeping and uniqueness. Test helper.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let mut seen = vec![false; self.positions.len()];
        for (i, &v) in self.heap.iter().enumerate() {
            assert!(!seen[v], "vertex {} appears twice", v);
            seen[v] = true;
            assert_eq!(self.positions[v], i, "position of vertex {} is stale", v);
            if i > 0 {
                let p = self.heap[parent(i)];
                assert!(
                    self.scores[p] <= self.scores[v],
                    "heap order broken at {}: parent {} > child {}",
                    i,
                    self.scores[p],
                    self.scores[v]
                );
            }
        }
        for (v, &position) in self.positions.iter().enumerate() {
            if !seen[v] {
                assert_eq!(position, NOT_IN_HEAP, "extracted vertex {} still has a position", v);
            }
        }
    }
}
