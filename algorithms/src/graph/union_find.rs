//! Disjoint-set forest.
//!
//! Variables:
//!   parent[i] : representative pointer, parent[r] = r for a root r
//!   rank[r]   : upper bound on the height of the tree rooted at r
//!   sets      : number of disjoint sets
//!
//! Equations:
//!   find(x)     = r  such that parent^k(x) = r = parent[r]
//!                 (every visited node is re-pointed at r: path compression)
//!   union(x, y) : attach the lower-rank root under the higher-rank root,
//!                 rank grows by one only when both ranks are equal
//!   amortised cost per operation = O(alpha(N))

pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets holding `x` and `y`. Returns false when they were
    /// already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}
