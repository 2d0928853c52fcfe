/// Disjoint-set (union-find) over the vertices `0..n`.
///
/// `find` compresses paths and `union` merges by rank, which keeps trees
/// logarithmically shallow and gives near-constant amortized operations.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, each its own root with rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Rank of the entry at `x`. Only meaningful for roots.
    pub fn rank(&self, x: usize) -> usize {
        self.rank[x]
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Walks to the root first, then makes a second pass re-pointing every
    /// visited entry straight at it. Iterative, so deep trees cannot
    /// exhaust the stack.
    ///
    /// # Panics
    /// If `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// The root of lower rank goes under the root of higher rank. On a tie
    /// the root of `b` goes under the root of `a`, and `a`'s root gains one
    /// rank. Returns `true` if a merge happened, `false` if `a` and `b` were
    /// already in the same set (the structure is left untouched).
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.components -= 1;
        true
    }
}
