//! Disjoint-set forest over `0..n` with path compression and union by rank.

/// Indices are trusted; callers only pass vertices of the graph being processed.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Representative of `x`'s set. Every node on the walked path is re-pointed at it.
    pub(crate) fn find(&mut self, x: usize) -> usize {
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

    /// Merge the sets of `x` and `y`. Returns `false` if they were already one set.
    ///
    /// The lower-rank root goes under the higher; on a tie `y`'s root goes under
    /// `x`'s and `x`'s rank grows.
    pub(crate) fn unite(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
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
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_their_own_roots() {
        let mut uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_tie_attaches_second_under_first() {
        let mut uf = UnionFind::new(2);
        assert!(uf.unite(0, 1));
        assert_eq!(uf.find(1), 0);
        assert!(!uf.unite(1, 0));
    }

    #[test]
    fn test_lower_rank_goes_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.unite(0, 1); // root 0, rank 1
        uf.unite(2, 0); // rank 0 root 2 goes under 0
        assert_eq!(uf.find(2), 0);
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let mut uf = UnionFind::new(5);
        uf.unite(0, 1);
        uf.unite(2, 3);
        uf.unite(0, 2);
        uf.unite(4, 3);
        let root = uf.find(3);
        assert_eq!(uf.parent[3], root);
        for i in 0..5 {
            assert_eq!(uf.find(i), root);
        }
    }
}
