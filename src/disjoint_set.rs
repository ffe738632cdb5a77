// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::{positive, PercolationError, Result};

/// Weighted quick-union over `0..len()`, with path halving in `find`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	// only meaningful at roots
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	pub fn new(n: usize) -> Result<DisjointSet> {
		let n = positive("disjoint set size", n)?;
		Ok(DisjointSet {
			parent: (0..n).collect(),
			size: vec![1; n],
			count: n,
		})
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	/// Number of disjoint sets.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn find(&mut self, x: usize) -> Result<usize> {
		self.check(x)?;
		let mut x = x;
		while self.parent[x] != x {
			// relink to grandparent
			self.parent[x] = self.parent[self.parent[x]];
			x = self.parent[x];
		}
		Ok(x)
	}

	/// Merges the sets holding `p` and `q`. Returns false if they were already one set.
	pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
		let p_root = self.find(p)?;
		let q_root = self.find(q)?;
		if p_root == q_root {
			return Ok(false);
		}

		if self.size[p_root] < self.size[q_root] {
			self.parent[p_root] = q_root;
			self.size[q_root] += self.size[p_root];
		} else {
			self.parent[q_root] = p_root;
			self.size[p_root] += self.size[q_root];
		}
		self.count -= 1;
		Ok(true)
	}

	/// Root of `x` without relinking anything, for read-only callers.
	pub fn root(&self, x: usize) -> Result<usize> {
		self.check(x)?;
		let mut x = x;
		while self.parent[x] != x {
			x = self.parent[x];
		}
		Ok(x)
	}

	pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
		Ok(self.find(p)? == self.find(q)?)
	}

	/// Size of the set rooted at `root`, or `None` if `root` isn't a root.
	pub fn size(&self, root: usize) -> Result<Option<usize>> {
		self.check(root)?;
		if self.parent[root] == root {
			Ok(Some(self.size[root]))
		} else {
			Ok(None)
		}
	}

	fn check(&self, x: usize) -> Result<()> {
		if x >= self.len() {
			return Err(PercolationError::IndexOutOfRange {
				row: x as i64,
				col: 0,
				n: self.len(),
			});
		}
		Ok(())
	}
}
