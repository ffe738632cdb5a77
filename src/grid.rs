use std::fmt;

use crate::data::{Site, SiteState};
use crate::disjoint_set::DisjointSet;
use crate::error::{positive, PercolationError, Result};

/// Square row-major map indexed by `Site`.
#[derive(Debug, Clone)]
pub struct GMap<T> {
    pub gmap: Vec<Vec<T>>,
}

impl <T: Clone> GMap<T> {
    pub fn filled(n: usize, value: T) -> GMap<T> {
        GMap { gmap: vec![vec![value; n]; n] }
    }
}

impl <T> GMap<T> {
    pub fn get(&self, pos: Site) -> &T {
        &self.gmap[pos.row][pos.col]
    }

    pub fn get_idx(&self, row: usize, col: usize) -> &T {
        &self.gmap[row][col]
    }

    pub fn get_mut(&mut self, pos: Site) -> &mut T {
        &mut self.gmap[pos.row][pos.col]
    }
}

/// An n-by-n grid of sites, all blocked at first.
///
/// Every open top-row site is joined to one virtual top element at index `n*n`.
/// There is no virtual bottom element, since joining it would make every open
/// bottom-row site look full as soon as any path reached the bottom.
/// Instead each root carries a flag saying its set holds an open bottom-row
/// site, and percolation is latched the first time an open joins such a set
/// to the top.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: GMap<bool>,
    open_count: usize,
    uf: DisjointSet,
    // read at roots only
    bottom: Vec<bool>,
    virtual_top: usize,
    percolated: bool,
}

impl Percolation {
    pub fn new(n: usize) -> Result<Percolation> {
        let n = positive("grid size", n)?;
        Ok(Percolation {
            n,
            open: GMap::filled(n, false),
            open_count: 0,
            uf: DisjointSet::new(n * n + 1)?,
            bottom: vec![false; n * n + 1],
            virtual_top: n * n,
            percolated: false,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site if it isn't open already.
    pub fn open(&mut self, row: i64, col: i64) -> Result<()> {
        let site = self.site(row, col)?;
        if *self.open.get(site) {
            return Ok(());
        }

        *self.open.get_mut(site) = true;
        self.open_count += 1;

        let idx = self.index(site);
        let mut joined = Vec::with_capacity(5);
        if site.row == 0 {
            joined.push(self.virtual_top);
        }
        for next in site.neighbors(self.n) {
            if *self.open.get(next) {
                joined.push(self.index(next));
            }
        }

        let mut touches_bottom = site.row == self.n - 1;
        for &j in &joined {
            let root = self.uf.find(j)?;
            touches_bottom |= self.bottom[root];
        }
        for &j in &joined {
            self.uf.union(idx, j)?;
        }
        let root = self.uf.find(idx)?;
        self.bottom[root] = touches_bottom;

        if touches_bottom && !self.percolated && self.uf.connected(idx, self.virtual_top)? {
            debug!("percolated at {:?} after {} open sites", site, self.open_count);
            self.percolated = true;
        }
        Ok(())
    }

    pub fn is_open(&self, row: i64, col: i64) -> Result<bool> {
        let site = self.site(row, col)?;
        Ok(*self.open.get(site))
    }

    /// True iff the site is joined to the top row by a chain of open sites.
    pub fn is_full(&mut self, row: i64, col: i64) -> Result<bool> {
        let site = self.site(row, col)?;
        let idx = self.index(site);
        self.uf.connected(idx, self.virtual_top)
    }

    pub fn site_state(&self, row: i64, col: i64) -> Result<SiteState> {
        let site = self.site(row, col)?;
        self.state_of(site)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    pub fn percolates(&self) -> bool {
        self.percolated
    }

    fn state_of(&self, site: Site) -> Result<SiteState> {
        if !*self.open.get(site) {
            return Ok(SiteState::Blocked);
        }
        let top = self.uf.root(self.virtual_top)?;
        if self.uf.root(self.index(site))? == top {
            Ok(SiteState::Full)
        } else {
            Ok(SiteState::Open)
        }
    }

    fn site(&self, row: i64, col: i64) -> Result<Site> {
        let n = self.n as i64;
        if row < 0 || row >= n || col < 0 || col >= n {
            return Err(PercolationError::IndexOutOfRange { row, col, n: self.n });
        }
        Ok(Site { row: row as usize, col: col as usize })
    }

    fn index(&self, site: Site) -> usize {
        site.row * self.n + site.col
    }
}

impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                let state = self.state_of(Site { row, col }).map_err(|_| fmt::Error)?;
                write!(f, "{}  ", state.get_char_encoding())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmap_get_mut() {
        let mut m = GMap::filled(2, 0usize);
        *m.get_mut(Site { row: 1, col: 0 }) = 7;
        assert_eq!(*m.get_idx(1, 0), 7);
        assert_eq!(*m.get(Site { row: 0, col: 1 }), 0);
    }

    #[test]
    fn test_index_layout() {
        let p = Percolation::new(4).unwrap();
        assert_eq!(p.index(Site { row: 0, col: 0 }), 0);
        assert_eq!(p.index(Site { row: 2, col: 3 }), 11);
        assert_eq!(p.virtual_top, 16);
        assert_eq!(p.uf.len(), 17);
    }

    #[test]
    fn test_open_top_row_joins_virtual_top() {
        let mut p = Percolation::new(3).unwrap();
        p.open(0, 2).unwrap();
        assert!(p.uf.connected(2, p.virtual_top).unwrap());
        // virtual top + one site merged
        assert_eq!(p.uf.count(), 9);
    }

    #[test]
    fn test_bottom_flag_follows_root() {
        let mut p = Percolation::new(3).unwrap();
        p.open(2, 0).unwrap();
        p.open(1, 0).unwrap();
        let root = p.uf.find(3).unwrap();
        assert!(p.bottom[root]);
        assert!(!p.percolates());
        p.open(0, 0).unwrap();
        assert!(p.percolates());
    }

    #[test]
    fn test_render_three_states() {
        let mut p = Percolation::new(2).unwrap();
        p.open(0, 0).unwrap();
        p.open(1, 1).unwrap();
        assert_eq!(p.to_string(), "▣  □  \n□  ▪  \n");
    }

    #[test]
    fn test_site_state() {
        let mut p = Percolation::new(3).unwrap();
        p.open(1, 1).unwrap();
        assert_eq!(p.site_state(1, 1).unwrap(), SiteState::Open);
        p.open(0, 1).unwrap();
        assert_eq!(p.site_state(1, 1).unwrap(), SiteState::Full);
        assert_eq!(p.site_state(2, 2).unwrap(), SiteState::Blocked);
        assert!(p.site_state(3, 0).is_err());
    }
}
