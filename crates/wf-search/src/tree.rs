//! Parent-pointer search tree used for path reconstruction.

use rustc_hash::FxHashMap;

use wf_core::CityId;

pub(crate) struct SearchTree {
    root:   CityId,
    parent: FxHashMap<CityId, CityId>,
}

impl SearchTree {
    pub fn new(root: CityId) -> Self {
        Self { root, parent: FxHashMap::default() }
    }

    /// Attach `child` under `parent`.  An existing attachment is kept.
    pub fn attach(&mut self, child: CityId, parent: CityId) {
        self.parent.entry(child).or_insert(parent);
    }

    /// `true` if `city` is the root or has been attached.
    pub fn contains(&self, city: CityId) -> bool {
        city == self.root || self.parent.contains_key(&city)
    }

    /// Root → `city`.
    ///
    /// # Panics
    /// Panics if `city` is not in the tree.
    pub fn path_to(&self, city: CityId) -> Vec<CityId> {
        let mut path = vec![city];
        let mut cur = city;
        while cur != self.root {
            cur = *self
                .parent
                .get(&cur)
                .unwrap_or_else(|| panic!("{cur} is not in the search tree"));
            path.push(cur);
        }
        path.reverse();
        path
    }
}
