//! City graph representation and builder.
//!
//! # Data layout
//!
//! Roads are undirected, so every road is stored as two directed halves.  The
//! halves are kept in **Compressed Sparse Row (CSR)** order: the outgoing
//! halves of `CityId c` occupy
//!
//! ```text
//! road_to[ out_start[c] .. out_start[c+1] ]
//! ```
//!
//! CSR construction uses a *stable* sort by source city, so a city's
//! neighbours come back in the order their roads were added.  Breadth-first
//! and depth-first tie-breaking depend on that order.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use wf_core::{CityId, GeoPoint};

use crate::{City, CityKind, GraphError, GraphResult};

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Immutable undirected road graph.
///
/// Do not construct directly; use [`GraphBuilder`] or one of the loaders.
#[derive(Debug)]
pub struct Graph {
    cities:  Vec<City>,
    by_name: FxHashMap<String, CityId>,

    /// CSR row pointer.  Length = `city_count + 1`.
    out_start: Vec<u32>,
    road_to:   Vec<CityId>,
    road_km:   Vec<f64>,
}

impl Graph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.road_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// City record for `id`, or `None` if the id is out of range.
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    /// Resolve an external city name to its id.
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Name of `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    pub fn name(&self, id: CityId) -> &str {
        &self.cities[id.index()].name
    }

    /// Position of `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    #[inline]
    pub fn pos(&self, id: CityId) -> GeoPoint {
        self.cities[id.index()].pos
    }

    /// All cities with their ids, in load order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, c)| (CityId(i as u32), c))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    #[inline]
    fn out_range(&self, city: CityId) -> std::ops::Range<usize> {
        let start = self.out_start[city.index()] as usize;
        let end   = self.out_start[city.index() + 1] as usize;
        start..end
    }

    /// Cities directly connected to `city` with the road distance in km.
    ///
    /// Both directions of every road are surfaced, in road insertion order.
    #[inline]
    pub fn neighbors(&self, city: CityId) -> impl Iterator<Item = (CityId, f64)> + '_ {
        self.out_range(city).map(|i| (self.road_to[i], self.road_km[i]))
    }

    pub fn degree(&self, city: CityId) -> usize {
        self.out_range(city).len()
    }

    /// Distance of the road joining `a` and `b` (either order), if any.
    ///
    /// At most one road joins a pair, so this is the distance every strategy
    /// charged for that step.
    pub fn edge_cost(&self, a: CityId, b: CityId) -> Option<f64> {
        self.neighbors(a)
            .find(|&(to, _)| to == b)
            .map(|(_, km)| km)
    }

    /// `true` if a road joins `a` and `b`.
    pub fn adjacent(&self, a: CityId, b: CityId) -> bool {
        self.edge_cost(a, b).is_some()
    }

    // ── Costs and heuristics ──────────────────────────────────────────────

    /// Sum of road distances along `path`.
    ///
    /// # Panics
    /// Panics if two consecutive cities are not joined by a road.  Paths
    /// produced by the search strategies never trigger this.
    pub fn path_cost(&self, path: &[CityId]) -> f64 {
        path.windows(2)
            .map(|w| {
                self.edge_cost(w[0], w[1]).unwrap_or_else(|| {
                    panic!(
                        "path step {} -> {} is not a road",
                        self.name(w[0]),
                        self.name(w[1])
                    )
                })
            })
            .sum()
    }

    /// Great-circle distance between two cities in km.  Admissible as a
    /// search heuristic because no road is shorter than the straight line.
    #[inline]
    pub fn straight_line_km(&self, a: CityId, b: CityId) -> f64 {
        self.pos(a).distance_km(self.pos(b))
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Every `add_*` call validates its input, so a builder that accepted all of
/// its calls always builds a consistent graph.
///
/// # Example
///
/// ```
/// use wf_core::GeoPoint;
/// use wf_graph::{City, CityKind, GraphBuilder};
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_city(City::new("A", CityKind::Capital, GeoPoint::new(0.0, 0.0))).unwrap();
/// let c = b.add_city(City::new("C", CityKind::EconomicCenter, GeoPoint::new(0.0, 0.1))).unwrap();
/// b.add_road(a, c, 14.0).unwrap();
/// let g = b.build();
/// assert_eq!(g.city_count(), 2);
/// assert_eq!(g.road_count(), 1);
/// assert_eq!(g.edge_cost(c, a), Some(14.0));
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    cities:    Vec<City>,
    by_name:   FxHashMap<String, CityId>,
    raw_roads: Vec<RawRoad>,
    /// Unordered endpoint pairs, smaller id first.
    pairs:     FxHashSet<(CityId, CityId)>,
}

struct RawRoad {
    from: CityId,
    to:   CityId,
    km:   f64,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cities: usize, roads: usize) -> Self {
        Self {
            cities:    Vec::with_capacity(cities),
            by_name:   FxHashMap::default(),
            raw_roads: Vec::with_capacity(roads * 2),
            pairs:     FxHashSet::default(),
        }
    }

    /// Add a city and return its `CityId` (sequential from 0).
    pub fn add_city(&mut self, city: City) -> GraphResult<CityId> {
        if !city.pos.is_valid() {
            return Err(GraphError::InvalidCoordinate { name: city.name, pos: city.pos });
        }
        if self.by_name.contains_key(&city.name) {
            return Err(GraphError::DuplicateCity(city.name));
        }
        let id = CityId(self.cities.len() as u32);
        self.by_name.insert(city.name.clone(), id);
        self.cities.push(city);
        Ok(id)
    }

    /// Shorthand for [`add_city`](Self::add_city) from parts.
    pub fn city(&mut self, name: &str, kind: CityKind, lat: f64, lon: f64) -> GraphResult<CityId> {
        self.add_city(City::new(name, kind, GeoPoint::new(lat, lon)))
    }

    /// Add an undirected road of `km` kilometres between two cities.
    ///
    /// A second road between the same two cities is rejected, in either
    /// direction.
    pub fn add_road(&mut self, a: CityId, b: CityId, km: f64) -> GraphResult<()> {
        for id in [a, b] {
            if id.index() >= self.cities.len() {
                return Err(GraphError::UnknownCity(id));
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop(self.cities[a.index()].name.clone()));
        }
        if !km.is_finite() || km < 0.0 {
            return Err(GraphError::InvalidDistance {
                from:     self.cities[a.index()].name.clone(),
                to:       self.cities[b.index()].name.clone(),
                distance: km,
            });
        }
        if !self.pairs.insert((a.min(b), a.max(b))) {
            return Err(GraphError::DuplicateRoad {
                from: self.cities[a.index()].name.clone(),
                to:   self.cities[b.index()].name.clone(),
            });
        }
        self.raw_roads.push(RawRoad { from: a, to: b, km });
        self.raw_roads.push(RawRoad { from: b, to: a, km });
        Ok(())
    }

    /// Add a road by city names, failing on unknown endpoints.
    pub fn add_road_named(&mut self, a: &str, b: &str, km: f64) -> GraphResult<()> {
        let lookup = |name: &str| {
            self.by_name.get(name).copied().ok_or_else(|| GraphError::DanglingRoad {
                from:    a.to_owned(),
                to:      b.to_owned(),
                missing: name.to_owned(),
            })
        };
        let from = lookup(a)?;
        let to   = lookup(b)?;
        self.add_road(from, to, km)
    }

    pub fn city_count(&self) -> usize { self.cities.len() }
    pub fn road_count(&self) -> usize { self.raw_roads.len() / 2 }

    /// Consume the builder and produce a [`Graph`].
    pub fn build(self) -> Graph {
        let city_count = self.cities.len();

        // Stable: per-city neighbour order must follow road insertion order.
        let mut raw = self.raw_roads;
        raw.sort_by_key(|r| r.from.0);

        let road_to:   Vec<CityId> = raw.iter().map(|r| r.to).collect();
        let road_km:   Vec<f64>    = raw.iter().map(|r| r.km).collect();

        let mut out_start = vec![0u32; city_count + 1];
        for r in &raw {
            out_start[r.from.index() + 1] += 1;
        }
        for i in 1..=city_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[city_count] as usize, raw.len());

        debug!(cities = city_count, roads = raw.len() / 2, "graph built");

        Graph {
            cities: self.cities,
            by_name: self.by_name,
            out_start,
            road_to,
            road_km,
        }
    }
}
