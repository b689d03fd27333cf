use itertools::Itertools;
use std::collections::HashMap;

use crate::error::NetworkError;

pub type StationId = u32;

/// A physical line: an ordered sequence of stations, each consecutive
/// pair one hop apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub stops: Vec<StationId>,
}

impl Route {
    pub fn new(name: &str, stops: Vec<StationId>) -> Self {
        Self {
            name: name.to_owned(),
            stops,
        }
    }
}

/// Undirected one-hop reachability, aggregated over every route.
///
/// Neighbor lists keep first-insertion order, so iteration order over
/// a station's neighbors follows route definition order.
#[derive(Debug, Default)]
pub struct Network {
    adjacency: HashMap<StationId, Vec<StationId>>,
}

impl Network {
    pub fn build(routes: &[Route]) -> Result<Self, NetworkError> {
        let mut network = Self::default();

        for route in routes {
            if route.stops.len() < 2 {
                return Err(NetworkError::RouteTooShort {
                    route: route.name.to_owned(),
                    stops: route.stops.len(),
                });
            }

            for (&a, &b) in route.stops.iter().tuple_windows() {
                network.connect(a, b);
            }
        }

        Ok(network)
    }

    fn connect(&mut self, a: StationId, b: StationId) {
        for (from, to) in [(a, b), (b, a)] {
            let neighbors = self.adjacency.entry(from).or_default();
            if !neighbors.contains(&to) {
                neighbors.push(to);
            }
        }
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Empty for a station no route touches.
    pub fn neighbors(&self, station: StationId) -> &[StationId] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
