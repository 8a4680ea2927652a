use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

/// Forward and reverse index over trolley routes.
///
/// The route table is the source of truth: route name to ordered stop list.
/// The stop index (stop name to the routes serving it) is derived from it and
/// every mutation keeps the two in step; a stop whose route set becomes empty
/// is dropped from the index outright.
#[derive(Debug, Default)]
pub struct RouteIndex {
    routes: BTreeMap<String, Vec<String>>,
    stops: BTreeMap<String, BTreeSet<String>>,
}

impl RouteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every route and stop.
    pub fn clear(&mut self) {
        self.routes.clear();
        self.stops.clear();
    }

    /// Defines `name` as running over `stops`, replacing any previous
    /// definition wholesale. The old stop associations are retracted and the
    /// new ones installed within this single call; there is no way to update
    /// one map without the other.
    pub fn define_route(&mut self, name: &str, stops: Vec<String>) {
        if let Some(previous) = self.routes.get(name) {
            tracing::debug!(route = name, "replacing existing route");
            for stop in previous {
                let emptied = match self.stops.get_mut(stop) {
                    Some(serving) => {
                        serving.remove(name);
                        serving.is_empty()
                    }
                    None => false,
                };
                if emptied {
                    self.stops.remove(stop);
                }
            }
        }

        for stop in &stops {
            self.stops
                .entry(stop.clone())
                .or_default()
                .insert(name.to_string());
        }
        self.routes.insert(name.to_string(), stops);
    }

    /// Routes serving `stop`; empty if the stop is unknown.
    pub fn routes_at(&self, stop: &str) -> BTreeSet<String> {
        self.stops.get(stop).cloned().unwrap_or_default()
    }

    /// Stops of `route` in traversal order, each paired with the other routes
    /// serving it. Stops without a transfer are omitted, as is every repeat
    /// of a stop after its first appearance. Unknown routes yield an empty
    /// result.
    pub fn transfers_along(&self, route: &str) -> Vec<(String, BTreeSet<String>)> {
        let Some(stops) = self.routes.get(route) else {
            return Vec::new();
        };

        stops
            .iter()
            .unique()
            .filter_map(|stop| {
                let mut others = self.routes_at(stop);
                others.remove(route);
                (!others.is_empty()).then(|| (stop.clone(), others))
            })
            .collect()
    }

    /// Snapshot of every route and its stop list.
    pub fn all_routes(&self) -> BTreeMap<String, Vec<String>> {
        self.routes.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    /// Rebuilds the reverse index from the route table and requires the
    /// stored one to match it exactly.
    fn assert_consistent(index: &RouteIndex) {
        let mut rebuilt: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (name, stops) in &index.routes {
            for stop in stops {
                rebuilt
                    .entry(stop.clone())
                    .or_default()
                    .insert(name.clone());
            }
        }
        assert_eq!(rebuilt, index.stops);
    }

    #[test]
    fn transfers_at_shared_stops_only() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Park", "Mall"]));
        index.define_route("T2", stops(&["Mall", "Square"]));

        assert_eq!(index.routes_at("Mall"), set(&["T1", "T2"]));
        assert_eq!(
            index.transfers_along("T1"),
            vec![("Mall".to_string(), set(&["T2"]))]
        );
        assert_consistent(&index);
    }

    #[test]
    fn redefinition_retracts_old_stops() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Park", "Mall"]));
        index.define_route("T2", stops(&["Mall", "Square"]));
        index.define_route("T1", stops(&["Square"]));

        assert_eq!(index.routes_at("Mall"), set(&["T2"]));
        assert_eq!(index.routes_at("Square"), set(&["T1", "T2"]));
        assert_eq!(index.routes_at("Park"), BTreeSet::new());
        assert_consistent(&index);
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let index = RouteIndex::new();
        assert!(index.routes_at("Nowhere").is_empty());
        assert!(index.transfers_along("T9").is_empty());
        assert!(index.all_routes().is_empty());
    }

    #[test]
    fn queried_route_never_lists_itself() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Park", "Mall", "Park"]));
        index.define_route("T2", stops(&["Park"]));

        let transfers = index.transfers_along("T1");
        assert_eq!(transfers, vec![("Park".to_string(), set(&["T2"]))]);
        for (_, others) in &transfers {
            assert!(!others.contains("T1"));
        }
    }

    #[test]
    fn repeated_stop_reported_once_in_traversal_order() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Mall", "Park", "Mall", "Square"]));
        index.define_route("T2", stops(&["Square", "Mall"]));

        let transfers = index.transfers_along("T1");
        assert_eq!(
            transfers,
            vec![
                ("Mall".to_string(), set(&["T2"])),
                ("Square".to_string(), set(&["T2"])),
            ]
        );
        assert_consistent(&index);
    }

    #[test]
    fn empty_stop_list_contributes_no_reverse_entries() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Park", "Mall"]));
        index.define_route("T1", Vec::new());

        assert_eq!(index.all_routes().get("T1"), Some(&Vec::new()));
        assert!(index.routes_at("Park").is_empty());
        assert!(index.routes_at("Mall").is_empty());
        assert!(index.transfers_along("T1").is_empty());
        assert_consistent(&index);
    }

    #[test]
    fn all_routes_is_a_snapshot() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Park"]));

        let mut snapshot = index.all_routes();
        snapshot.insert("T9".to_string(), stops(&["Mall"]));
        snapshot.get_mut("T1").unwrap().push("Square".to_string());

        assert_eq!(index.all_routes().len(), 1);
        assert_eq!(index.all_routes()["T1"], stops(&["Park"]));
        assert!(index.routes_at("Square").is_empty());
    }

    #[test]
    fn clear_empties_both_maps() {
        let mut index = RouteIndex::new();
        index.define_route("T1", stops(&["Park", "Mall"]));
        index.clear();

        assert!(index.is_empty());
        assert!(index.routes_at("Park").is_empty());
        assert_consistent(&index);
    }

    #[test]
    fn consistency_holds_over_many_redefinitions() {
        let mut index = RouteIndex::new();
        let lines = ["T1", "T2", "T3"];
        let places = ["Park", "Mall", "Square", "Depot", "Bridge"];

        for round in 0..8usize {
            for (i, line) in lines.iter().enumerate() {
                let picked: Vec<String> = places
                    .iter()
                    .cycle()
                    .skip(round + i)
                    .take(1 + (round + i) % places.len())
                    .map(|place| place.to_string())
                    .collect();
                index.define_route(line, picked);
                assert_consistent(&index);
            }
        }

        for (name, stops) in index.all_routes() {
            for stop in stops {
                assert!(index.routes_at(&stop).contains(&name));
            }
        }
    }
}
