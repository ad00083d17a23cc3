use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Curated neighborhood adjacency used when no override is configured
const DEFAULT_ADJACENCY: &[(&str, &[&str])] = &[
    ("Dubai Marina", &["JBR", "Palm Jumeirah", "JLT", "Emirates Hills"]),
    ("JBR", &["Palm Jumeirah", "Al Sufouh"]),
    ("Palm Jumeirah", &["Al Sufouh", "Umm Suqeim"]),
    ("JLT", &["Emirates Hills", "The Greens", "Al Barsha"]),
    ("The Greens", &["Emirates Hills", "Al Barsha"]),
    ("Al Barsha", &["Al Sufouh", "Al Quoz", "Barsha Heights"]),
    ("Umm Suqeim", &["Jumeirah", "Al Sufouh", "Al Quoz"]),
    ("Jumeirah", &["City Walk", "Al Wasl", "Downtown Dubai"]),
    ("Downtown Dubai", &["Business Bay", "DIFC", "City Walk"]),
    ("Business Bay", &["DIFC", "Al Quoz"]),
    ("Arabian Ranches", &["Motor City", "Dubai Hills Estate", "Dubai Sports City"]),
    ("Motor City", &["Dubai Sports City"]),
    ("Dubai Hills Estate", &["Al Barsha", "Al Quoz"]),
    ("Mirdif", &["Al Warqa", "Rashidiya"]),
    ("Deira", &["Bur Dubai", "Al Garhoud"]),
    ("Bur Dubai", &["Al Karama", "Oud Metha"]),
];

/// Static adjacency lookup between named neighborhoods
///
/// Edges are symmetric: adding `a -> b` also adds `b -> a`. This is the
/// single source of "nearby" for both the compatibility scorer and the
/// nearby finder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProximityGraph {
    edges: HashMap<String, BTreeSet<String>>,
}

impl ProximityGraph {
    /// Empty graph, nothing is adjacent
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from adjacency lists, symmetrizing every edge
    pub fn from_adjacency<I, N, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (name, neighbors) in adjacency {
            for neighbor in neighbors {
                graph.connect(name.as_ref(), neighbor.as_ref());
            }
        }
        graph
    }

    /// Add an undirected edge; self-loops are ignored
    pub fn connect(&mut self, a: &str, b: &str) {
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() || a == b {
            return;
        }
        self.edges.entry(a.to_string()).or_default().insert(b.to_string());
        self.edges.entry(b.to_string()).or_default().insert(a.to_string());
    }

    /// Distinct neighborhoods that are graph-adjacent
    #[inline]
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        a != b && self.edges.get(a).is_some_and(|n| n.contains(b))
    }

    /// Same neighborhood or graph-adjacent; empty names are never nearby
    #[inline]
    pub fn is_nearby(&self, a: &str, b: &str) -> bool {
        !a.is_empty() && (a == b || self.is_adjacent(a, b))
    }

    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = &str> {
        self.edges.get(name).into_iter().flatten().map(String::as_str)
    }

    /// Sorted adjacency view for presentation
    pub fn to_sorted(&self) -> BTreeMap<String, Vec<String>> {
        self.edges
            .iter()
            .map(|(name, neighbors)| (name.clone(), neighbors.iter().cloned().collect()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Graph built from the built-in adjacency table
pub fn default_graph() -> ProximityGraph {
    ProximityGraph::from_adjacency(
        DEFAULT_ADJACENCY
            .iter()
            .map(|(name, neighbors)| (*name, neighbors.iter().copied())),
    )
}
