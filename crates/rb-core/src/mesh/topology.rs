//! Edge adjacency checks for triangle lists

use std::collections::HashMap;

/// Directed edge usage of a triangle list
#[derive(Debug, Clone, Default)]
pub struct EdgeCounts {
    directed: HashMap<(u32, u32), u32>,
}

impl EdgeCounts {
    /// How many triangles traverse `a -> b`
    pub fn directed(&self, a: u32, b: u32) -> u32 {
        self.directed.get(&(a, b)).copied().unwrap_or(0)
    }

    /// How many triangles use the edge `a - b` in either direction
    pub fn undirected(&self, a: u32, b: u32) -> u32 {
        self.directed(a, b) + self.directed(b, a)
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.directed
            .keys()
            .filter(|&&(a, b)| a < b || self.directed(b, a) == 0)
            .count()
    }

    /// Iterate over distinct directed edges and their use counts
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), u32)> + '_ {
        self.directed.iter().map(|(&edge, &count)| (edge, count))
    }
}

/// Count directed edge usage of a triangle list
pub fn edge_counts(indices: &[u32]) -> EdgeCounts {
    let mut directed = HashMap::new();
    for tri in indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *directed.entry((a, b)).or_insert(0) += 1;
        }
    }
    EdgeCounts { directed }
}

/// A triangle list is closed when every edge is shared by exactly two
/// triangles that traverse it in opposite directions.
pub fn is_closed(indices: &[u32]) -> bool {
    if indices.is_empty() {
        return false;
    }
    let counts = edge_counts(indices);
    counts
        .iter()
        .all(|((a, b), count)| count == 1 && counts.directed(b, a) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tetrahedron with consistent winding
    const TETRA: [u32; 12] = [0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];

    #[test]
    fn test_tetrahedron_closed() {
        assert!(is_closed(&TETRA));
        let counts = edge_counts(&TETRA);
        assert_eq!(counts.edge_count(), 6);
        assert_eq!(counts.undirected(0, 1), 2);
    }

    #[test]
    fn test_flipped_triangle_breaks_closure() {
        let mut indices = TETRA;
        indices.swap(0, 1);
        assert!(!is_closed(&indices));
    }

    #[test]
    fn test_missing_triangle_breaks_closure() {
        assert!(!is_closed(&TETRA[..9]));
        assert!(!is_closed(&[]));
    }
}
