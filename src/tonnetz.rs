//! Tonnetz lattice: which pitch class sits at each node and how nodes connect.
//!
//! Nodes are addressed by a diagonal index `i` and a horizontal index `j`.
//! Stepping along `j` adds `horiz_interval` (a fifth by default), stepping
//! along `i` adds `diag_interval` (a major third), so every triangle of the
//! lattice is a triad.

use serde::Serialize;

use crate::error::AnalyzerError;
use crate::rotation::check_edo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonnetzNode {
    pub i: i64,
    pub j: i64,
    pub pitch_class: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tonnetz {
    edo: u32,
    horiz_interval: i64,
    diag_interval: i64,
    horiz_radius: i64,
    diag_radius: i64,
}

impl Tonnetz {
    /// A fifths-by-major-thirds lattice, 13 nodes wide and 7 deep.
    pub fn new(edo: u32) -> Result<Self, AnalyzerError> {
        check_edo(edo)?;
        Ok(Tonnetz {
            edo,
            horiz_interval: 7,
            diag_interval: 4,
            horiz_radius: 6,
            diag_radius: 3,
        })
    }

    pub fn with_intervals(mut self, horiz: i64, diag: i64) -> Self {
        self.horiz_interval = horiz;
        self.diag_interval = diag;
        self
    }

    pub fn with_radii(mut self, horiz: u32, diag: u32) -> Self {
        self.horiz_radius = i64::from(horiz);
        self.diag_radius = i64::from(diag);
        self
    }

    pub fn edo(&self) -> u32 {
        self.edo
    }

    pub fn pitch_class_at(&self, i: i64, j: i64) -> u32 {
        let edo = i128::from(self.edo);
        let diag = (i128::from(i) * i128::from(self.diag_interval)).rem_euclid(edo);
        let horiz = (i128::from(j) * i128::from(self.horiz_interval)).rem_euclid(edo);
        ((diag + horiz) % edo) as u32
    }

    fn width(&self) -> i64 {
        2 * self.diag_radius + 1
    }

    /// Position of node `(i, j)` in [`Tonnetz::nodes`], if it is on the lattice.
    pub fn grid_index(&self, i: i64, j: i64) -> Option<usize> {
        if i.unsigned_abs() > self.diag_radius.unsigned_abs()
            || j.unsigned_abs() > self.horiz_radius.unsigned_abs()
        {
            return None;
        }
        Some(((self.horiz_radius + j) * self.width() + self.diag_radius + i) as usize)
    }

    /// All nodes, row by row: `j` ascending, then `i` ascending within a row.
    pub fn nodes(&self) -> Vec<TonnetzNode> {
        (-self.horiz_radius..=self.horiz_radius)
            .flat_map(|j| {
                (-self.diag_radius..=self.diag_radius).map(move |i| TonnetzNode {
                    i,
                    j,
                    pitch_class: self.pitch_class_at(i, j),
                })
            })
            .collect()
    }

    /// Lattice edges as pairs of indices into [`Tonnetz::nodes`].
    ///
    /// Each cell contributes its lower-left triangle; the top row and the
    /// last diagonal column are closed off afterwards.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let (hr, dr) = (self.horiz_radius, self.diag_radius);
        let mut edges = Vec::new();
        let mut link = |a: (i64, i64), b: (i64, i64)| {
            if let (Some(a), Some(b)) = (self.grid_index(a.0, a.1), self.grid_index(b.0, b.1)) {
                edges.push((a, b));
            }
        };
        for y in -hr..hr {
            for x in -dr..dr {
                link((x, y), (x, y + 1));
                link((x, y), (x + 1, y));
                link((x + 1, y), (x, y + 1));
            }
        }
        for x in -dr..dr {
            link((x, hr), (x + 1, hr));
        }
        for y in (-hr..hr).rev() {
            link((dr, y), (dr, y + 1));
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lattice_size() {
        let t = Tonnetz::new(12).unwrap();
        assert_eq!(t.nodes().len(), 13 * 7);
    }

    #[test]
    fn test_pitch_classes() {
        let t = Tonnetz::new(12).unwrap();
        assert_eq!(t.pitch_class_at(0, 0), 0);
        assert_eq!(t.pitch_class_at(0, 1), 7);
        assert_eq!(t.pitch_class_at(1, 0), 4);
        assert_eq!(t.pitch_class_at(-1, -1), 1);
        assert_eq!(t.pitch_class_at(3, 6), 6);
    }

    #[test]
    fn test_grid_index_matches_nodes() {
        let t = Tonnetz::new(12).unwrap();
        let nodes = t.nodes();
        for &(i, j) in &[(0, 0), (-3, -6), (3, 6), (2, -1)] {
            let node = nodes[t.grid_index(i, j).unwrap()];
            assert_eq!((node.i, node.j), (i, j));
        }
        assert_eq!(t.grid_index(4, 0), None);
        assert_eq!(t.grid_index(0, -7), None);
    }

    #[test]
    fn test_centre_is_middle_node() {
        let t = Tonnetz::new(12).unwrap();
        assert_eq!(t.grid_index(0, 0), Some(45));
    }

    #[test]
    fn test_small_lattice_edges() {
        let t = Tonnetz::new(12).unwrap().with_radii(1, 1);
        let edges = t.edges();
        // 4 cells x 3 edges, plus 2 closing the top row and 2 the last column.
        assert_eq!(edges.len(), 16);
        // Cell at (-1, -1): up, right, and the diagonal between them.
        assert_eq!(&edges[..3], &[(0, 3), (0, 1), (1, 3)]);
        assert_eq!(&edges[12..14], &[(6, 7), (7, 8)]);
        assert_eq!(&edges[14..], &[(5, 8), (2, 5)]);
    }

    #[test]
    fn test_triangles_are_triads() {
        let t = Tonnetz::new(12).unwrap();
        let nodes = t.nodes();
        let pc = |i, j| nodes[t.grid_index(i, j).unwrap()].pitch_class;
        // C, E, G around the triangle at the centre.
        let mut triad = vec![pc(0, 0), pc(1, 0), pc(0, 1)];
        triad.sort_unstable();
        assert_eq!(triad, vec![0, 4, 7]);
    }

    #[test]
    fn test_custom_intervals_and_edo() {
        let t = Tonnetz::new(19).unwrap().with_intervals(11, 6);
        assert_eq!(t.pitch_class_at(1, 1), 17);
        assert_eq!(t.pitch_class_at(0, 2), 3);
        assert_eq!(t.edo(), 19);
    }

    #[test]
    fn test_extreme_coordinates() {
        let t = Tonnetz::new(12).unwrap();
        assert_eq!(t.grid_index(i64::MIN, 0), None);
        assert_eq!(t.grid_index(0, i64::MIN), None);
        assert_eq!(t.grid_index(i64::MAX, i64::MAX), None);
        assert_eq!(t.pitch_class_at(0, i64::MIN), 4);

        let wide = Tonnetz::new(12).unwrap().with_intervals(i64::MAX, i64::MAX);
        assert_eq!(wide.pitch_class_at(i64::MAX, 1), 8);
        let widest = Tonnetz::new(12).unwrap().with_intervals(i64::MIN, i64::MIN);
        assert_eq!(widest.pitch_class_at(i64::MIN, i64::MIN), 8);
    }

    #[test]
    fn test_zero_edo_rejected() {
        assert!(Tonnetz::new(0).is_err());
    }
}
