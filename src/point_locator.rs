use rayon::prelude::*;

/// A trait to locate one or several query points within a mesh.
///
/// Implementations must be deterministic: identical inputs yield identical results,
/// including which element wins when a point lies in several of them (shared edges,
/// shared vertices, overlapping elements).
pub trait PointLocator {
    /// Locates one query point within a mesh.
    ///
    /// Returns [`None`] if the query point does not lie in any element of the mesh.
    fn locate_one(&self, point: &[f64; 2]) -> Option<usize>;

    /// Locates several query points within a mesh.
    fn locate_many(&self, points: &[[f64; 2]]) -> Vec<Option<usize>> {
        points.iter().map(|point| self.locate_one(point)).collect()
    }

    /// Locates several query points within a mesh in parallel.
    ///
    /// Splitting over queries is safe: each point resolves independently, so the result
    /// is the same as the sequential version for any split.
    fn par_locate_many(&self, points: &[[f64; 2]]) -> Vec<Option<usize>>
    where
        Self: std::marker::Sync,
    {
        points
            .par_iter()
            .map(|point| self.locate_one(point))
            .collect()
    }
}
