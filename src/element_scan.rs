use smallvec::SmallVec;

use crate::containment::{Point, Triangle};
use crate::element_table::Element;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::point_locator::PointLocator;

/// A point locator that scans the elements of a mesh in row order.
///
/// No search structure is built: each query point is tested against the elements one
/// row at a time, and the first element whose containment test accepts the point wins.
/// The first-match rule is what makes results deterministic on shared edges, shared
/// vertices and overlapping elements, and it holds for every way of invoking the
/// locator.
///
/// [`locate_many`] runs element-major: the geometry of each row is set up once (for
/// triangles the reference cross products are reused for every query point), only
/// queries without a result yet are tested, and the scan stops as soon as every query
/// has an element. The early exit cannot change any result, since a resolved query is
/// never tested again.
///
/// [`locate_many`]: PointLocator::locate_many
pub struct ElementScan<'a> {
    mesh: &'a Mesh,
}

/// Geometry of one element row, set up once per row and shared by every query point
/// tested against it.
enum Geometry {
    Triangle(Triangle),
    Polygon(SmallVec<[Point; 8]>),
}

impl Geometry {
    fn contains(&self, point: &Point) -> bool {
        match self {
            Geometry::Triangle(triangle) => triangle.contains(point),
            Geometry::Polygon(vertices) => point.is_inside_convex(vertices.iter().copied()),
        }
    }
}

impl<'a> ElementScan<'a> {
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// Geometry of an element row, or [`None`] for rows with fewer than 3 live nodes.
    ///
    /// Validation cannot produce such rows, but the scan skips them rather than rely on
    /// that.
    fn geometry(&self, element: Element<'_>) -> Option<Geometry> {
        let arity = element.arity();
        if arity < 3 {
            return None;
        }
        let vertices: SmallVec<[Point; 8]> = (0..arity)
            .map(|k| Point::from(self.mesh.coords(element.node(k))))
            .collect();
        Some(if arity == 3 {
            Geometry::Triangle(Triangle::new(vertices[0], vertices[1], vertices[2]))
        } else {
            Geometry::Polygon(vertices)
        })
    }

    /// Locates query points given as separate coordinate arrays.
    ///
    /// Results use the element numbering of the input table: 1-based row indices as
    /// integral floats, with [`f64::NAN`] marking points outside every element.
    ///
    /// Fails with [`MeshError::InputSizeMismatch`] if `xi` and `yi` differ in length.
    pub fn locate_coords(&self, xi: &[f64], yi: &[f64]) -> Result<Vec<f64>, MeshError> {
        if xi.len() != yi.len() {
            return Err(MeshError::InputSizeMismatch {
                x: xi.len(),
                y: yi.len(),
            });
        }
        let points: Vec<[f64; 2]> = xi.iter().zip(yi).map(|(&x, &y)| [x, y]).collect();
        Ok(self
            .locate_many(&points)
            .into_iter()
            .map(|found| found.map_or(f64::NAN, |row| (row + 1) as f64))
            .collect())
    }
}

impl PointLocator for ElementScan<'_> {
    fn locate_one(&self, point: &[f64; 2]) -> Option<usize> {
        let point = Point::from(point);
        for element in self.mesh.elements().rows() {
            if let Some(geometry) = self.geometry(element) {
                if geometry.contains(&point) {
                    return Some(element.row());
                }
            }
        }
        None
    }

    fn locate_many(&self, points: &[[f64; 2]]) -> Vec<Option<usize>> {
        let points: Vec<Point> = points.iter().map(Point::from).collect();
        let mut result = vec![None; points.len()];
        for element in self.mesh.elements().rows() {
            let Some(geometry) = self.geometry(element) else {
                continue;
            };
            // Tracks whether this pass still saw queries left to resolve; once none
            // are, later rows cannot change the result and the scan stops
            let mut all_resolved = true;
            for (slot, point) in result.iter_mut().zip(&points) {
                if slot.is_some() {
                    continue;
                }
                all_resolved = false;
                if geometry.contains(point) {
                    *slot = Some(element.row());
                }
            }
            if all_resolved {
                break;
            }
        }
        result
    }
}
