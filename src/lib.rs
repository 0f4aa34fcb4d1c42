//! Point location in planar polygonal meshes.
//!
//! Given the node coordinates of a mesh, an element table listing each element's nodes
//! (triangles, or convex polygons with a variable number of nodes), and a set of query
//! points, find for each query point the element containing it.
//!
//! The containment test is a same-side cross-product test: a point lies inside a convex
//! element if, for every wrap-around triple of consecutive vertices, it lies on the same
//! side of the line through the first two as the third one does. Elements are scanned in
//! row order and the first match wins, which makes results deterministic on shared
//! edges, shared vertices and overlapping elements.
//!
//! ```
//! use elemloc::{ElementScan, ElementTable, Mesh, PointLocator};
//!
//! // A unit square split into two triangles along its diagonal
//! let x = vec![0., 1., 1., 0.];
//! let y = vec![0., 0., 1., 1.];
//! let table = ElementTable::from_row_major(vec![1., 2., 3., 1., 3., 4.], 3)?;
//! let mesh = Mesh::new(x, y, table)?;
//!
//! let locator = ElementScan::new(&mesh);
//! assert_eq!(locator.locate_one(&[0.25, 0.2]), Some(0));
//! assert_eq!(locator.locate_one(&[0.75, 0.8]), Some(1));
//! assert_eq!(locator.locate_one(&[5., 5.]), None);
//! # Ok::<(), elemloc::MeshError>(())
//! ```

mod containment;
mod element_scan;
mod element_table;
mod error;
mod mesh;
mod point_locator;

pub use containment::Point;
pub use element_scan::ElementScan;
pub use element_table::{Element, ElementTable, Rows};
pub use error::MeshError;
pub use mesh::Mesh;
pub use point_locator::PointLocator;
