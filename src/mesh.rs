use itertools::Itertools;

use crate::element_table::ElementTable;
use crate::error::MeshError;

/// A planar mesh: node coordinates plus the element table tying them together.
///
/// Construction validates the whole input up front, so search code only ever sees a
/// structurally sound mesh.
#[derive(Debug, Clone)]
pub struct Mesh {
    x: Vec<f64>,
    y: Vec<f64>,
    elements: ElementTable,
}

impl Mesh {
    /// Builds a mesh after checking the structural invariants.
    ///
    /// The checks run fully before any search work, in order:
    /// - `x` and `y` must be equal in size;
    /// - the element table must have at least 3 columns;
    /// - every table entry must reference a node (lie in `[1, N]`) unless it is a
    ///   padding zero in a column beyond the third.
    pub fn new(x: Vec<f64>, y: Vec<f64>, elements: ElementTable) -> Result<Self, MeshError> {
        if x.len() != y.len() {
            return Err(MeshError::InputSizeMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if elements.column_count() < 3 {
            return Err(MeshError::InsufficientColumns(elements.column_count()));
        }
        let n = x.len() as f64;
        for row in 0..elements.row_count() {
            for col in 0..elements.column_count() {
                let value = elements.node_ref(row, col);
                // The comparison polarity matters: a NaN entry passes the range check
                // and later terminates the arity count like a padding zero would
                if (value < 1. || value > n) && !(value == 0. && col >= 3) {
                    return Err(MeshError::NodeIndexOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self { x, y, elements })
    }

    /// Regular mesh of quadrangles over `[xmin, xmax] x [ymin, ymax]`.
    ///
    /// Cells are numbered from left to right, then from bottom to top: cell 0 is the
    /// bottom-left corner, followed by its right neighbors until the end of the bottom
    /// row, and so on one row of cells at a time.
    pub fn grid(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        nx: usize,
        ny: usize,
    ) -> Result<Self, MeshError> {
        let dx = (xmax - xmin) / nx as f64;
        let dy = (ymax - ymin) / ny as f64;
        let (x, y): (Vec<_>, Vec<_>) = (0..=ny)
            .cartesian_product(0..=nx)
            .map(|(j, i)| (xmin + i as f64 * dx, ymin + j as f64 * dy))
            .unzip();
        let mut refs = Vec::with_capacity(nx * ny * 4);
        for j in 0..ny {
            for i in 0..nx {
                // 1-based reference of the cell's bottom-left node
                let bl = j * (nx + 1) + i + 1;
                refs.extend([bl, bl + 1, bl + nx + 2, bl + nx + 1].map(|idx| idx as f64));
            }
        }
        Self::new(x, y, ElementTable::from_row_major(refs, 4)?)
    }

    pub fn node_count(&self) -> usize {
        self.x.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.row_count()
    }

    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    /// Coordinates of the node with (0-based) index `idx`.
    pub(crate) fn coords(&self, idx: usize) -> [f64; 2] {
        [self.x[idx], self.y[idx]]
    }

    /// Vertices of the element at `row`, live nodes only.
    pub fn element_vertices(
        &self,
        row: usize,
    ) -> impl Iterator<Item = [f64; 2]> + ExactSizeIterator + Clone + '_ {
        (0..self.elements.arity(row)).map(move |col| {
            let idx = self.elements.node_ref(row, col) as usize - 1;
            self.coords(idx)
        })
    }
}

#[cfg(test)]
impl Mesh {
    /// Bypasses validation, to exercise the scan's defensive handling of rows that a
    /// validated mesh cannot contain.
    pub(crate) fn new_unchecked(x: Vec<f64>, y: Vec<f64>, elements: ElementTable) -> Self {
        Self { x, y, elements }
    }
}
