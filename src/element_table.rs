use crate::error::MeshError;

/// Rectangular table of node references, one row per element.
///
/// Rows keep the caller's 1-based node numbering. An element with fewer nodes than the
/// table has columns pads the tail of its row with zeros; a row's effective arity is the
/// number of contiguous non-zero references starting at column 0. Entries are stored
/// exactly as supplied so that diagnostics can report the raw offending value.
#[derive(Debug, Clone)]
pub struct ElementTable {
    refs: Vec<f64>,
    cols: usize,
}

impl ElementTable {
    /// Builds a table from row-major flat data with `cols` columns.
    ///
    /// Fails if the data does not fill a whole number of rows.
    pub fn from_row_major(refs: Vec<f64>, cols: usize) -> Result<Self, MeshError> {
        if cols == 0 || refs.len() % cols != 0 {
            return Err(MeshError::TableShape {
                cols,
                len: refs.len(),
            });
        }
        Ok(Self { refs, cols })
    }

    pub fn row_count(&self) -> usize {
        self.refs.len() / self.cols
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Raw table entry, in the caller's 1-based numbering (0 = padding).
    pub(crate) fn node_ref(&self, row: usize, col: usize) -> f64 {
        self.refs[row * self.cols + col]
    }

    /// Number of contiguous non-zero references at the start of `row`.
    pub fn arity(&self, row: usize) -> usize {
        (0..self.cols)
            .take_while(|&col| self.node_ref(row, col) > 0.)
            .count()
    }

    /// An iterator over the table's rows.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            row: 0,
        }
    }
}

/// An iterator over the rows of an [`ElementTable`].
pub struct Rows<'a> {
    table: &'a ElementTable,
    row: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.row;
        if row < self.table.row_count() {
            self.row += 1;
            Some(Element {
                table: self.table,
                row,
            })
        } else {
            None
        }
    }
}

/// View over one row of an [`ElementTable`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    table: &'a ElementTable,
    row: usize,
}

impl Element<'_> {
    /// Index of this row in the table.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn arity(&self) -> usize {
        self.table.arity(self.row)
    }

    /// 0-based node index of the element's `k`-th node.
    pub(crate) fn node(&self, k: usize) -> usize {
        self.table.node_ref(self.row, k) as usize - 1
    }
}
