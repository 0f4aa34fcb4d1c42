use thiserror::Error;

/// Structural problems detected by validation, before any search runs.
///
/// Every check runs eagerly and in full: the first violation found aborts the call with
/// no partial result. A query point that lies outside every element is *not* an error,
/// it is the unresolved sentinel in the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Paired coordinate arrays differ in length.
    #[error("coordinate arrays must be equal in size ({x} vs {y})")]
    InputSizeMismatch { x: usize, y: usize },
    /// The element table cannot describe a polygon.
    #[error("element table must have at least 3 columns, got {0}")]
    InsufficientColumns(usize),
    /// A non-padding table entry does not name a node.
    #[error("node reference {value} out of range at row {row}, column {col}")]
    NodeIndexOutOfRange { row: usize, col: usize, value: f64 },
    /// Flat element data does not fill a whole number of rows.
    #[error("{len} values do not form rows of {cols} columns")]
    TableShape { cols: usize, len: usize },
}
