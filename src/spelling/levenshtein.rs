//! Weighted Levenshtein distance with edit-script traceback.
//!
//! The distance is computed over any sequence of comparable symbols, so the
//! same engine compares words, DNA strings or token lists. Besides the total
//! cost it recovers one concrete minimal script of operations turning the
//! source into the target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};

/// Per-operation costs of the edit-distance model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCosts {
    pub insert: u32,
    pub delete: u32,
    pub replace: u32,
}

impl EditCosts {
    pub const fn new(insert: u32, delete: u32, replace: u32) -> Self {
        EditCosts {
            insert,
            delete,
            replace,
        }
    }

    /// Validate signed costs coming from user input.
    pub fn try_new(insert: i64, delete: i64, replace: i64) -> Result<Self> {
        Ok(EditCosts {
            insert: checked_cost("insert", insert)?,
            delete: checked_cost("delete", delete)?,
            replace: checked_cost("replace", replace)?,
        })
    }

    /// Cost of a single operation under this model.
    pub fn cost_of(&self, operation: &EditOperation) -> u64 {
        match operation {
            EditOperation::NoOp { .. } => 0,
            EditOperation::Insert { .. } => self.insert as u64,
            EditOperation::Delete { .. } => self.delete as u64,
            EditOperation::Replace { .. } => self.replace as u64,
        }
    }
}

impl Default for EditCosts {
    /// Insert 1, delete 1, replace 2: a replacement costs as much as a delete
    /// followed by an insert.
    fn default() -> Self {
        EditCosts::new(1, 1, 2)
    }
}

fn checked_cost(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        AutocorrectError::invalid_config(format!(
            "{name} cost must be between 0 and {}, got {value}",
            u32::MAX
        ))
    })
}

/// One step of an edit script. Positions are zero-based symbol indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOperation {
    /// `source[source]` is kept as `target[target]`.
    #[serde(rename = "no-op")]
    NoOp { source: usize, target: usize },
    /// `target[target]` is inserted.
    Insert { target: usize },
    /// `source[source]` is removed.
    Delete { source: usize },
    /// `source[source]` becomes `target[target]`.
    Replace { source: usize, target: usize },
}

impl EditOperation {
    pub fn label(&self) -> &'static str {
        match self {
            EditOperation::NoOp { .. } => "no-op",
            EditOperation::Insert { .. } => "insert",
            EditOperation::Delete { .. } => "delete",
            EditOperation::Replace { .. } => "replace",
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, EditOperation::NoOp { .. })
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered operations transforming a source sequence into a target sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    operations: Vec<EditOperation>,
}

impl EditScript {
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation> {
        self.operations.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.operations.iter().map(EditOperation::label).collect()
    }

    /// Total cost of the script under `costs`.
    pub fn cost(&self, costs: &EditCosts) -> u64 {
        self.operations.iter().map(|op| costs.cost_of(op)).sum()
    }

    /// Replay the script on `source`, taking inserted and replacing symbols
    /// from `target`.
    ///
    /// Returns `None` if a position falls outside either sequence.
    pub fn apply<T: Clone>(&self, source: &[T], target: &[T]) -> Option<Vec<T>> {
        let mut output = Vec::with_capacity(target.len());
        for operation in &self.operations {
            match *operation {
                EditOperation::NoOp { source: i, .. } => output.push(source.get(i)?.clone()),
                EditOperation::Insert { target: j } | EditOperation::Replace { target: j, .. } => {
                    output.push(target.get(j)?.clone())
                }
                EditOperation::Delete { source: i } => {
                    source.get(i)?;
                }
            }
        }
        Some(output)
    }

    /// Replay the script on string inputs.
    pub fn apply_str(&self, source: &str, target: &str) -> Option<String> {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        self.apply(&source, &target)
            .map(|chars| chars.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOperation;
    type IntoIter = std::slice::Iter<'a, EditOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(", "))
    }
}

/// Minimum edit distance together with one script achieving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDistance {
    pub cost: u64,
    pub script: EditScript,
}

/// Dynamic-programming table stored as one row-major allocation.
struct CostMatrix {
    cols: usize,
    cells: Vec<u64>,
}

impl CostMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        CostMatrix {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u64 {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u64) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Weighted edit distance between two strings, compared by `char`.
pub fn edit_distance(source: &str, target: &str, costs: EditCosts) -> EditDistance {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    edit_distance_seq(&source, &target, costs)
}

/// Weighted edit distance between two arbitrary symbol sequences.
pub fn edit_distance_seq<T: PartialEq>(
    source: &[T],
    target: &[T],
    costs: EditCosts,
) -> EditDistance {
    let matrix = fill_matrix(source, target, &costs);
    let cost = matrix.get(source.len(), target.len());
    let script = traceback(&matrix, source, target, &costs);

    EditDistance { cost, script }
}

fn fill_matrix<T: PartialEq>(source: &[T], target: &[T], costs: &EditCosts) -> CostMatrix {
    let (n, m) = (source.len(), target.len());
    let (insert, delete, replace) = (
        costs.insert as u64,
        costs.delete as u64,
        costs.replace as u64,
    );
    let mut matrix = CostMatrix::new(n + 1, m + 1);

    for i in 1..=n {
        matrix.set(i, 0, matrix.get(i - 1, 0) + delete);
    }
    for j in 1..=m {
        matrix.set(0, j, matrix.get(0, j - 1) + insert);
    }

    for i in 1..=n {
        for j in 1..=m {
            let substitution = if source[i - 1] == target[j - 1] {
                0
            } else {
                replace
            };

            let value = (matrix.get(i - 1, j) + delete)
                .min(matrix.get(i, j - 1) + insert)
                .min(matrix.get(i - 1, j - 1) + substitution);
            matrix.set(i, j, value);
        }
    }

    matrix
}

/// Walk back from the bottom-right cell to recover a minimal script.
///
/// Matching symbols always step diagonally as a no-op. On a mismatch the
/// moves are tried in a fixed order (delete, insert, then replace) so that
/// ties between equally cheap paths resolve the same way every time.
fn traceback<T: PartialEq>(
    matrix: &CostMatrix,
    source: &[T],
    target: &[T],
    costs: &EditCosts,
) -> EditScript {
    let (insert, delete) = (costs.insert as u64, costs.delete as u64);
    let (mut i, mut j) = (source.len(), target.len());
    let mut operations = Vec::with_capacity(i.max(j));

    while i > 0 && j > 0 {
        let current = matrix.get(i, j);

        if source[i - 1] == target[j - 1] {
            operations.push(EditOperation::NoOp {
                source: i - 1,
                target: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if matrix.get(i - 1, j) + delete == current {
            operations.push(EditOperation::Delete { source: i - 1 });
            i -= 1;
        } else if matrix.get(i, j - 1) + insert == current {
            operations.push(EditOperation::Insert { target: j - 1 });
            j -= 1;
        } else {
            operations.push(EditOperation::Replace {
                source: i - 1,
                target: j - 1,
            });
            i -= 1;
            j -= 1;
        }
    }

    while i > 0 {
        operations.push(EditOperation::Delete { source: i - 1 });
        i -= 1;
    }
    while j > 0 {
        operations.push(EditOperation::Insert { target: j - 1 });
        j -= 1;
    }

    operations.reverse();
    EditScript { operations }
}
