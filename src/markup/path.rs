use thiserror::Error;

use crate::raw::MarkupKind;

/// One step of a path from a node down to one of its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildStep {
    /// Index of the child to descend into.
    pub index:         usize,
    /// If set, the child at `index` must be of this kind.
    pub expected_kind: Option<MarkupKind>,
}

impl ChildStep {
    /// A step to the child at `index`, whatever its kind.
    pub fn new(index: usize) -> Self {
        Self { index, expected_kind: None }
    }

    /// A step to the child at `index` that fails unless the child is of `kind`.
    pub fn expecting(index: usize, kind: MarkupKind) -> Self {
        Self { index, expected_kind: Some(kind) }
    }
}

impl From<usize> for ChildStep {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<(usize, MarkupKind)> for ChildStep {
    fn from((index, kind): (usize, MarkupKind)) -> Self {
        Self::expecting(index, kind)
    }
}

/// A path lookup that did not lead to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// A step's index is not below the child count of the node it starts from.
    #[error("child index {index} is out of bounds for {parent} with {child_count} children")]
    IndexOutOfBounds {
        parent:      MarkupKind,
        index:       usize,
        child_count: usize,
    },
    /// The child at a step is not of the kind the step expects.
    #[error("expected {expected} at child index {index}, found {found}")]
    UnexpectedKind {
        index:    usize,
        expected: MarkupKind,
        found:    MarkupKind,
    },
}
