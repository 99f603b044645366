use thiserror::Error;

/// A broken rewrite contract.
///
/// None of these are recoverable: the tree is half-rewritten when one is
/// detected, so the rewriter logs it and panics with its `Display` text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteViolation {
    /// The callback returned a node of the wrong kind for the slot it replaces.
    #[error("rewrite: slot `{slot}` expects {expected}, callback returned {found}")]
    SlotMismatch {
        slot: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An expanded block came back for a slot that is not a statement list.
    #[error("rewrite: expanded block returned for `{slot}`, which is not a statement list")]
    MisplacedExpansion { slot: &'static str },

    /// A list handle that reaches past the end of its buffer.
    #[error("rewrite: list in `{slot}` (start {start}, length {len}) reaches past the end of its buffer")]
    DanglingList {
        slot: &'static str,
        start: u32,
        len: u32,
    },

    /// A node handle that does not resolve in the arena being rewritten.
    #[error("rewrite: unexpected {kind} node #{index}: not allocated in this arena")]
    DanglingNode { kind: &'static str, index: u32 },
}

impl RewriteViolation {
    /// Slot label the violation was detected at, if any.
    pub fn slot(&self) -> Option<&'static str> {
        match self {
            RewriteViolation::SlotMismatch { slot, .. }
            | RewriteViolation::MisplacedExpansion { slot }
            | RewriteViolation::DanglingList { slot, .. } => Some(slot),
            RewriteViolation::DanglingNode { .. } => None,
        }
    }
}

/// Logs `violation` and aborts the traversal.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fatal(violation: RewriteViolation) -> ! {
    tracing::error!(slot = violation.slot(), "{violation}");
    panic!("{violation}");
}
