//! Identities of markup nodes.
//!
//! Every raw node carries a [`MarkupId`] drawn from an [`IdAllocator`]. Navigating a tree never changes the
//! identity of the node you land on, while every node recreated by an edit (the edited node and all of its
//! ancestors) receives a new one. Comparing identities is therefore a cheap way to tell whether a subtree was
//! touched between two versions of a document.

use std::{
    fmt,
    sync::atomic::{AtomicU32, AtomicU64, Ordering},
};

/// Identity of a logical markup node.
///
/// Identities are ordered by the allocator that issued them first and by issue order second. Values issued by
/// the same allocator are strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkupId {
    allocator: u32,
    serial:    u64,
}

impl MarkupId {
    /// The namespace of the allocator that issued this identity. The process-wide allocator uses namespace `0`.
    #[inline]
    pub fn allocator(self) -> u32 {
        self.allocator
    }

    /// The position of this identity in its allocator's sequence, starting at `1`.
    #[inline]
    pub fn serial(self) -> u64 {
        self.serial
    }
}

impl fmt::Display for MarkupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.allocator {
            0 => write!(f, "{}", self.serial),
            allocator => write!(f, "{}:{}", allocator, self.serial),
        }
    }
}

// Namespace `0` belongs to `GLOBAL`.
static NEXT_NAMESPACE: AtomicU32 = AtomicU32::new(1);

static GLOBAL: IdAllocator = IdAllocator {
    namespace: 0,
    issued:    AtomicU64::new(0),
};

/// Issues unique [`MarkupId`]s.
///
/// All tree operations draw from [`IdAllocator::global`] unless told otherwise. Isolated allocators can be
/// created for a parse session or a test with [`IdAllocator::new`]; each one gets its own namespace, so their
/// identities never collide with those of any other allocator in the process.
#[derive(Debug)]
pub struct IdAllocator {
    namespace: u32,
    issued:    AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator with a fresh namespace.
    pub fn new() -> Self {
        Self {
            namespace: NEXT_NAMESPACE.fetch_add(1, Ordering::Relaxed),
            issued:    AtomicU64::new(0),
        }
    }

    /// The process-wide allocator.
    #[inline]
    pub fn global() -> &'static IdAllocator {
        &GLOBAL
    }

    /// Returns an identity strictly greater than every identity previously returned by this allocator.
    ///
    /// Safe to call from any number of threads at once.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> MarkupId {
        // a single atomic RMW: no update is lost and no value is handed out twice
        let serial = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        MarkupId {
            allocator: self.namespace,
            serial,
        }
    }

    /// The number of identities issued so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// The namespace stamped into every identity issued by this allocator.
    #[inline]
    pub fn namespace(&self) -> u32 {
        self.namespace
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
