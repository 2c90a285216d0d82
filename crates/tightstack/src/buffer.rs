//! Exactly-sized owning buffers.
//!
//! [`ExactBuf`] is the storage primitive the stack is built on: a heap
//! allocation that always holds exactly as many elements as it reports.
//! There is no spare capacity anywhere in this crate — every resizing
//! operation allocates a fresh buffer of the new length and releases the
//! old one. The buffer is the sole owner of its storage and releases it
//! exactly once when dropped.
//!
//! All allocating constructors are fallible: allocation failure is
//! reported as [`StackError::AllocationFailed`] and never escapes as a
//! panic or abort from this module.

use crate::error::StackError;

/// An exclusively-owned, exactly-sized contiguous buffer of `i32`.
///
/// Backed by a boxed slice, so the allocated capacity is structurally
/// equal to the element count. Zero-length buffers perform no heap
/// allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExactBuf {
    data: Box<[i32]>,
}

/// Reserve storage for exactly `len` elements, reporting failure as a value.
///
/// This is the single point in the crate where allocation failure is
/// caught and converted into the error taxonomy.
fn alloc_exact(len: usize) -> Result<Vec<i32>, StackError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| StackError::AllocationFailed {
            requested: len * std::mem::size_of::<i32>(),
        })?;
    Ok(storage)
}

impl ExactBuf {
    /// Create an empty buffer without allocating.
    pub fn empty() -> Self {
        Self {
            data: Vec::new().into_boxed_slice(),
        }
    }

    /// Allocate a buffer of exactly `len` zero-initialised elements.
    ///
    /// `zeroed(0)` is legal and performs no allocation.
    pub fn zeroed(len: usize) -> Result<Self, StackError> {
        let mut storage = alloc_exact(len)?;
        storage.resize(len, 0);
        Ok(Self {
            data: storage.into_boxed_slice(),
        })
    }

    /// Allocate a buffer holding an exact copy of `src`.
    pub fn from_slice(src: &[i32]) -> Result<Self, StackError> {
        let mut storage = alloc_exact(src.len())?;
        storage.extend_from_slice(src);
        Ok(Self {
            data: storage.into_boxed_slice(),
        })
    }

    /// Allocate a buffer of `rest.len() + 1` elements with `top` at
    /// index 0 and `rest` shifted one position toward the bottom.
    ///
    /// This is the storage step of a push: the new buffer is built in
    /// full before the caller releases the old one.
    pub fn with_top(top: i32, rest: &[i32]) -> Result<Self, StackError> {
        let mut storage = alloc_exact(rest.len() + 1)?;
        storage.push(top);
        storage.extend_from_slice(rest);
        Ok(Self {
            data: storage.into_boxed_slice(),
        })
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The elements as a shared slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Size of the backing allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<i32>()
    }

    /// Consume the buffer, yielding its storage as a `Vec`.
    ///
    /// No copy is performed; the vector adopts the allocation.
    pub fn into_vec(self) -> Vec<i32> {
        self.data.into_vec()
    }
}

impl Default for ExactBuf {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<i32>> for ExactBuf {
    /// Adopt a vector's storage, shrunk to an exact fit.
    fn from(values: Vec<i32>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }
}
