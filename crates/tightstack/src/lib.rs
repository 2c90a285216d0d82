//! An exactly-sized, array-backed integer stack.
//!
//! Provides [`ArrayStack`], a dynamically-sized, exclusively-owning,
//! contiguous sequence of `i32` with stack discipline: the top of the
//! stack is index 0 and the most recently pushed element is the next to
//! be popped or peeked. The container also supports direct indexed
//! access and forward iteration, so it is a sequence first and a strict
//! stack abstraction second.
//!
//! # Storage discipline
//!
//! The defining invariant is that the backing allocation always holds
//! exactly `len()` elements — no spare capacity, ever. Every push and
//! pop builds a fresh exactly-sized buffer and adopts it only once fully
//! populated, which makes both operations O(length) and makes a failed
//! allocation leave the stack untouched. Allocation failure is an
//! ordinary data path, reported as [`StackError::AllocationFailed`],
//! never a process abort.
//!
//! ```text
//! ArrayStack
//! └── ExactBuf (Box<[i32]>, capacity == length)
//!     push(v): [a, b, c]      → alloc [v, a, b, c], release old
//!     pop():   [v, a, b, c]   → alloc [a, b, c],    release old, yield v
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use tightstack::ArrayStack;
//!
//! let mut stack = ArrayStack::from([10, 20, 30]);
//! stack.push(69)?;
//! assert_eq!(stack.len(), 4);
//! assert_eq!(stack.peek(), Some(69));
//!
//! assert_eq!(stack.pop()?, 69);
//! assert_eq!(stack.as_slice(), &[10, 20, 30]);
//!
//! let total: i32 = stack.iter().sum();
//! assert_eq!(total, 60);
//! # Ok::<(), tightstack::StackError>(())
//! ```
//!
//! # Thread safety
//!
//! Instances never share storage, so distinct stacks can live on
//! distinct threads freely. A single instance is not synchronised;
//! concurrent mutation requires an external lock.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod buffer;
pub mod error;
pub mod iter;
pub mod stack;

// Public re-exports for the primary API surface.
pub use buffer::ExactBuf;
pub use error::StackError;
pub use iter::{IntoIter, Iter, IterMut};
pub use stack::ArrayStack;
