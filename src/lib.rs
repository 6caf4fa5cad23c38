//! This crate exposes a minimal, unbalanced Binary Search Tree (BST) driven
//! by a caller-supplied ordering predicate.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored records. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` will typically store some sort of value (the
//! value that was inserted, for example) and will sometimes have child
//! `Node`s. Searching for a value takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`), and
//! depth-first traversal visits every node in an order fixed by the
//! comparison function.
//!
//! This crate makes three deliberate simplifications:
//!
//! 1. No balancing. Nodes land wherever the insertion order puts them, so an
//!    adversarial insertion order degrades the tree to a linked list.
//! 2. No deletion. Trees only grow; a node, once inserted, lives as long as
//!    the tree does.
//! 3. Insertion is an *upsert*: if an equivalent node is already present, no
//!    new node is created and the caller gets a handle to the existing one.
//!    This makes the tree handy for counting and de-duplication workloads
//!    (see the `wordcount` binary for an example).
//!
//! Ordering is supplied by the caller as a "less than" predicate over two
//! payloads. The tree never compares payloads for equality directly: two
//! payloads are *equivalent* when neither is less than the other.
//!
//! One convention to be aware of: a payload that compares *greater* than a
//! node's payload is stored in that node's **left** subtree and a *smaller*
//! payload in its **right** subtree. See [`tree::Tree::upsert`] for the
//! details and [`tree::Tree::traverse_in_order`] for what this means for
//! traversal order.

#![deny(missing_docs)]

pub mod tree;
