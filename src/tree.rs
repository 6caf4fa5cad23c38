//! An owned, mutable BST with upsert semantics and depth-first traversal.
//!
//! Every node is owned by its parent (the tree owns the root), so the usual
//! aliasing headaches of linked structures never come up: mutation happens
//! through `&mut` handles that the borrow checker scopes for us.
//!
//! # Examples
//!
//! ```
//! use bintree::tree::{Node, Tree};
//!
//! let mut tree = Tree::new(|a: &u32, b: &u32| a < b);
//!
//! let (_, inserted) = tree.upsert(Node::new(7));
//! assert!(inserted);
//!
//! // Upserting an equivalent payload hands back the existing node instead.
//! let (existing, inserted) = tree.upsert(Node::new(7));
//! assert!(!inserted);
//! assert_eq!(existing.payload, 7);
//!
//! // The returned handle is mutable, so payloads can be updated in place.
//! existing.payload += 1;
//! ```

/// A vertex of a [`Tree`].
///
/// All fields are public: callers are free to walk a tree by hand through
/// the child links and to mutate payloads in place. The tree itself never
/// inspects a payload other than through the ordering predicate.
pub struct Node<T> {
    /// The caller's value. Opaque to the tree.
    pub payload: T,
    /// Child holding payloads that compare *greater* than `payload`.
    pub left: Option<Box<Node<T>>>,
    /// Child holding payloads that compare *smaller* than `payload`.
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Constructs a childless `Node` around the given payload.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            left: None,
            right: None,
        }
    }

    /// Recursive step for [`Tree::traverse_in_order`]: left subtree, this
    /// node, right subtree.
    fn visit_in_order<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Node<T>),
    {
        if let Some(left) = self.left.as_deref_mut() {
            left.visit_in_order(visit);
        }
        visit(self);
        if let Some(right) = self.right.as_deref_mut() {
            right.visit_in_order(visit);
        }
    }

    /// Recursive step for [`Tree::traverse_reverse`]: the exact mirror of
    /// [`Node::visit_in_order`], at every level of the tree.
    fn visit_reverse<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Node<T>),
    {
        if let Some(right) = self.right.as_deref_mut() {
            right.visit_reverse(visit);
        }
        visit(self);
        if let Some(left) = self.left.as_deref_mut() {
            left.visit_reverse(visit);
        }
    }
}

/// An unbalanced BST ordered by a caller-supplied "less than" predicate.
///
/// The predicate must be a strict weak ordering: irreflexive and consistent
/// (the same pair of payloads always compares the same way). The tree infers
/// that two payloads are equivalent when the predicate holds in neither
/// direction. An inconsistent predicate yields a tree of unspecified shape,
/// never a crash.
///
/// There are exactly two externally visible states: empty (`root` is `None`)
/// and populated. The first [`Tree::upsert`] is the only transition between
/// them; there is no delete or clear.
pub struct Tree<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    /// The root node, absent while the tree is empty. Public so that callers
    /// can walk or restructure the tree themselves.
    pub root: Option<Box<Node<T>>>,
    less: L,
}

impl<T, L> Tree<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    /// Constructs an empty tree ordered by `less`.
    pub fn new(less: L) -> Self {
        Self { root: None, less }
    }

    /// Inserts `node` unless an equivalent node is already present.
    ///
    /// Returns a mutable handle to the node now occupying `node`'s slot in
    /// the tree together with a flag telling whether an insertion happened.
    /// When an equivalent node is found, `node` is dropped and the handle
    /// refers to the pre-existing node, so counters and the like inside the
    /// payload can be updated in place either way:
    ///
    /// ```
    /// use bintree::tree::{Node, Tree};
    ///
    /// let mut tree = Tree::new(|a: &(char, u32), b: &(char, u32)| a.0 < b.0);
    /// for c in "abracadabra".chars() {
    ///     let (found, _) = tree.upsert(Node::new((c, 0)));
    ///     found.payload.1 += 1;
    /// }
    ///
    /// let (a, inserted) = tree.upsert(Node::new(('a', 0)));
    /// assert!(!inserted);
    /// assert_eq!(a.payload, ('a', 5));
    /// ```
    ///
    /// Branch assignment is the inverse of the textbook convention: when the
    /// current node's payload is less than the new one (i.e. the new payload
    /// is *greater*), descent goes **left**; when the new payload is
    /// *smaller*, descent goes **right**. Hand-written tree walks must follow
    /// the same rule.
    pub fn upsert(&mut self, node: Node<T>) -> (&mut Node<T>, bool) {
        match self.root {
            None => (&mut **self.root.insert(Box::new(node)), true),
            Some(ref mut root) => Self::upsert_from(&self.less, &mut **root, node),
        }
    }

    fn upsert_from<'a>(less: &L, cur: &'a mut Node<T>, node: Node<T>) -> (&'a mut Node<T>, bool) {
        if less(&cur.payload, &node.payload) {
            match cur.left {
                Some(ref mut left) => Self::upsert_from(less, &mut **left, node),
                None => (&mut **cur.left.insert(Box::new(node)), true),
            }
        } else if less(&node.payload, &cur.payload) {
            match cur.right {
                Some(ref mut right) => Self::upsert_from(less, &mut **right, node),
                None => (&mut **cur.right.insert(Box::new(node)), true),
            }
        } else {
            // Neither orders before the other: equivalent, nothing inserted.
            (cur, false)
        }
    }

    /// Walks the tree depth first, calling `visit` exactly once per node:
    /// left subtree, node, right subtree. A no-op on an empty tree. There is
    /// no way to abort the walk early.
    ///
    /// Because greater payloads are stored on the left (see
    /// [`Tree::upsert`]), this visits payloads in *descending* order under
    /// the tree's predicate:
    ///
    /// ```
    /// use bintree::tree::{Node, Tree};
    ///
    /// let mut tree = Tree::new(|a: &u32, b: &u32| a < b);
    /// for x in [2, 9, 4] {
    ///     tree.upsert(Node::new(x));
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse_in_order(|n| seen.push(n.payload));
    /// assert_eq!(seen, [9, 4, 2]);
    /// ```
    pub fn traverse_in_order<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Node<T>),
    {
        if let Some(root) = self.root.as_deref_mut() {
            root.visit_in_order(&mut visit);
        }
    }

    /// Walks the tree depth first in the mirror order of
    /// [`Tree::traverse_in_order`]: right subtree, node, left subtree, at
    /// every level. This visits payloads in *ascending* order under the
    /// tree's predicate. A no-op on an empty tree.
    pub fn traverse_reverse<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Node<T>),
    {
        if let Some(root) = self.root.as_deref_mut() {
            root.visit_reverse(&mut visit);
        }
    }
}
