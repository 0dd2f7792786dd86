use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;

/// Total-order comparison over borrowed keys.
///
/// Must be consistent and transitive; every operation on the tree trusts it.
pub type CmpFn<K> = fn(&K, &K) -> Ordering;

/// Projects the comparison key out of a stored element.
///
/// Must be pure and stable: the same element always yields an
/// equal-under-the-comparator key for as long as it lives in the tree.
pub type KeyFn<T, K> = fn(&T) -> &K;

// Unsized keys (`str`, `[u8]`) instantiate both aliases; the parameters only
// ever appear behind references.

/// The identity extraction used when no key function is supplied: the
/// element borrows as its own key.
fn borrowed_key<T, K>(item: &T) -> &K
where
    T: Borrow<K>,
    K: ?Sized,
{
    item.borrow()
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    // LNR
    fn in_order<F>(&self, action: &mut F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut count = self.left.as_deref().map_or(0, |n| n.in_order(action));
        if action(&self.item) {
            count += 1;
        }
        count + self.right.as_deref().map_or(0, |n| n.in_order(action))
    }

    // RNL
    fn rev_in_order<F>(&self, action: &mut F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut count = self.right.as_deref().map_or(0, |n| n.rev_in_order(action));
        if action(&self.item) {
            count += 1;
        }
        count + self.left.as_deref().map_or(0, |n| n.rev_in_order(action))
    }

    // NLR
    fn pre_order<F>(&self, action: &mut F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut count = 0;
        if action(&self.item) {
            count += 1;
        }
        count += self.left.as_deref().map_or(0, |n| n.pre_order(action));
        count + self.right.as_deref().map_or(0, |n| n.pre_order(action))
    }

    // LRN
    fn post_order<F>(&self, action: &mut F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut count = self.left.as_deref().map_or(0, |n| n.post_order(action));
        count += self.right.as_deref().map_or(0, |n| n.post_order(action));
        if action(&self.item) {
            count += 1;
        }
        count
    }
}

/// The orders understood by [`Tree::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Left subtree, node, right subtree: ascending key order.
    InOrder,
    /// Right subtree, node, left subtree: descending key order.
    ReverseInOrder,
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

/// A Binary Search Tree ordered by a caller-supplied comparator over
/// caller-extracted keys. This can be used for inserting, finding, and
/// deleting elements, and for walking all of them in a fixed order.
///
/// Equal keys are routed into the right subtree on insertion, so duplicates
/// are retained; [`find`](Tree::find) and [`delete`](Tree::delete) bind to
/// the first match encountered on the way down, the one nearest the root.
///
/// The tree never rebalances. Descent is recursive, so stack depth tracks
/// tree height, and a long sorted insertion run deepens the stack as well as
/// the tree.
pub struct Tree<T, K: ?Sized = T> {
    root: Link<T>,
    cmp: CmpFn<K>,
    key: KeyFn<T, K>,
}

/// Hand-rolled: deriving `Clone` would bound `K` as well, but the function
/// pointers are `Copy` regardless of it.
impl<T: Clone, K: ?Sized> Clone for Tree<T, K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            cmp: self.cmp,
            key: self.key,
        }
    }
}

impl<T: fmt::Debug, K: ?Sized> fmt::Debug for Tree<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T, K: ?Sized> Tree<T, K> {
    /// Generates a new, empty `Tree` ordered by `cmp`, with every element
    /// serving as its own key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::new(i32::cmp);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.find(&2), Some(&2));
    /// ```
    pub fn new(cmp: CmpFn<K>) -> Self
    where
        T: Borrow<K>,
    {
        Self {
            root: None,
            cmp,
            key: borrowed_key::<T, K>,
        }
    }

    /// Generates a new, empty `Tree` ordered by `cmp` over the keys that
    /// `key` projects out of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// struct Reading {
    ///     sensor: u16,
    ///     celsius: f32,
    /// }
    ///
    /// fn sensor(r: &Reading) -> &u16 {
    ///     &r.sensor
    /// }
    ///
    /// let mut tree = Tree::with_key_fn(u16::cmp, sensor);
    /// tree.insert(Reading { sensor: 3, celsius: 21.5 });
    ///
    /// assert_eq!(tree.find(&3).map(|r| r.celsius), Some(21.5));
    /// ```
    pub fn with_key_fn(cmp: CmpFn<K>, key: KeyFn<T, K>) -> Self {
        Self {
            root: None,
            cmp,
            key,
        }
    }

    /// Starts a [`TreeBuilder`] for the fallible construction path.
    pub fn builder() -> TreeBuilder<T, K> {
        TreeBuilder::new()
    }

    /// Whether the tree currently holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Places `item` in a newly allocated node at the first open slot on its
    /// comparison path. Elements whose key compares equal to one already
    /// stored descend right, so duplicates accumulate rather than overwrite.
    ///
    /// The tree grows by exactly one leaf; no rebalancing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Traversal, Tree};
    ///
    /// let mut tree: Tree<&str, str> = Tree::new(str::cmp);
    /// tree.insert("fig");
    /// tree.insert("fig");
    ///
    /// assert_eq!(tree.traverse(Traversal::InOrder, |_| true), 2);
    /// ```
    pub fn insert(&mut self, item: T) {
        self.root = Self::insert_at(self.root.take(), item, self.cmp, self.key);
    }

    fn insert_at(link: Link<T>, item: T, cmp: CmpFn<K>, key: KeyFn<T, K>) -> Link<T> {
        match link {
            None => Some(Node::new(item)),
            Some(mut node) => {
                if cmp(key(&item), key(&node.item)) == Ordering::Less {
                    node.left = Self::insert_at(node.left.take(), item, cmp, key);
                } else {
                    node.right = Self::insert_at(node.right.take(), item, cmp, key);
                }
                Some(node)
            }
        }
    }

    /// Potentially finds the element whose key matches `target`. If no node
    /// has a matching key, `None` is returned. Among duplicates, this is the
    /// match nearest the root.
    ///
    /// The borrow is tied to the tree: it goes away at the next mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::new(i32::cmp);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, target: &K) -> Option<&T> {
        Self::find_at(self.root.as_deref(), target, self.cmp, self.key)
    }

    fn find_at<'a>(
        node: Option<&'a Node<T>>,
        target: &K,
        cmp: CmpFn<K>,
        key: KeyFn<T, K>,
    ) -> Option<&'a T> {
        let node = node?;
        match cmp(target, key(&node.item)) {
            Ordering::Equal => Some(&node.item),
            Ordering::Less => Self::find_at(node.left.as_deref(), target, cmp, key),
            Ordering::Greater => Self::find_at(node.right.as_deref(), target, cmp, key),
        }
    }

    /// Deletes the first node (nearest the root) whose key matches `target`
    /// and releases its storage. Returns whether a node was removed; a
    /// missing key is an expected outcome, not an error.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children is replaced by its in-order successor, the leftmost node
    /// of its right subtree, which keeps every remaining key on the side of
    /// the splice it was on before.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::new(i32::cmp);
    /// tree.insert(4);
    /// tree.insert(4);
    ///
    /// // Each call unlinks one matching node.
    /// assert!(tree.delete(&4));
    /// assert!(tree.delete(&4));
    /// assert!(!tree.delete(&4));
    /// ```
    pub fn delete(&mut self, target: &K) -> bool {
        let (root, removed) = Self::delete_at(self.root.take(), target, self.cmp, self.key);
        self.root = root;
        removed
    }

    fn delete_at(link: Link<T>, target: &K, cmp: CmpFn<K>, key: KeyFn<T, K>) -> (Link<T>, bool) {
        let mut node = match link {
            None => return (None, false),
            Some(node) => node,
        };
        match cmp(target, key(&node.item)) {
            Ordering::Less => {
                let (left, removed) = Self::delete_at(node.left.take(), target, cmp, key);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete_at(node.right.take(), target, cmp, key);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => {
                let replacement = match (node.left.take(), node.right.take()) {
                    (None, child) => child,
                    (child, None) => child,
                    (left, Some(right)) => {
                        let (remainder, mut successor) = Self::detach_min(right);
                        successor.left = left;
                        successor.right = remainder;
                        Some(successor)
                    }
                };
                // `node` drops here, releasing the deleted element.
                (replacement, true)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree rooted at `node`, handing
    /// back what remains of the subtree along with the detached minimum.
    fn detach_min(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
        match node.left.take() {
            Some(left) => {
                let (remainder, min) = Self::detach_min(left);
                node.left = remainder;
                (Some(node), min)
            }
            None => {
                let remainder = node.right.take();
                (remainder, node)
            }
        }
    }

    /// Drops every node, children before parents, and leaves the tree empty.
    /// No-op on an already-empty tree.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Applies `action` to every stored element in the given [`Traversal`]
    /// order and returns how many times it answered `true`.
    ///
    /// The boolean is a per-element success signal, not a control-flow
    /// abort: every node is visited regardless of individual answers. An
    /// empty tree yields 0 without calling `action`. Taking `&self` keeps
    /// `action` from mutating the tree it is walking.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Traversal, Tree};
    ///
    /// let mut tree: Tree<i32> = Tree::new(i32::cmp);
    /// for n in [2, 1, 3] {
    ///     tree.insert(n);
    /// }
    ///
    /// let mut descending = Vec::new();
    /// tree.traverse(Traversal::ReverseInOrder, |n| {
    ///     descending.push(*n);
    ///     true
    /// });
    ///
    /// assert_eq!(descending, [3, 2, 1]);
    /// ```
    pub fn traverse<F>(&self, order: Traversal, mut action: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        match self.root.as_deref() {
            None => 0,
            Some(root) => match order {
                Traversal::InOrder => root.in_order(&mut action),
                Traversal::ReverseInOrder => root.rev_in_order(&mut action),
                Traversal::PreOrder => root.pre_order(&mut action),
                Traversal::PostOrder => root.post_order(&mut action),
            },
        }
    }
}

/// Assembles a [`Tree`] from optional parts.
///
/// The comparator is the one mandatory piece; finishing the builder without
/// it fails with [`TreeError::MissingComparator`]. The key function defaults
/// to identity, which is why [`build`](TreeBuilder::build) asks for
/// `T: Borrow<K>`. Trees over an unrelated key type are constructed with
/// [`Tree::with_key_fn`] instead.
///
/// # Examples
///
/// ```
/// use ordered_tree::{Tree, TreeBuilder, TreeError};
///
/// let err = TreeBuilder::<u64>::new().build().unwrap_err();
/// assert_eq!(err, TreeError::MissingComparator);
///
/// let mut tree = Tree::<u64>::builder().comparator(u64::cmp).build()?;
/// tree.insert(9);
/// assert_eq!(tree.find(&9), Some(&9));
/// # Ok::<(), TreeError>(())
/// ```
pub struct TreeBuilder<T, K: ?Sized = T> {
    cmp: Option<CmpFn<K>>,
    key: Option<KeyFn<T, K>>,
}

impl<T, K: ?Sized> Default for TreeBuilder<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: ?Sized> TreeBuilder<T, K> {
    /// Starts a builder with nothing configured.
    pub fn new() -> Self {
        Self {
            cmp: None,
            key: None,
        }
    }

    /// Sets the total order the tree sorts by. Mandatory.
    pub fn comparator(mut self, cmp: CmpFn<K>) -> Self {
        self.cmp = Some(cmp);
        self
    }

    /// Sets the key-extraction function. Optional; identity when omitted.
    pub fn key_fn(mut self, key: KeyFn<T, K>) -> Self {
        self.key = Some(key);
        self
    }

    /// Finishes the builder, producing an empty tree.
    pub fn build(self) -> Result<Tree<T, K>, TreeError>
    where
        T: Borrow<K>,
    {
        let cmp = self.cmp.ok_or(TreeError::MissingComparator)?;
        Ok(Tree {
            root: None,
            cmp,
            key: self.key.unwrap_or(borrowed_key::<T, K>),
        })
    }
}
