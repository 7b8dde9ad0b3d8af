//! Ordered map backing every phase of the scan pipeline.
//!
//! `AvlMap` is a self-balancing binary search tree keyed by any `Ord` type.
//! It exists instead of a hash map for one load-bearing reason: `keys()` and
//! `iter()` walk the tree in ascending key order, which makes index
//! construction, pair deduplication, and the final report reproducible
//! across runs. `len()` and `height()` feed the balance statistics printed
//! after a scan; they have no effect on correctness.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Self {
        Node {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }
}

/// Height of a possibly-empty subtree: number of nodes on its longest
/// root-to-leaf path, so an empty link has height 0 and a leaf height 1.
fn link_height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor<K, V>(node: &Node<K, V>) -> isize {
    link_height(&node.left) as isize - link_height(&node.right) as isize
}

fn link_balance_factor<K, V>(link: &Link<K, V>) -> isize {
    link.as_ref().map_or(0, |node| balance_factor(node))
}

fn rotate_right<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match root.left.take() {
        Some(mut pivot) => {
            root.left = pivot.right.take();
            root.update_height();
            pivot.right = Some(root);
            pivot.update_height();
            pivot
        }
        // Callers only rotate when the subtree is left-heavy, so the left
        // child exists; returning unchanged keeps the function total.
        None => root,
    }
}

fn rotate_left<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match root.right.take() {
        Some(mut pivot) => {
            root.right = pivot.left.take();
            root.update_height();
            pivot.left = Some(root);
            pivot.update_height();
            pivot
        }
        None => root,
    }
}

/// Restore the AVL invariant at `node` after an insertion below it.
fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let balance = balance_factor(&node);
    if balance > 1 {
        if link_balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        if link_balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_link<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
    let mut node = match link {
        Some(node) => node,
        None => return (Box::new(Node::leaf(key, value)), None),
    };

    let previous = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, previous) = insert_link(node.left.take(), key, value);
            node.left = Some(child);
            previous
        }
        Ordering::Greater => {
            let (child, previous) = insert_link(node.right.take(), key, value);
            node.right = Some(child);
            previous
        }
        Ordering::Equal => Some(mem::replace(&mut node.value, value)),
    };

    (rebalance(node), previous)
}

/// An ordered key-value map over an AVL tree.
///
/// The node representation is private; the public surface is insertion,
/// lookup, sorted iteration, and the `len`/`height` diagnostics.
#[derive(Clone)]
pub struct AvlMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> AvlMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        AvlMap { root: None, len: 0 }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree: 0 when empty, 1 for a single entry. Balanced
    /// insertion keeps this within a small factor of `log2(len)`.
    pub fn height(&self) -> usize {
        link_height(&self.root)
    }

    /// Iterate entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Iterate keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }
}

impl<K: Ord, V> AvlMap<K, V> {
    /// Insert or overwrite, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, previous) = insert_link(self.root.take(), key, value);
        self.root = Some(root);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        AvlMap::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AvlMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a AvlMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// In-order borrowing iterator over an [`AvlMap`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, remaining: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Ascending key iterator over an [`AvlMap`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
