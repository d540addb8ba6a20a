//! An ordered map implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::balance;
use crate::error::Error;
use crate::node::{self, Link, Node};

/// An ordered map implemented with an AVL tree.
///
/// ```
/// use avl_map::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(0, "zero");
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.get(&1), Some(&"one"));
/// map.remove(&1);
/// assert!(map.get(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, which is 0 for an empty map.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        debug!(len = self.num_nodes, "clearing map");
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns true if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node| &node.value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node| (&node.key, &node.value))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Returns a reference to the smallest key in the map.
    pub fn first_key(&self) -> Option<&K> {
        self.first_key_value().map(|(key, _)| key)
    }

    /// Returns a reference to the greatest key in the map.
    pub fn last_key(&self) -> Option<&K> {
        self.last_key_value().map(|(key, _)| key)
    }

    /// Returns the key-value pair with the smallest key in the map.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the key-value pair with the greatest key in the map.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Inserts a key-value pair into the map.
    /// If the key was already present its value is replaced and the old value
    /// is returned. The tree shape is left as it was in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, _, replaced) = balance::insert(self.root.take(), key, value);
        self.root = Some(root);
        if replaced.is_none() {
            self.num_nodes += 1;
        }
        #[cfg(feature = "consistency_check")]
        self.check_consistency();
        replaced
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    /// Removing an absent key does nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, _, removed) = balance::remove(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        #[cfg(feature = "consistency_check")]
        self.check_consistency();
        removed
    }

    /// Removes a key from the map.
    /// Unlike [`remove`](Self::remove), an absent key is reported as [`Error::NotFound`].
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).ok_or(Error::NotFound)
    }

    /// Returns all keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.num_nodes);
        self.traverse_in_order(|key, _| keys.push(key));
        keys
    }

    /// Returns all values, ordered by ascending key.
    pub fn values(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.num_nodes);
        self.traverse_in_order(|_, value| values.push(value));
        values
    }

    /// Visits all entries in ascending key order.
    pub fn traverse_in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        let mut stack: Vec<&'a Node<K, V>> = Vec::with_capacity(self.height());
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                None => break,
                Some(node) => {
                    f(&node.key, &node.value);
                    current = node.right.as_deref();
                }
            }
        }
    }

    /// Visits all entries level by level, starting at the root.
    pub fn traverse_level_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        let mut queue: VecDeque<&'a Node<K, V>> = VecDeque::new();
        queue.extend(self.root.as_deref());
        while let Some(node) = queue.pop_front() {
            f(&node.key, &node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }

    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn set_root(&mut self, root: Link<K, V>, num_nodes: usize) {
        self.root = root;
        self.num_nodes = num_nodes;
    }

    fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        current
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.traverse_in_order(|key, value| {
            map.entry(key, value);
        });
        map.finish()
    }
}

impl<K: Ord, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut entries = Vec::with_capacity(self.len());
        self.traverse_in_order(|key, value| entries.push((key, value)));
        let mut entries = entries.into_iter();
        let mut equal = true;
        other.traverse_in_order(|key, value| {
            if equal {
                equal = entries.next() == Some((key, value));
            }
        });
        equal
    }
}

impl<K: Ord, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
