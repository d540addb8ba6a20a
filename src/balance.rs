//! Recursive insert and remove with the height change protocol.
//!
//! Every recursive step hands back the new root of the sub tree it was given
//! together with a flag telling whether that sub tree's height changed.
//! Ancestors only rebalance while the flag is set, so a step that left the
//! height untouched stops all further work on the way up.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use crate::node::{Link, Node};

/// Restores balance after the left sub tree grew or the right sub tree shrank.
/// Returns the new sub tree root and whether its height differs from before.
pub(crate) fn balance_left<K, V>(
    mut node: Box<Node<K, V>>,
    changed: bool,
) -> (Box<Node<K, V>>, bool) {
    if !changed {
        return (node, false);
    }
    // Still the cached height from before the child changed
    let height_before = node.height;
    if node.bias() == 2 {
        let left_bias = node.left.as_ref().map_or(0, |left| left.bias());
        if left_bias >= 0 {
            node = node.rotate_right();
        } else {
            node = node.rotate_left_right();
        }
    } else {
        node.update_height();
    }
    let changed = node.height != height_before;
    (node, changed)
}

/// Restores balance after the right sub tree grew or the left sub tree shrank.
/// Mirror image of [`balance_left`].
pub(crate) fn balance_right<K, V>(
    mut node: Box<Node<K, V>>,
    changed: bool,
) -> (Box<Node<K, V>>, bool) {
    if !changed {
        return (node, false);
    }
    let height_before = node.height;
    if node.bias() == -2 {
        let right_bias = node.right.as_ref().map_or(0, |right| right.bias());
        if right_bias <= 0 {
            node = node.rotate_left();
        } else {
            node = node.rotate_right_left();
        }
    } else {
        node.update_height();
    }
    let changed = node.height != height_before;
    (node, changed)
}

/// Inserts a key-value pair into the given sub tree.
/// Returns the new sub tree root, whether its height changed and the value
/// that was replaced if the key was already present.
pub(crate) fn insert<K: Ord, V>(
    link: Link<K, V>,
    key: K,
    value: V,
) -> (Box<Node<K, V>>, bool, Option<V>) {
    let mut node = match link {
        None => return (Node::leaf(key, value), true, None),
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, grown, replaced) = insert(node.left.take(), key, value);
            node.left = Some(left);
            let (node, grown) = balance_left(node, grown);
            (node, grown, replaced)
        }
        Ordering::Greater => {
            let (right, grown, replaced) = insert(node.right.take(), key, value);
            node.right = Some(right);
            let (node, grown) = balance_right(node, grown);
            (node, grown, replaced)
        }
        Ordering::Equal => {
            // Same shape, so no ancestor needs to rebalance
            let replaced = mem::replace(&mut node.value, value);
            (node, false, Some(replaced))
        }
    }
}

/// Removes the entry with the given key from the sub tree.
/// Returns the new sub tree root, whether its height changed and the removed
/// entry. Removing an absent key leaves the sub tree untouched.
pub(crate) fn remove<K, V, Q>(link: Link<K, V>, key: &Q) -> (Link<K, V>, bool, Option<(K, V)>)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = match link {
        None => return (None, false, None),
        Some(node) => node,
    };
    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, shrunk, removed) = remove(node.left.take(), key);
            node.left = left;
            let (node, shrunk) = balance_right(node, shrunk);
            (Some(node), shrunk, removed)
        }
        Ordering::Greater => {
            let (right, shrunk, removed) = remove(node.right.take(), key);
            node.right = right;
            let (node, shrunk) = balance_left(node, shrunk);
            (Some(node), shrunk, removed)
        }
        Ordering::Equal => match node.left.take() {
            None => {
                trace!("remove by promoting right child");
                let Node { key, value, right, .. } = *node;
                (right, true, Some((key, value)))
            }
            Some(left) => {
                trace!("remove by promoting predecessor");
                let (left, shrunk, (max_key, max_value)) = remove_max(left);
                let key = mem::replace(&mut node.key, max_key);
                let value = mem::replace(&mut node.value, max_value);
                node.left = left;
                let (node, shrunk) = balance_right(node, shrunk);
                (Some(node), shrunk, Some((key, value)))
            }
        },
    }
}

/// Removes the entry with the greatest key from a non-empty sub tree.
/// Returns the new sub tree root, whether its height changed and the removed entry.
pub(crate) fn remove_max<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, bool, (K, V)) {
    match node.right.take() {
        Some(right) => {
            let (right, shrunk, max) = remove_max(right);
            node.right = right;
            let (node, shrunk) = balance_left(node, shrunk);
            (Some(node), shrunk, max)
        }
        None => {
            let Node { key, value, left, .. } = *node;
            (left, true, (key, value))
        }
    }
}
