//! Invariant checks for diagnostics and tests.

use std::cmp;

use crate::error::InvariantViolation;
use crate::map::AvlTreeMap;
use crate::node::Node;

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Returns true if no node's sub trees differ in height by more than one.
    pub fn is_balanced(&self) -> bool {
        fn balanced<K, V>(node: Option<&Node<K, V>>) -> bool {
            match node {
                None => true,
                Some(node) => {
                    node.bias().abs() <= 1
                        && balanced(node.left.as_deref())
                        && balanced(node.right.as_deref())
                }
            }
        }
        balanced(self.root())
    }

    /// Returns true if every key is greater than all keys in its left sub tree
    /// and less than all keys in its right sub tree.
    pub fn is_valid_bst(&self) -> bool {
        fn ordered<'a, K: Ord, V>(
            node: Option<&'a Node<K, V>>,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
        ) -> bool {
            match node {
                None => true,
                Some(node) => {
                    in_bounds(&node.key, lower, upper)
                        && ordered(node.left.as_deref(), lower, Some(&node.key))
                        && ordered(node.right.as_deref(), Some(&node.key), upper)
                }
            }
        }
        ordered(self.root(), None, None)
    }

    /// Checks all tree invariants in a single pass: ordering of keys, cached
    /// heights, AVL balance and the recorded number of entries.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let (_, counted) = validate_node(self.root(), None, None, 0)?;
        if counted != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                counted,
                recorded: self.len(),
            });
        }
        Ok(())
    }

    /// Panics if any tree invariant is broken.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        if let Err(violation) = self.validate() {
            panic!("inconsistent AVL tree: {violation}");
        }
    }
}

fn in_bounds<K: Ord>(key: &K, lower: Option<&K>, upper: Option<&K>) -> bool {
    lower.map_or(true, |lower| lower < key) && upper.map_or(true, |upper| key < upper)
}

// Returns height and number of nodes of the sub tree.
fn validate_node<'a, K: Ord, V>(
    node: Option<&'a Node<K, V>>,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
    depth: usize,
) -> Result<(usize, usize), InvariantViolation> {
    let node = match node {
        None => return Ok((0, 0)),
        Some(node) => node,
    };
    if !in_bounds(&node.key, lower, upper) {
        return Err(InvariantViolation::OutOfOrder { depth });
    }

    let (left_height, left_count) =
        validate_node(node.left.as_deref(), lower, Some(&node.key), depth + 1)?;
    let (right_height, right_count) =
        validate_node(node.right.as_deref(), Some(&node.key), upper, depth + 1)?;

    let computed = 1 + cmp::max(left_height, right_height);
    if node.height != computed {
        return Err(InvariantViolation::HeightMismatch {
            depth,
            cached: node.height,
            computed,
        });
    }

    let bias = left_height as isize - right_height as isize;
    if bias.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { depth, bias });
    }

    Ok((computed, left_count + right_count + 1))
}
