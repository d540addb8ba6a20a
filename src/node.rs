use std::cmp;

use tracing::trace;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    pub(crate) height: usize,
}

/// Returns the height of a sub tree, which is 0 for an empty one.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => node.height,
    }
}

impl<K, V> Node<K, V> {
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Left sub tree height minus right sub tree height.
    pub(crate) fn bias(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recomputes the cached height from the children.
    /// Must be called whenever a child link changes.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    //   v            u
    //  / \          / \
    // a   u   ->   v   c
    //    / \      / \
    //   b   c    a   b
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        match self.right.take() {
            None => self,
            Some(mut right) => {
                trace!("rotate left");
                self.right = right.left.take();
                self.update_height();
                right.left = Some(self);
                right.update_height();
                right
            }
        }
    }

    //     u        v
    //    / \      / \
    //   v   c -> a   u
    //  / \          / \
    // a   b        b   c
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        match self.left.take() {
            None => self,
            Some(mut left) => {
                trace!("rotate right");
                self.left = left.right.take();
                self.update_height();
                left.right = Some(self);
                left.update_height();
                left
            }
        }
    }

    /// Double rotation for a right heavy node whose right child is left heavy.
    pub(crate) fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Node::rotate_right);
        self.rotate_left()
    }

    /// Double rotation for a left heavy node whose left child is right heavy.
    pub(crate) fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Node::rotate_left);
        self.rotate_right()
    }
}
