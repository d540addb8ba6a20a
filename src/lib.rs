//! An ordered key-value map implemented with an AVL tree.
//!
//! Every node owns its children directly, and insert and remove are written
//! as recursive descents that rebalance on the way back up. Each recursive
//! step reports whether the height of the sub tree it was given changed,
//! which lets the ancestors skip rebalancing as soon as a change has been
//! absorbed. Lookup, insert and remove run in O(log n).
//!
//! ```
//! use avl_map::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for key in 1..=7 {
//!     map.insert(key, key * key);
//! }
//! assert_eq!(map.height(), 3);
//! assert_eq!(map.first_key(), Some(&1));
//! assert_eq!(map.get(&5), Some(&25));
//! assert_eq!(map.remove(&5), Some(25));
//! assert!(!map.contains_key(&5));
//! ```

mod balance;
mod check;
mod error;
mod map;
mod node;

pub use error::{Error, InvariantViolation};
pub use map::AvlTreeMap;
