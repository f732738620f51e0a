//! This crate provides two small ordered containers built out of individually owned, linked
//! nodes, mostly for educational purposes.
//!
//! ## Doubly Linked List
//!
//! A [`List`][list::List] keeps its values in a chain of nodes. Every node knows its
//! neighbour on either side, so pushing or popping at either end is `O(1)`, while getting at
//! the value at some index means walking there node by node. The list owns all of its nodes;
//! the `prev`/`next` links between them are just for getting around.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. Here a [`Tree`][tree::Tree] is ordered by a comparison predicate `P(a, b)`
//! meaning "`a` belongs at or to the left of `b`". The invariants are:
//!
//! 1. For every node, every value `x` in its left subtree satisfies `P(x, node)`.
//! 2. For every node, every value `x` in its right subtree does not satisfy `P(x, node)`.
//!
//! > `P` only needs to be a total preorder, so equivalent values are allowed. They end up to
//! > the left of each other.
//!
//! Searching takes `O(height)`. This tree never rebalances, so inserting values in sorted order
//! gives a tree whose height is its size. Visiting the left subtree, then the node, then the
//! right subtree yields the values sorted by `P`; the tree hands that (and the pre- and
//! postorder traversals) back as a [`List`][list::List].
//!
//! Nodes are addressed through [`NodeId`][tree::NodeId] handles returned by
//! [`Tree::insert`][tree::Tree::insert] and [`Tree::search`][tree::Tree::search]. A handle stops
//! working once its node is erased instead of dangling.
//!
//! Neither container does any locking. Mutating one takes `&mut`, so sharing one between
//! threads while it's being changed can't be written in safe code.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod compare;
pub mod error;
pub mod list;
pub mod tree;
