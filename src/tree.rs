//! An unbalanced Binary Search Tree with parent links and stable node handles.
//!
//! The tree owns every node. Each node owns its two children and keeps a plain [`NodeId`] back to
//! its parent that is only ever used for navigation. Placement is decided by a
//! [`Predicate`]: a value goes left of a node when `P(value, node)` holds and right otherwise,
//! so equivalent values pile up in left subtrees.
//!
//! # Examples
//!
//! ```
//! use linked_bst::error::Error;
//! use linked_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! let ten = tree.insert(10);
//! let five = tree.insert(5);
//! tree.insert(15);
//!
//! assert_eq!(tree.search(&10), Some(ten));
//! assert_eq!(tree.tree_min(), Ok(five));
//! assert_eq!(tree.inorder().unwrap().into_iter().collect::<Vec<_>>(), [5, 10, 15]);
//!
//! // Erasing through a handle hands back the value.
//! assert_eq!(tree.erase(Some(five)), Ok(5));
//! assert_eq!(tree.search(&5), None);
//!
//! // The handle is dead now.
//! assert!(tree.node(five).is_none());
//! assert_eq!(tree.erase(Some(five)), Err(Error::InvalidArgument("node is not in this tree")));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::Arena;
pub use crate::arena::NodeId;
use crate::compare::{LessEqual, Predicate};
use crate::error::{Error, Result};
use crate::list::List;

struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

/// A Binary Search Tree ordered by the predicate `P`. It does no rebalancing, so its height
/// depends entirely on insertion order.
pub struct Tree<T, P = LessEqual> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    len: usize,
    predicate: P,
}

impl<T> Tree<T> {
    /// Creates an empty tree ordered by `<=`.
    pub fn new() -> Self {
        Self::with_predicate(LessEqual)
    }
}

impl<T, P: Default> Default for Tree<T, P> {
    fn default() -> Self {
        Self::with_predicate(P::default())
    }
}

impl<T, P> Drop for Tree<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, P> Tree<T, P> {
    /// Creates an empty tree ordered by `predicate`.
    pub fn with_predicate(predicate: P) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            predicate,
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The predicate ordering this tree.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Handle to the root node, if there is one.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// A view of the node behind `id`, or `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.nodes.get(id).map(|_| NodeRef {
            nodes: &self.nodes,
            id,
        })
    }

    /// Whether `id` refers to a live node of this tree.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some()
    }

    /// The value stored at `id`, or `None` if the handle is stale.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// The value stored at `id`, mutably.
    ///
    /// The tree doesn't move the node afterwards, so the new value has to keep its place: it must
    /// still belong right of everything in the node's left subtree and left of everything in its
    /// right subtree. Otherwise [`Tree::search`] may stop finding it.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Handle to the leftmost node.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree is empty.
    pub fn tree_min(&self) -> Result<NodeId> {
        self.root
            .map(|root| self.nodes.leftmost(root))
            .ok_or(Error::EmptyStructure("tree_min"))
    }

    /// Handle to the rightmost node.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree is empty.
    pub fn tree_max(&self) -> Result<NodeId> {
        self.root
            .map(|root| self.nodes.rightmost(root))
            .ok_or(Error::EmptyStructure("tree_max"))
    }

    /// Values in preorder: each node, then its left subtree, then its right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree is empty.
    pub fn preorder(&self) -> Result<List<T>>
    where
        T: Clone,
    {
        self.traversal(Order::Pre, "preorder")
    }

    /// Values in inorder: each node's left subtree, then the node, then its right subtree. This
    /// is sorted by the tree's predicate.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree is empty.
    pub fn inorder(&self) -> Result<List<T>>
    where
        T: Clone,
    {
        self.traversal(Order::In, "inorder")
    }

    /// Values in postorder: each node's left subtree, then its right subtree, then the node.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree is empty.
    pub fn postorder(&self) -> Result<List<T>>
    where
        T: Clone,
    {
        self.traversal(Order::Post, "postorder")
    }

    /// Iterates over the values in inorder without copying them.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.root.map(|root| self.nodes.leftmost(root)),
            remaining: self.len,
        }
    }

    /// Releases every node, each one after all of its descendants. All handles go stale.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            log::trace!("clearing {} nodes", self.len);
        }

        let mut order = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.take().into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            let node = self.nodes.node(id);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        // Every node was pushed before its descendants, so the reverse releases children first.
        for id in order.into_iter().rev() {
            drop(self.nodes.release(id));
        }
        self.len = 0;
    }

    fn traversal(&self, order: Order, name: &'static str) -> Result<List<T>>
    where
        T: Clone,
    {
        match self.root {
            Some(root) => Ok(self.nodes.traverse(root, order)),
            None => Err(Error::EmptyStructure(name)),
        }
    }

    /// Puts `replacement` where `old` hangs from its parent (or at the root). Only that one slot
    /// and `replacement`'s parent link change; neither node's children are touched.
    fn transplant(&mut self, old: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes.node(old).parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = self.nodes.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }
        if let Some(replacement) = replacement {
            self.nodes.node_mut(replacement).parent = parent;
        }
        log::trace!("transplanted {replacement:?} into the slot of {old:?} under {parent:?}");
    }
}

impl<T, P> Tree<T, P>
where
    P: Predicate<T>,
{
    /// Adds `value` as a new leaf and returns its handle. Values equivalent to ones already in
    /// the tree are kept too; they land in the left subtree of their equals.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let first = tree.insert(1);
    /// let second = tree.insert(1);
    ///
    /// assert_ne!(first, second);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.node(second).and_then(|n| n.parent()).map(|n| n.id()), Some(first));
    /// ```
    pub fn insert(&mut self, value: T) -> NodeId {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.node(id);
            parent = Some(id);
            if self.predicate.goes_left(&value, &node.value) {
                side = Side::Left;
                cursor = node.left;
            } else {
                side = Side::Right;
                cursor = node.right;
            }
        }

        let id = self.nodes.alloc(Node {
            value,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                let parent = self.nodes.node_mut(parent);
                match side {
                    Side::Left => parent.left = Some(id),
                    Side::Right => parent.right = Some(id),
                }
            }
        }
        self.len += 1;
        log::trace!("inserted {id:?} under {parent:?}");

        self.debug_check_node(parent);
        id
    }

    /// Finds a node holding a value equal to `value`. The walk branches the same way
    /// [`Tree::insert`] does, so anything inserted can be found again.
    pub fn search(&self, value: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.node(id);
            if node.value == *value {
                return Some(id);
            }
            cursor = if self.predicate.goes_left(value, &node.value) {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// Removes the node behind `node` and returns its value. Every handle to that node is stale
    /// afterwards; handles to other nodes stay valid.
    ///
    /// A node with at most one child is replaced by that child. A node with two children is
    /// replaced by its successor, the leftmost node of its right subtree. The one exception is
    /// when the right subtree holds several values equivalent to that successor: promoting one
    /// would leave an equivalent to its right, so the rightmost node of the left subtree is
    /// promoted instead.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `node` is `None`.
    /// - [`Error::EmptyStructure`] if the tree is empty.
    /// - [`Error::InvalidArgument`] if `node` doesn't refer to a live node.
    ///
    /// The tree is left untouched on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15, 12].into_iter().collect();
    ///
    /// let root = tree.root();
    /// assert_eq!(tree.erase(root), Ok(10));
    ///
    /// // 12 is the smallest value right of 10, so it takes the root's place.
    /// assert_eq!(tree.root().and_then(|id| tree.value(id)), Some(&12));
    /// ```
    pub fn erase(&mut self, node: Option<NodeId>) -> Result<T> {
        let Some(id) = node else {
            log::debug!("erase called without a node");
            return Err(Error::InvalidArgument("erase needs a node"));
        };
        if self.is_empty() {
            log::debug!("erase of {id:?} called on an empty tree");
            return Err(Error::EmptyStructure("erase"));
        }
        let Some(target) = self.nodes.get(id) else {
            log::debug!("erase called with stale handle {id:?}");
            return Err(Error::InvalidArgument("node is not in this tree"));
        };

        let (parent, left, right) = (target.parent, target.left, target.right);
        match (left, right) {
            (None, _) => {
                log::trace!("erasing {id:?}, replacing it with its right child {right:?}");
                self.transplant(id, right);
            }
            (Some(_), None) => {
                log::trace!("erasing {id:?}, replacing it with its left child {left:?}");
                self.transplant(id, left);
            }
            (Some(left), Some(right)) => {
                let successor = self.nodes.leftmost(right);
                let replacement = if self.has_equivalent_above(successor, right) {
                    let predecessor = self.nodes.rightmost(left);
                    log::trace!(
                        "erasing {id:?}, successor {successor:?} has equivalents above it, \
                         replacing it with its predecessor {predecessor:?}"
                    );
                    self.promote_predecessor(id, predecessor, left, right);
                    predecessor
                } else {
                    log::trace!("erasing {id:?}, replacing it with its successor {successor:?}");
                    self.promote_successor(id, successor, left, right);
                    successor
                };

                self.debug_check_node(Some(replacement));
            }
        }

        let removed = self.nodes.release(id).expect("erased node was live");
        self.len -= 1;

        self.debug_check_node(parent);
        Ok(removed.value)
    }

    /// Moves `successor`, the leftmost node of `right`, into the place of `id` and hangs `id`'s
    /// subtrees under it.
    fn promote_successor(&mut self, id: NodeId, successor: NodeId, left: NodeId, right: NodeId) {
        if successor != right {
            // Being leftmost, the successor has no left child to carry along.
            let successor_right = self.nodes.node(successor).right;
            self.transplant(successor, successor_right);
            self.nodes.node_mut(successor).right = Some(right);
            self.nodes.node_mut(right).parent = Some(successor);
        }
        self.transplant(id, Some(successor));
        self.nodes.node_mut(successor).left = Some(left);
        self.nodes.node_mut(left).parent = Some(successor);
    }

    /// Mirror image of [`Tree::promote_successor`] using `predecessor`, the rightmost node of
    /// `left`.
    fn promote_predecessor(
        &mut self,
        id: NodeId,
        predecessor: NodeId,
        left: NodeId,
        right: NodeId,
    ) {
        if predecessor != left {
            let predecessor_left = self.nodes.node(predecessor).left;
            self.transplant(predecessor, predecessor_left);
            self.nodes.node_mut(predecessor).left = Some(left);
            self.nodes.node_mut(left).parent = Some(predecessor);
        }
        self.transplant(id, Some(predecessor));
        self.nodes.node_mut(predecessor).right = Some(right);
        self.nodes.node_mut(right).parent = Some(predecessor);
    }

    /// Whether the subtree at `top` holds another node equivalent to its leftmost node
    /// `successor`. Promoting the successor would then leave an equivalent value in its right
    /// subtree, which only ever holds values strictly after it.
    ///
    /// Values along the left spine never increase going down, and nothing hanging to the right
    /// of the spine is equivalent to its minimum, so the successor's own parent is the only
    /// candidate worth checking.
    fn has_equivalent_above(&self, successor: NodeId, top: NodeId) -> bool {
        if successor == top {
            return false;
        }
        let node = self.nodes.node(successor);
        let parent = node.parent.expect("a node below `top` has a parent");
        self.predicate
            .goes_left(&self.nodes.node(parent).value, &node.value)
    }

    /// In debug builds, checks the links and ordering between `id` and its direct neighbours.
    fn debug_check_node(&self, id: Option<NodeId>) {
        if !cfg!(debug_assertions) {
            return;
        }
        let Some(id) = id else {
            return;
        };
        let node = self.nodes.node(id);
        match node.parent {
            Some(parent) => {
                let parent = self.nodes.node(parent);
                assert!(parent.left == Some(id) || parent.right == Some(id));
            }
            None => assert_eq!(self.root, Some(id)),
        }
        if let Some(left) = node.left {
            let left = self.nodes.node(left);
            assert_eq!(left.parent, Some(id));
            assert!(self.predicate.goes_left(&left.value, &node.value));
        }
        if let Some(right) = node.right {
            let right = self.nodes.node(right);
            assert_eq!(right.parent, Some(id));
            assert!(!self.predicate.goes_left(&right.value, &node.value));
        }
    }

    /// Walks the whole tree checking every link, the node count, and that every value sits
    /// between the bounds set by its ancestors.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let mut count = 0;
        if let Some(root) = self.root {
            assert_eq!(self.nodes.node(root).parent, None);
        }

        // (node, nearest ancestor it's right of, nearest ancestor it's left of)
        let mut stack: Vec<(NodeId, Option<NodeId>, Option<NodeId>)> =
            self.root.map(|root| (root, None, None)).into_iter().collect();
        while let Some((id, lower, upper)) = stack.pop() {
            count += 1;
            let node = self.nodes.node(id);
            if let Some(lower) = lower {
                assert!(!self
                    .predicate
                    .goes_left(&node.value, &self.nodes.node(lower).value));
            }
            if let Some(upper) = upper {
                assert!(self
                    .predicate
                    .goes_left(&node.value, &self.nodes.node(upper).value));
            }
            if let Some(left) = node.left {
                assert_eq!(self.nodes.node(left).parent, Some(id));
                stack.push((left, lower, Some(id)));
            }
            if let Some(right) = node.right {
                assert_eq!(self.nodes.node(right).parent, Some(id));
                stack.push((right, Some(id), upper));
            }
        }
        assert_eq!(count, self.len);
    }
}

impl<T: Clone, P> Tree<T, P> {
    /// Rebuilds `source`'s nodes into this (empty) tree in preorder, so every parent exists
    /// before its children are attached.
    fn copy_nodes(&mut self, source: &Self) {
        debug_assert!(self.root.is_none());

        let mut stack: Vec<(NodeId, Option<NodeId>, Side)> = source
            .root
            .map(|root| (root, None, Side::Left))
            .into_iter()
            .collect();
        while let Some((id, parent, side)) = stack.pop() {
            let node = source.nodes.node(id);
            let copy = self.nodes.alloc(Node {
                value: node.value.clone(),
                parent,
                left: None,
                right: None,
            });
            match parent {
                None => self.root = Some(copy),
                Some(parent) => {
                    let parent = self.nodes.node_mut(parent);
                    match side {
                        Side::Left => parent.left = Some(copy),
                        Side::Right => parent.right = Some(copy),
                    }
                }
            }
            if let Some(right) = node.right {
                stack.push((right, Some(copy), Side::Right));
            }
            if let Some(left) = node.left {
                stack.push((left, Some(copy), Side::Left));
            }
        }
        self.len = source.len;
    }
}

/// Copies every node. Handles into the original don't carry over to the copy.
impl<T: Clone, P: Clone> Clone for Tree<T, P> {
    fn clone(&self) -> Self {
        let mut tree = Self {
            nodes: Arena::with_capacity(self.len),
            root: None,
            len: 0,
            predicate: self.predicate.clone(),
        };
        tree.copy_nodes(self);
        tree
    }

    /// Releases this tree's nodes first, then copies `source`'s in.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.predicate.clone_from(&source.predicate);
        self.copy_nodes(source);
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Tree<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.and_then(|root| self.value(root)))
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, P> FromIterator<T> for Tree<T, P>
where
    P: Predicate<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T, P> Extend<T> for Tree<T, P>
where
    P: Predicate<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, P> IntoIterator for &'a Tree<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Arena<Node<T>> {
    fn node(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("linked node is live")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).expect("linked node is live")
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// The next node in inorder, found through the right subtree or else the first ancestor we
    /// are left of.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            let node = self.node(p);
            if node.left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = node.parent;
        }
        None
    }

    /// Builds the traversal of the subtree at `start`. Each node's list is made by concatenating
    /// its children's lists around its own value. An explicit stack stands in for recursion so
    /// a degenerate tree can't overflow the call stack.
    fn traverse(&self, start: NodeId, order: Order) -> List<T>
    where
        T: Clone,
    {
        enum Step {
            Visit(NodeId),
            Assemble(NodeId),
        }

        let mut steps = vec![Step::Visit(start)];
        let mut finished: Vec<List<T>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(id) => {
                    let node = self.node(id);
                    steps.push(Step::Assemble(id));
                    // The left subtree is pushed last so it's finished first and its list ends up
                    // below the right subtree's on `finished`.
                    steps.extend(node.right.map(Step::Visit));
                    steps.extend(node.left.map(Step::Visit));
                }
                Step::Assemble(id) => {
                    let node = self.node(id);
                    let right = match node.right {
                        Some(_) => finished.pop().expect("right subtree was assembled"),
                        None => List::new(),
                    };
                    let left = match node.left {
                        Some(_) => finished.pop().expect("left subtree was assembled"),
                        None => List::new(),
                    };
                    let mut own = List::new();
                    own.push_back(node.value.clone());

                    finished.push(match order {
                        Order::Pre => own.concatenate(&left).concatenate(&right),
                        Order::In => left.concatenate(&own).concatenate(&right),
                        Order::Post => left.concatenate(&right).concatenate(&own),
                    });
                }
            }
        }
        finished.pop().unwrap_or_default()
    }
}

/// A borrowed view of one node of a [`Tree`], for walking around the tree from it.
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<Node<T>>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    fn at(&self, id: NodeId) -> Self {
        Self {
            nodes: self.nodes,
            id,
        }
    }

    fn node(&self) -> &'a Node<T> {
        self.nodes.node(self.id)
    }

    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// This node's parent, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| self.at(id))
    }

    /// This node's left child.
    pub fn left(&self) -> Option<Self> {
        self.node().left.map(|id| self.at(id))
    }

    /// This node's right child.
    pub fn right(&self) -> Option<Self> {
        self.node().right.map(|id| self.at(id))
    }

    /// The leftmost node of the subtree rooted here, which may be this node.
    pub fn tree_min(&self) -> Self {
        self.at(self.nodes.leftmost(self.id))
    }

    /// The rightmost node of the subtree rooted here, which may be this node.
    pub fn tree_max(&self) -> Self {
        self.at(self.nodes.rightmost(self.id))
    }

    /// Preorder values of the subtree rooted here.
    pub fn preorder(&self) -> List<T>
    where
        T: Clone,
    {
        self.nodes.traverse(self.id, Order::Pre)
    }

    /// Inorder values of the subtree rooted here.
    pub fn inorder(&self) -> List<T>
    where
        T: Clone,
    {
        self.nodes.traverse(self.id, Order::In)
    }

    /// Postorder values of the subtree rooted here.
    pub fn postorder(&self) -> List<T>
    where
        T: Clone,
    {
        self.nodes.traverse(self.id, Order::Post)
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &node.value)
            .field("parent", &node.parent)
            .field("left", &node.left)
            .field("right", &node.right)
            .finish()
    }
}

/// Inorder iterator returned by [`Tree::iter`]. It follows parent links, so it needs no stack.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        let nodes = self.nodes;
        self.next = nodes.successor(id);
        self.remaining -= 1;
        Some(&nodes.node(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
