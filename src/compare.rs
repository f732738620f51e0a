//! Comparison predicates used to order a [`Tree`][crate::tree::Tree].
//!
//! A predicate `P(a, b)` answers "does `a` belong at or to the left of `b`?".
//! It has to be a total preorder: reflexive, transitive and total. Values
//! for which `P` holds both ways are equivalent and end up in the left
//! subtree of each other, so duplicates are allowed.
//!
//! Any closure `Fn(&T, &T) -> bool` is a predicate:
//!
//! ```
//! use linked_bst::tree::Tree;
//!
//! // Order strings by length only.
//! let mut tree = Tree::with_predicate(|a: &String, b: &String| a.len() <= b.len());
//! tree.insert("ccc".to_string());
//! tree.insert("a".to_string());
//! tree.insert("bb".to_string());
//!
//! let inorder = tree.inorder().unwrap();
//! assert_eq!(inorder.iter().map(String::len).collect::<Vec<_>>(), [1, 2, 3]);
//! ```

/// The ordering contract for a [`Tree`][crate::tree::Tree].
pub trait Predicate<T: ?Sized> {
    /// Returns `true` when `value` belongs at or to the left of `pivot`.
    fn goes_left(&self, value: &T, pivot: &T) -> bool;
}

/// The default predicate, `a <= b`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LessEqual;

impl<T> Predicate<T> for LessEqual
where
    T: PartialOrd + ?Sized,
{
    fn goes_left(&self, value: &T, pivot: &T) -> bool {
        value <= pivot
    }
}

/// `a >= b`, for trees whose inorder traversal runs from largest to smallest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GreaterEqual;

impl<T> Predicate<T> for GreaterEqual
where
    T: PartialOrd + ?Sized,
{
    fn goes_left(&self, value: &T, pivot: &T) -> bool {
        value >= pivot
    }
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn goes_left(&self, value: &T, pivot: &T) -> bool {
        self(value, pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less_equal_sends_ties_left() {
        assert!(LessEqual.goes_left(&1, &2));
        assert!(LessEqual.goes_left(&2, &2));
        assert!(!LessEqual.goes_left(&3, &2));
    }

    #[test]
    fn greater_equal_reverses() {
        assert!(GreaterEqual.goes_left(&3, &2));
        assert!(GreaterEqual.goes_left(&2, &2));
        assert!(!GreaterEqual.goes_left(&1, &2));
    }

    #[test]
    fn closures_are_predicates() {
        let by_abs = |a: &i32, b: &i32| a.abs() <= b.abs();
        assert!(by_abs.goes_left(&-1, &2));
        assert!(!by_abs.goes_left(&-3, &2));
    }
}
