// Reducing sequences (folds) and the special folds built on them.

use num_traits::{One, Zero};

use crate::capability::Ordered;
use crate::error::{self, Error, Operation};

/// Reduce `xs` from left to right with `f`, starting from `z`.
///
/// ```
/// use seq_prelude::foldl;
///
/// // ((0 - 1) - 2) - 3
/// assert_eq!(foldl(|a, b| a - b, 0, &[1, 2, 3]), -6);
/// ```
pub fn foldl<T, A, F>(f: F, z: A, xs: &[T]) -> A
where
    T: Clone,
    F: FnMut(A, T) -> A,
{
    xs.iter().cloned().fold(z, f)
}

/// [`foldl`] without a starting value: the first element is the seed. The
/// sequence must be non-empty.
pub fn foldl1<T, F>(f: F, xs: &[T]) -> error::Result<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    fold1(f, xs.iter().cloned()).ok_or_else(|| Error::empty_sequence(Operation::Foldl1))
}

/// Reduce `xs` from right to left with `f`, starting from `z`.
///
/// Elements are visited last to first, but `f` still receives the
/// accumulator first and the element second, exactly as in [`foldl`]:
/// `foldr(f, z, xs) == foldl(f, z, reverse(xs))`.
pub fn foldr<T, A, F>(f: F, z: A, xs: &[T]) -> A
where
    T: Clone,
    F: FnMut(A, T) -> A,
{
    xs.iter().rev().cloned().fold(z, f)
}

/// [`foldr`] without a starting value: the last element is the seed. The
/// sequence must be non-empty.
pub fn foldr1<T, F>(f: F, xs: &[T]) -> error::Result<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    fold1(f, xs.iter().rev().cloned()).ok_or_else(|| Error::empty_sequence(Operation::Foldr1))
}

fn fold1<T, F>(f: F, mut iter: impl Iterator<Item = T>) -> Option<T>
where
    F: FnMut(T, T) -> T,
{
    let seed = iter.next()?;
    Some(iter.fold(seed, f))
}

/// The conjunction of a boolean sequence. True for the empty sequence.
pub fn conjunction(xs: &[bool]) -> bool {
    !xs.contains(&false)
}

/// The disjunction of a boolean sequence. False for the empty sequence.
pub fn disjunction(xs: &[bool]) -> bool {
    xs.contains(&true)
}

/// Does any element of `xs` satisfy `pred`? Stops at the first that does.
pub fn any<T, P>(pred: P, xs: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    xs.iter().any(pred)
}

/// Do all elements of `xs` satisfy `pred`? Stops at the first that doesn't.
pub fn all<T, P>(pred: P, xs: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    xs.iter().all(pred)
}

/// The sum of a finite sequence of numbers.
pub fn sum<T>(xs: &[T]) -> T
where
    T: Zero + Clone,
{
    foldl(|a, b| a + b, T::zero(), xs)
}

/// The product of a finite sequence of numbers.
pub fn product<T>(xs: &[T]) -> T
where
    T: One + Clone,
{
    foldl(|a, b| a * b, T::one(), xs)
}

/// The largest element of a non-empty sequence.
///
/// When several elements are equally large the last of them is returned.
pub fn maximum<T: Ordered>(xs: &[T]) -> error::Result<&T> {
    let (first, rest) = xs
        .split_first()
        .ok_or_else(|| Error::empty_sequence(Operation::Maximum))?;
    let mut max = first;
    for x in rest {
        if max.less_or_eq(x) {
            max = x;
        }
    }
    Ok(max)
}

/// The smallest element of a non-empty sequence.
///
/// When several elements are equally small the last of them is returned.
pub fn minimum<T: Ordered>(xs: &[T]) -> error::Result<&T> {
    let (first, rest) = xs
        .split_first()
        .ok_or_else(|| Error::empty_sequence(Operation::Minimum))?;
    let mut min = first;
    for x in rest {
        if x.less_or_eq(min) {
            min = x;
        }
    }
    Ok(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: i64, b: i64) -> i64 {
        a + b
    }

    fn sub(a: i64, b: i64) -> i64 {
        a - b
    }

    #[test]
    fn test_foldl() {
        assert_eq!(foldl(add, 0, &[1, 2, 3]), add(add(add(0, 1), 2), 3));
        assert_eq!(foldl(sub, 0, &[1]), -1);
        assert_eq!(foldl(sub, 7, &[]), 7);
    }

    #[test]
    fn test_foldl_changes_type() {
        let joined = foldl(
            |mut acc: String, x: char| {
                acc.push(x);
                acc
            },
            String::new(),
            &['a', 'b'],
        );
        assert_eq!(joined, "ab");
    }

    #[test]
    fn test_foldl1() {
        assert_eq!(foldl1(|a: i64, b| a * b, &[2, 3]), Ok(6));
        assert_eq!(foldl1(sub, &[10, 1, 2]), Ok(7));
        assert_eq!(foldl1(sub, &[]), Err(Error::EmptySequence(Operation::Foldl1)));
    }

    #[test]
    fn test_foldr() {
        assert_eq!(foldr(sub, 100, &[1]), 99);
        // accumulator first: ((100 - 3) - 2) - 1
        assert_eq!(foldr(sub, 100, &[1, 2, 3]), 94);
    }

    #[test]
    fn test_foldr1() {
        // seed is the last element: (3 - 2) - 1
        assert_eq!(foldr1(sub, &[1, 2, 3]), Ok(0));
        assert_eq!(foldr1(sub, &[5]), Ok(5));
        assert_eq!(foldr1(sub, &[]), Err(Error::EmptySequence(Operation::Foldr1)));
    }

    #[test]
    fn test_conjunction() {
        assert!(conjunction(&[]));
        assert!(conjunction(&[true, true, true]));
        assert!(!conjunction(&[true, false, true]));
    }

    #[test]
    fn test_disjunction() {
        assert!(!disjunction(&[]));
        assert!(disjunction(&[false, true, false]));
        assert!(!disjunction(&[false, false]));
    }

    #[test]
    fn test_any_short_circuits() {
        let mut seen = Vec::new();
        let found = any(
            |x: &i32| {
                seen.push(*x);
                *x > 1
            },
            &[1, 2, 3],
        );
        assert!(found);
        assert_eq!(seen, vec![1, 2]);
        assert!(!any(|_: &i32| true, &[]));
    }

    #[test]
    fn test_all_short_circuits() {
        let mut seen = Vec::new();
        let result = all(
            |x: &i32| {
                seen.push(*x);
                *x < 2
            },
            &[1, 2, 3],
        );
        assert!(!result);
        assert_eq!(seen, vec![1, 2]);
        assert!(all(|_: &i32| false, &[]));
    }

    #[test]
    fn test_sum_and_product() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(product(&[1, 2, 3, 4]), 24);
        assert_eq!(product::<i32>(&[]), 1);
        assert_eq!(sum(&[0.5, 0.25]), 0.75);
    }

    #[test]
    fn test_maximum_minimum() {
        assert_eq!(maximum(&[3, 5, 5, 2]), Ok(&5));
        assert_eq!(minimum(&[3, 1, 5, 2]), Ok(&1));
        assert_eq!(maximum(&["b", "c", "a"]), Ok(&"c"));
        assert_eq!(maximum::<i32>(&[]), Err(Error::EmptySequence(Operation::Maximum)));
        assert_eq!(minimum::<i32>(&[]), Err(Error::EmptySequence(Operation::Minimum)));
    }

    #[test]
    fn test_extremes_keep_rightmost_tie() {
        let xs = [3, 5, 5, 2, 2];
        assert!(std::ptr::eq(maximum(&xs).unwrap(), &xs[2]));
        assert!(std::ptr::eq(minimum(&xs).unwrap(), &xs[4]));
    }
}
