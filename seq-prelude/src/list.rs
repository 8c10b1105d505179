// List operations over slices. Anything that returns a sequence returns a
// fresh Vec; the input is never touched.

use crate::combinator::flip;
use crate::error::{self, Error, Operation};
use crate::fold::foldr;

/// Clamp a signed count to `0..=len`.
pub(crate) fn clamp_count(n: isize, len: usize) -> usize {
    if n <= 0 {
        0
    } else {
        (n as usize).min(len)
    }
}

/// Extract the first element of a sequence, which must be non-empty.
pub fn head<T>(xs: &[T]) -> error::Result<&T> {
    xs.first().ok_or_else(|| Error::empty_sequence(Operation::Head))
}

/// Extract the last element of a sequence, which must be non-empty.
pub fn last<T>(xs: &[T]) -> error::Result<&T> {
    xs.last().ok_or_else(|| Error::empty_sequence(Operation::Last))
}

/// The elements after the [`head`] of a sequence, which must be non-empty.
pub fn tail<T: Clone>(xs: &[T]) -> error::Result<Vec<T>> {
    match xs.split_first() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(Error::empty_sequence(Operation::Tail)),
    }
}

/// All the elements of a sequence except the last one. The sequence must be
/// non-empty.
pub fn init<T: Clone>(xs: &[T]) -> error::Result<Vec<T>> {
    match xs.split_last() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(Error::empty_sequence(Operation::Init)),
    }
}

/// Test whether a sequence is empty. `null` in Haskell.
#[inline]
pub fn is_empty<T>(xs: &[T]) -> bool {
    xs.is_empty()
}

#[inline]
pub fn length<T>(xs: &[T]) -> usize {
    xs.len()
}

/// The elements of `xs` in reverse order.
pub fn reverse<T: Clone>(xs: &[T]) -> Vec<T> {
    xs.iter().rev().cloned().collect()
}

/// The prefix of `xs` of length `n`, or all of `xs` if `n` exceeds its
/// length. A zero or negative `n` gives the empty sequence.
///
/// ```
/// use seq_prelude::take;
///
/// assert_eq!(take(3, &[1, 2, 3, 4, 5]), vec![1, 2, 3]);
/// assert_eq!(take(3, &[1, 2]), vec![1, 2]);
/// assert_eq!(take(-1, &[1, 2]), Vec::<i32>::new());
/// ```
pub fn take<T: Clone>(n: isize, xs: &[T]) -> Vec<T> {
    xs[..clamp_count(n, xs.len())].to_vec()
}

/// The suffix of `xs` after the first `n` elements. A zero or negative `n`
/// gives a copy of `xs`.
pub fn drop<T: Clone>(n: isize, xs: &[T]) -> Vec<T> {
    xs[clamp_count(n, xs.len())..].to_vec()
}

/// `(take(n, xs), drop(n, xs))`
pub fn split_at<T: Clone>(n: isize, xs: &[T]) -> (Vec<T>, Vec<T>) {
    let (prefix, suffix) = xs.split_at(clamp_count(n, xs.len()));
    (prefix.to_vec(), suffix.to_vec())
}

/// The longest prefix of `xs` whose elements all satisfy `pred`.
pub fn take_while<T, P>(pred: P, xs: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span(pred, xs).0
}

/// What remains after [`take_while`].
pub fn drop_while<T, P>(pred: P, xs: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span(pred, xs).1
}

/// `(take_while(pred, xs), drop_while(pred, xs))`, in a single pass.
pub fn span<T, P>(mut pred: P, xs: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let split = xs.iter().position(|x| !pred(x)).unwrap_or(xs.len());
    let (prefix, suffix) = xs.split_at(split);
    (prefix.to_vec(), suffix.to_vec())
}

/// [`span`] with the predicate negated. `break` in Haskell.
pub fn break_<T, P>(mut pred: P, xs: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span(|x| !pred(x), xs)
}

/// The sequence obtained by applying `f` to each element of `xs`.
pub fn map<T, U, F>(f: F, xs: &[T]) -> Vec<U>
where
    T: Clone,
    F: FnMut(T) -> U,
{
    xs.iter().cloned().map(f).collect()
}

/// The elements of `xs` that satisfy `pred`, in their original order.
pub fn filter<T, P>(mut pred: P, xs: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut ys = Vec::new();
    for x in xs {
        if pred(x) {
            ys.push(x.clone());
        }
    }
    ys
}

/// `xs` followed by `ys`. `(++)` in Haskell.
pub fn append<T: Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let mut zs = Vec::with_capacity(xs.len() + ys.len());
    zs.extend_from_slice(xs);
    zs.extend_from_slice(ys);
    zs
}

/// Concatenate a sequence of sequences.
///
/// This is a right fold of [`append`], each inner sequence being prepended
/// to everything that follows it.
pub fn concat<T, S>(xss: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]> + Clone,
{
    let prepend = flip(|xs: S, rest: Vec<T>| append(xs.as_ref(), &rest));
    foldr(prepend, Vec::new(), xss)
}

/// Map `f` over `xs` and concatenate the results.
pub fn concat_map<T, U, F>(f: F, xs: &[T]) -> Vec<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(T) -> Vec<U>,
{
    concat(&map(f, xs))
}
