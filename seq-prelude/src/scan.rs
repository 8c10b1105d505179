// Building sequences: scans.
//
// A scan reports every intermediate value of its combination. The value
// carried into the next step is the element just visited, not the result of
// `f`, so `last(scanl(f, z, xs))` is in general not `foldl(f, z, xs)`.

/// Successive values from the left.
///
/// The result starts with `z`. Then for every element `x`, `f(previous, x)`
/// is pushed, where `previous` is `z` for the first element and the element
/// before `x` after that.
///
/// ```
/// use seq_prelude::scanl;
///
/// assert_eq!(scanl(|a, b| a + b, 0, &[1, 2, 3]), vec![0, 1, 3, 5]);
/// ```
pub fn scanl<T, F>(mut f: F, z: T, xs: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let mut result = Vec::with_capacity(xs.len() + 1);
    result.push(z.clone());
    let mut previous = z;
    for x in xs {
        result.push(f(previous, x.clone()));
        previous = x.clone();
    }
    result
}

/// [`scanl`] seeded with the first element of `xs`. The empty sequence
/// scans to the empty sequence.
pub fn scanl1<T, F>(f: F, xs: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    match xs.split_first() {
        Some((first, rest)) => scanl(f, first.clone(), rest),
        None => Vec::new(),
    }
}

/// [`scanl`] over the reversed sequence.
pub fn scanr<T, F>(f: F, z: T, xs: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    scanl(f, z, &crate::list::reverse(xs))
}

/// [`scanl1`] over the reversed sequence.
pub fn scanr1<T, F>(f: F, xs: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    scanl1(f, &crate::list::reverse(xs))
}
