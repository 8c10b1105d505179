// Zipping and unzipping, plus replicate.

use crate::list::clamp_count;

/// Pair up the elements of `xs` and `ys`. The longer sequence is cut to the
/// length of the shorter one.
pub fn zip<A: Clone, B: Clone>(xs: &[A], ys: &[B]) -> Vec<(A, B)> {
    zip_with(|x, y| (x, y), xs, ys)
}

/// Combine `xs` and `ys` pairwise with `f`, up to the shorter length.
pub fn zip_with<A, B, C, F>(mut f: F, xs: &[A], ys: &[B]) -> Vec<C>
where
    A: Clone,
    B: Clone,
    F: FnMut(A, B) -> C,
{
    xs.iter()
        .zip(ys)
        .map(|(x, y)| f(x.clone(), y.clone()))
        .collect()
}

/// Split a sequence of pairs into its two components.
pub fn unzip<A: Clone, B: Clone>(pairs: &[(A, B)]) -> (Vec<A>, Vec<B>) {
    pairs.iter().cloned().unzip()
}

/// `n` copies of `x`. A zero or negative `n` gives the empty sequence.
pub fn replicate<T: Clone>(n: isize, x: T) -> Vec<T> {
    vec![x; clamp_count(n, usize::MAX)]
}
