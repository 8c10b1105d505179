// Searching sequences by equality.

use crate::capability::Equality;

/// Is `x` an element of `xs`?
pub fn elem<T: Equality>(x: &T, xs: &[T]) -> bool {
    xs.iter().any(|y| y.equals(x))
}

pub fn not_elem<T: Equality>(x: &T, xs: &[T]) -> bool {
    !elem(x, xs)
}

/// Look up `key` in an association sequence. The first matching pair wins.
pub fn lookup<'a, K, V>(key: &K, pairs: &'a [(K, V)]) -> Option<&'a V>
where
    K: Equality,
{
    pairs
        .iter()
        .find(|(k, _)| k.equals(key))
        .map(|(_, v)| v)
}
