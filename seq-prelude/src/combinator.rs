// Misc functions: id, const, (.) and flip.

/// Identity function.
#[inline]
pub fn identity<A>(a: A) -> A {
    a
}

/// Constant function. The second argument is ignored.
#[inline]
pub fn constant<A, B>(a: A, _b: B) -> A {
    a
}

/// Function composition: `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |a| f(g(a))
}

/// Takes the two arguments of `f` in reverse order.
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(identity(1), 1);
        assert_eq!(identity("foo"), "foo");
    }

    #[test]
    fn test_constant() {
        assert_eq!(constant(1, 2), 1);
        assert_eq!(constant("kept", vec![1, 2, 3]), "kept");
    }

    #[test]
    fn test_compose() {
        let double = |a: i64| a * 2;
        let minus_ten = |a: i64| a - 10;
        let combined = compose(minus_ten, double);
        assert_eq!(combined(30), 50);
    }

    #[test]
    fn test_compose_changes_type() {
        let len = compose(|s: String| s.len(), |n: u32| n.to_string());
        assert_eq!(len(12345), 5);
    }

    #[test]
    fn test_flip() {
        let flipped = flip(|a: i64, b: i64| a - b);
        assert_eq!(flipped(3, 10), 7);
    }
}
