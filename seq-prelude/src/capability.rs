/// Ordering capability required by [`maximum`](crate::maximum) and
/// [`minimum`](crate::minimum).
///
/// `less_or_eq` must describe a total order. Anything that is `PartialOrd`
/// gets an implementation for free; a type can also implement it directly,
/// for instance to order on a single field.
pub trait Ordered {
    fn less_or_eq(&self, other: &Self) -> bool;
}

impl<T: PartialOrd + ?Sized> Ordered for T {
    #[inline]
    fn less_or_eq(&self, other: &Self) -> bool {
        self <= other
    }
}

/// Equality capability, used by the searching operations.
pub trait Equality {
    fn equals(&self, other: &Self) -> bool;
}

impl<T: PartialEq + ?Sized> Equality for T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}
