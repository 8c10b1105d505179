//! Haskell Prelude style combinators over finite sequences.
//!
//! Sequences are taken as slices and every operation that produces a
//! sequence returns a new `Vec`; inputs are never modified. Operations that
//! need a non-empty sequence return [`Error::EmptySequence`] instead of
//! panicking.
//!
//! ```
//! use seq_prelude::{foldl, head, map, maximum};
//!
//! let xs = [3, 1, 4, 1, 5];
//! assert_eq!(head(&xs), Ok(&3));
//! assert_eq!(map(|x| x * 2, &xs), vec![6, 2, 8, 2, 10]);
//! assert_eq!(foldl(|acc, x| acc + x, 0, &xs), 14);
//! assert_eq!(maximum(&xs), Ok(&5));
//! ```

mod capability;
mod combinator;
pub mod error;
mod fold;
mod list;
mod scan;
mod search;
mod zip;

pub use capability::{Equality, Ordered};
pub use combinator::{compose, constant, flip, identity};
pub use error::{Error, Operation, Result};
pub use fold::{
    all, any, conjunction, disjunction, foldl, foldl1, foldr, foldr1, maximum, minimum, product,
    sum,
};
pub use list::{
    append, break_, concat, concat_map, drop, drop_while, filter, head, init, is_empty, last,
    length, map, reverse, span, split_at, tail, take, take_while,
};
pub use scan::{scanl, scanl1, scanr, scanr1};
pub use search::{elem, lookup, not_elem};
pub use zip::{replicate, unzip, zip, zip_with};
