use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ffi::{OsStr, OsString},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    path::{Path, PathBuf},
    ptr::NonNull,
    rc::Rc,
    sync::Arc,
    time::Duration,
};

/// Marker for types whose every value is a real value.
///
/// A `Plain` type has no sentinel of its own for "nothing here", so wrapping
/// it in an [`Optional`](crate::Optional) can never produce a container around
/// nothing. `Option`, raw pointers and `Optional` itself are deliberately not
/// `Plain`; they go through [`IntoOptional`](crate::IntoOptional) and are
/// flattened instead.
///
/// Implement it for your own types with an empty impl or the
/// [`plain!`](crate::plain) macro:
///
/// ```
/// use presence::{Optional, plain};
///
/// #[derive(Debug, PartialEq)]
/// struct UserId(u64);
///
/// plain!(UserId);
///
/// assert!(Optional::of(UserId(7)).is_present());
/// ```
pub trait Plain {}

/// Implements [`Plain`] for one or more non-generic types.
#[macro_export]
macro_rules! plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Plain for $ty {}
        )*
    };
}

plain!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

plain!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

plain!(str, String, OsStr, OsString, Path, PathBuf, Duration);

impl<T> Plain for [T] {}
impl<T, const N: usize> Plain for [T; N] {}
impl<T> Plain for Vec<T> {}
impl<T> Plain for VecDeque<T> {}
impl<K, V> Plain for BTreeMap<K, V> {}
impl<K, V, S> Plain for HashMap<K, V, S> {}
impl<T> Plain for BTreeSet<T> {}
impl<T, S> Plain for HashSet<T, S> {}
impl<T: ?Sized> Plain for NonNull<T> {}

// Pointers are plain only when their pointee is, so `&Optional<T>` stays out.
impl<T: ?Sized + Plain> Plain for &T {}
impl<T: ?Sized + Plain> Plain for Box<T> {}
impl<T: ?Sized + Plain> Plain for Rc<T> {}
impl<T: ?Sized + Plain> Plain for Arc<T> {}
impl<B: ?Sized + Plain + ToOwned> Plain for Cow<'_, B> {}
