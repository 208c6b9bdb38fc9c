use std::ptr::NonNull;

use crate::{Optional, Plain};

/// Conversion from a value that may denote absence into an [`Optional`].
///
/// This is the single funnel through which every optional is built. Each
/// implementation resolves absence eagerly and flattens any optional it
/// contains, so `Self::Value` is never itself optional:
///
/// | input                | present when         | `Value`      |
/// |----------------------|----------------------|--------------|
/// | `T: Plain`           | always               | `T`          |
/// | `Option<N>`          | `Some` and `N` is    | `N::Value`   |
/// | `Optional<T>`        | it is present        | `T`          |
/// | `*const T`, `*mut T` | the pointer is not null | `NonNull<T>` |
///
/// ```
/// use presence::{IntoOptional, Optional};
///
/// assert_eq!(Some(Some(3)).into_optional(), Optional::of(3));
/// assert!(Some(None::<i32>).into_optional().is_absent());
/// assert!(std::ptr::null::<u8>().into_optional().is_absent());
/// ```
pub trait IntoOptional: Sized {
    /// The type held when the conversion yields a present value.
    type Value: Plain;

    fn into_optional(self) -> Optional<Self::Value>;
}

impl<T: Plain> IntoOptional for T {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        Optional::present(self)
    }
}

impl<N: IntoOptional> IntoOptional for Option<N> {
    type Value = N::Value;

    #[inline]
    fn into_optional(self) -> Optional<N::Value> {
        match self {
            Some(value) => value.into_optional(),
            None => Optional::empty(),
        }
    }
}

impl<T: Plain> IntoOptional for Optional<T> {
    type Value = T;

    #[inline]
    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<T: ?Sized> IntoOptional for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn into_optional(self) -> Optional<NonNull<T>> {
        NonNull::new(self.cast_mut()).map_or_else(Optional::empty, Optional::present)
    }
}

impl<T: ?Sized> IntoOptional for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn into_optional(self) -> Optional<NonNull<T>> {
        NonNull::new(self).map_or_else(Optional::empty, Optional::present)
    }
}
