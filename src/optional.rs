use std::{any, fmt};

use crate::{Error, IntoOptional, Plain, Presence, Result};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr<T> {
    Empty,
    Present(T),
}

/// An immutable value that is either present with exactly one `T`, or empty.
///
/// The representation is private: an `Optional` can only be built through
/// [`from_value`](Self::from_value), [`from_nullable`](Self::from_nullable),
/// [`of`](Self::of) or [`empty`](Self::empty), and all of them flatten nested
/// absence. As a result `T` is never itself an optional.
///
/// There is no unchecked accessor. The value is reached through a default
/// ([`or_else_value`](Self::or_else_value),
/// [`or_else_compute`](Self::or_else_compute)), through a transformation
/// ([`map`](Self::map), [`if_present`](Self::if_present)), or by matching on
/// [`Presence`]:
///
/// ```compile_fail
/// use presence::Optional;
///
/// let value = Optional::of("Avoid");
/// let _ = value.get();
/// ```
///
/// ```compile_fail
/// use presence::Optional;
///
/// let value = Optional::of("Avoid");
/// if value.is_present() {
///     println!("{}", value.unwrap());
/// }
/// ```
///
/// An optional of an optional cannot be spelled either:
///
/// ```compile_fail
/// use presence::Optional;
///
/// let _nested = Optional::of(Optional::of("Nested ref"));
/// ```
///
/// `T` must be [`Plain`], so no nested type can even be named:
///
/// ```compile_fail
/// use presence::Optional;
///
/// let _nested = Optional::<Optional<i32>>::empty();
/// ```
///
/// ```compile_fail
/// use presence::Optional;
///
/// let _nested: Optional<Option<i32>> = Optional::default();
/// ```
///
/// Nor is it meant to be stored and persisted as a field:
///
/// ```compile_fail
/// fn assert_serialize<T: serde::Serialize>() {}
///
/// assert_serialize::<presence::Optional<String>>();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Optional<T: Plain> {
    repr: Repr<T>,
}

impl<T: Plain> Optional<T> {
    /// Only called with values already known not to be optional.
    #[inline]
    pub(crate) const fn present(value: T) -> Self {
        Self {
            repr: Repr::Present(value),
        }
    }

    /// Creates an empty optional.
    #[inline]
    pub const fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    /// Creates a present optional from a value that is expected to exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if `value` denotes absence
    /// (`None`, a null pointer or an empty optional). Use
    /// [`from_nullable`](Self::from_nullable) when absence is legitimate.
    ///
    /// # Example
    ///
    /// ```
    /// use presence::{Error, Optional};
    ///
    /// assert!(Optional::from_value(Some("Avoid")).is_ok());
    /// assert!(matches!(
    ///     Optional::from_value(None::<&str>),
    ///     Err(Error::InvalidConstruction { .. })
    /// ));
    /// ```
    pub fn from_value<N: IntoOptional<Value = T>>(value: N) -> Result<Self> {
        let optional = value.into_optional();
        if optional.is_absent() {
            let input = any::type_name::<N>();
            #[cfg(feature = "tracing")]
            tracing::debug!(input, "rejected construction of a present value from an absent input");
            return Err(Error::InvalidConstruction { input });
        }
        Ok(optional)
    }

    /// Creates an optional that is present iff `value` is a real value.
    ///
    /// Never fails, and collapses any nesting:
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some("y")), Optional::of("y"));
    /// assert_eq!(
    ///     Optional::from_nullable(Optional::from_nullable("y")),
    ///     Optional::of("y")
    /// );
    /// assert!(Optional::from_nullable(None::<&str>).is_absent());
    /// ```
    #[inline]
    pub fn from_nullable<N: IntoOptional<Value = T>>(value: N) -> Self {
        value.into_optional()
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self.repr, Repr::Present(_))
    }

    /// Returns `true` if the optional is empty.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    #[inline]
    pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self.repr {
            Repr::Present(value) => predicate(value),
            Repr::Empty => false,
        }
    }

    /// Narrows by value.
    #[inline]
    pub fn into_presence(self) -> Presence<T> {
        match self.repr {
            Repr::Present(value) => Presence::Present(value),
            Repr::Empty => Presence::Absent,
        }
    }

    /// Narrows by reference.
    #[inline]
    pub const fn presence(&self) -> Presence<&T> {
        match &self.repr {
            Repr::Present(value) => Presence::Present(value),
            Repr::Empty => Presence::Absent,
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.repr {
            Repr::Present(value) => Optional::present(value),
            Repr::Empty => Optional::empty(),
        }
    }

    /// Transforms the contained value.
    ///
    /// `f` runs only when a value is present. Its result goes through
    /// [`from_nullable`](Self::from_nullable), so a mapper that yields `None`
    /// leaves the result empty and a mapper that yields an optional is
    /// flattened rather than nested.
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let upper = Optional::from_nullable("Avoid").map(str::to_uppercase);
    /// assert_eq!(upper, Optional::of("AVOID".to_owned()));
    ///
    /// let first = Optional::of("").map(|s: &str| s.chars().next());
    /// assert!(first.is_absent());
    ///
    /// let half = Optional::of(8).map(|n: i32| {
    ///     if n % 2 == 0 { Optional::of(n / 2) } else { Optional::empty() }
    /// });
    /// assert_eq!(half, Optional::of(4));
    /// ```
    #[inline]
    pub fn map<N, F>(self, f: F) -> Optional<N::Value>
    where
        N: IntoOptional,
        F: FnOnce(T) -> N,
    {
        match self.repr {
            Repr::Present(value) => f(value).into_optional(),
            Repr::Empty => Optional::empty(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        let keep = match &self.repr {
            Repr::Present(value) => predicate(value),
            Repr::Empty => false,
        };
        if keep { self } else { Self::empty() }
    }

    /// Returns the contained value, or `default` when empty.
    ///
    /// `default` is evaluated by the caller before this call whether or not
    /// it is needed. Anything that costs more than a literal belongs in
    /// [`or_else_compute`](Self::or_else_compute).
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(None::<&str>).or_else_value("Name"), "Name");
    /// ```
    #[inline]
    pub fn or_else_value(self, default: T) -> T {
        match self.repr {
            Repr::Present(value) => value,
            Repr::Empty => default,
        }
    }

    /// Returns the contained value, or the result of `thunk` when empty.
    ///
    /// `thunk` is invoked at most once, and only when no value is present.
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let value = Optional::of("x").or_else_compute(|| unreachable!("not needed"));
    /// assert_eq!(value, "x");
    /// ```
    #[inline]
    pub fn or_else_compute(self, thunk: impl FnOnce() -> T) -> T {
        match self.repr {
            Repr::Present(value) => value,
            Repr::Empty => thunk(),
        }
    }

    /// Returns `self` if present, otherwise `other` converted to an optional.
    ///
    /// `other` is evaluated before the call, like
    /// [`or_else_value`](Self::or_else_value).
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::<i32>::empty().or(Some(2)), Optional::of(2));
    /// assert_eq!(Optional::of(1).or(Some(2)), Optional::of(1));
    /// assert!(Optional::<i32>::empty().or(None::<i32>).is_absent());
    /// ```
    #[inline]
    pub fn or<N>(self, other: N) -> Self
    where
        N: IntoOptional<Value = T>,
    {
        match self.repr {
            Repr::Present(_) => self,
            Repr::Empty => other.into_optional(),
        }
    }

    /// Returns `self` if present, otherwise the optional produced by `thunk`.
    #[inline]
    pub fn or_else<N>(self, thunk: impl FnOnce() -> N) -> Self
    where
        N: IntoOptional<Value = T>,
    {
        match self.repr {
            Repr::Present(_) => self,
            Repr::Empty => thunk().into_optional(),
        }
    }

    /// Runs `f` with the value if one is present.
    #[inline]
    pub fn if_present(self, f: impl FnOnce(T)) {
        if let Repr::Present(value) = self.repr {
            f(value);
        }
    }

    #[inline]
    pub fn if_present_or_else(self, f: impl FnOnce(T), otherwise: impl FnOnce()) {
        match self.repr {
            Repr::Present(value) => f(value),
            Repr::Empty => otherwise(),
        }
    }

    /// Converts into a `Result`, with `err` standing in for absence.
    ///
    /// Like [`into_option`](Self::into_option), this hands the value to a
    /// type with panicking accessors. Prefer matching on
    /// [`into_presence`](Self::into_presence) when staying in this crate.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> std::result::Result<T, E> {
        match self.repr {
            Repr::Present(value) => Ok(value),
            Repr::Empty => Err(err),
        }
    }

    #[inline]
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> std::result::Result<T, E> {
        match self.repr {
            Repr::Present(value) => Ok(value),
            Repr::Empty => Err(err()),
        }
    }

    /// Converts into a std `Option` for interop with other APIs.
    ///
    /// The result has `unwrap`, so checking [`is_present`](Self::is_present)
    /// and then unwrapping the conversion reintroduces check-then-get. Narrow
    /// with [`Presence`] instead:
    ///
    /// ```
    /// use presence::{Optional, Presence};
    ///
    /// let value = Optional::of("Avoid");
    /// let extracted = match value.into_presence() {
    ///     Presence::Present(word) => word,
    ///     Presence::Absent => "fallback",
    /// };
    /// assert_eq!(extracted, "Avoid");
    /// assert_eq!(value.into_option(), Some("Avoid"));
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self.repr {
            Repr::Present(value) => Some(value),
            Repr::Empty => None,
        }
    }

    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_iter()
    }

    /// Creates a present optional from a value whose type rules out absence.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::present(value)
    }
}

impl<T: Plain> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Plain + fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Present(value) => f.debug_tuple("Present").field(value).finish(),
            Repr::Empty => f.write_str("Empty"),
        }
    }
}

// Restricted to `Plain` so that `Option<Optional<T>>` cannot become a nested optional.
impl<T: Plain> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.into_optional()
    }
}

impl<T: Plain> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Plain> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T: Plain> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
