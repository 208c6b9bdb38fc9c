/// The narrowed form of an [`Optional`](crate::Optional).
///
/// Matching on a `Presence` is how a caller proves, through the type system,
/// that a value is there before touching it. There is deliberately no way to
/// turn a `Presence` back into an `Optional`.
///
/// ```
/// use presence::{Optional, Presence};
///
/// let greeting = match Optional::of("hello").into_presence() {
///     Presence::Present(word) => word.len(),
///     Presence::Absent => 0,
/// };
/// assert_eq!(greeting, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Presence<T> {
    Absent,
    Present(T),
}

impl<T> Presence<T> {
    /// Returns `true` for [`Presence::Present`].
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for [`Presence::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
