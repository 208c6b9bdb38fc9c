//! An aggregate that owns a value which may be missing.
//!
//! [`Profile`] stores its name as a plain `String` next to a presence flag
//! and decides presence when it is built, so nothing optional lives in its
//! fields or in its constructor parameters. The name is handed out as an
//! [`Optional`] only on the way out.
//!
//! ```
//! use presence::{Optional, Profile};
//!
//! let lookup: Option<&str> = None;
//! let profile = Optional::from_nullable(lookup)
//!     .map(Profile::named)
//!     .or_else_compute(Profile::anonymous);
//!
//! assert_eq!(profile.display_name(), "Name is absent");
//! ```

use crate::{IntoOptional, Optional, Plain};

const MISSING_NAME: &str = "Name is absent";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ProfileRecord", into = "ProfileRecord")
)]
pub struct Profile {
    // Empty whenever `has_name` is false.
    name: String,
    has_name: bool,
}

impl Plain for Profile {}

impl Profile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_name: true,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a profile from a lookup that may have found nothing.
    ///
    /// Presence is resolved here, once; the profile never holds an optional.
    ///
    /// ```
    /// use presence::Profile;
    ///
    /// assert_eq!(Profile::from_nullable_name(Some("Ada".to_owned())), Profile::named("Ada"));
    /// assert_eq!(Profile::from_nullable_name(None::<String>), Profile::anonymous());
    /// ```
    pub fn from_nullable_name<N>(name: N) -> Self
    where
        N: IntoOptional<Value = String>,
    {
        Optional::from_nullable(name)
            .map(Self::named)
            .or_else_compute(Self::anonymous)
    }

    #[inline]
    pub fn has_name(&self) -> bool {
        self.has_name
    }

    pub fn name(&self) -> Optional<&str> {
        if self.has_name {
            Optional::of(self.name.as_str())
        } else {
            Optional::empty()
        }
    }

    /// Renders the name, or a fixed placeholder for anonymous profiles.
    pub fn display_name(&self) -> String {
        self.name()
            .map(Self::describe_name)
            .or_else_compute(Self::describe_missing_name)
    }

    /// Renders a name that is known to exist.
    pub fn describe_name(name: &str) -> String {
        name.to_owned()
    }

    /// Renders the missing-name case.
    pub fn describe_missing_name() -> String {
        MISSING_NAME.to_owned()
    }
}

/// Wire shape of a [`Profile`]: the name is omitted entirely when absent.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ProfileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[cfg(feature = "serde")]
impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Profile::from_nullable_name(record.name)
    }
}

#[cfg(feature = "serde")]
impl From<Profile> for ProfileRecord {
    fn from(profile: Profile) -> Self {
        Self {
            name: profile.has_name.then_some(profile.name),
        }
    }
}
