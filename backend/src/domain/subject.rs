//! Check-in subjects: registered users and guest devices.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned when constructing subject identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectValidationError {
    /// User identifier was empty.
    #[error("user id must not be empty")]
    EmptyUserId,
    /// User identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidUserId,
    /// Device identifier was blank.
    #[error("device id must not be empty")]
    EmptyDeviceId,
    /// Device identifier carried leading or trailing whitespace.
    #[error("device id must not contain surrounding whitespace")]
    DeviceIdWhitespace,
    /// Device identifier exceeded the storage limit.
    #[error("device id must be at most {max} characters")]
    DeviceIdTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Stable user identifier stored as a UUID.
///
/// Input in any form the UUID parser accepts is kept in lowercase hyphenated
/// form, so equality, hashing and lock keys agree for the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, SubjectValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, SubjectValidationError> {
        if id.is_empty() {
            return Err(SubjectValidationError::EmptyUserId);
        }
        if id.trim() != id {
            return Err(SubjectValidationError::InvalidUserId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| SubjectValidationError::InvalidUserId)?;
        Ok(Self(parsed, parsed.hyphenated().to_string()))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = SubjectValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Opaque guest device identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

/// Maximum accepted device identifier length.
pub const DEVICE_ID_MAX: usize = 100;

impl DeviceId {
    /// Validate and construct a [`DeviceId`].
    ///
    /// # Examples
    /// ```
    /// use vibecheck::domain::DeviceId;
    ///
    /// assert!(DeviceId::new("dev-1").is_ok());
    /// assert!(DeviceId::new("  ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, SubjectValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SubjectValidationError::EmptyDeviceId);
        }
        if id.trim() != id {
            return Err(SubjectValidationError::DeviceIdWhitespace);
        }
        if id.chars().count() > DEVICE_ID_MAX {
            return Err(SubjectValidationError::DeviceIdTooLong { max: DEVICE_ID_MAX });
        }
        Ok(Self(id))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DeviceId> for String {
    fn from(value: DeviceId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DeviceId {
    type Error = SubjectValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Who is checking in. Registered users are streak-tracked; guests are
/// quota-limited and never carry a user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CheckInSubject {
    /// Authenticated user.
    User(UserId),
    /// Unauthenticated guest device.
    Device(DeviceId),
}

impl CheckInSubject {
    /// Short label used in logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Device(_) => "device",
        }
    }

    /// The user identifier, if this is a registered user.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::User(user_id) => Some(user_id),
            Self::Device(_) => None,
        }
    }

    /// Key used to serialise concurrent work for the same subject.
    pub fn lock_key(&self) -> String {
        match self {
            Self::User(user_id) => format!("user:{user_id}"),
            Self::Device(device_id) => format!("device:{device_id}"),
        }
    }
}
