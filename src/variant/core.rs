use std::{any::Any, fmt, sync::Arc};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::variant::VariantType;

/// A dynamically typed value.
///
/// Exactly one payload is meaningful at a time, selected by the variant. The
/// default value is [`Variant::Null`].
#[derive(Debug, Clone, Default)]
pub enum Variant {
    /// The absence of a value.
    #[default]
    Null,
    /// A 32 bit signed integer.
    Integer(i32),
    /// A 64 bit signed integer.
    Long(i64),
    /// A single precision floating-point number.
    Float(f32),
    /// A double precision floating-point number.
    Double(f64),
    /// A string of characters.
    String(String),
    /// A boolean value.
    Boolean(bool),
    /// A point in time in UTC.
    DateTime(DateTime<Utc>),
    /// A duration in milliseconds.
    TimeSpan(i64),
    /// An opaque host object, compared by identity.
    Object(Arc<dyn Any + Send + Sync>),
    /// An ordered list of values.
    Array(Vec<Self>),
}

impl Variant {
    /// Wraps a host object.
    #[must_use]
    pub fn from_object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    /// Returns the type tag of this value.
    #[must_use]
    pub const fn variant_type(&self) -> VariantType {
        match self {
            Self::Null => VariantType::Null,
            Self::Integer(_) => VariantType::Integer,
            Self::Long(_) => VariantType::Long,
            Self::Float(_) => VariantType::Float,
            Self::Double(_) => VariantType::Double,
            Self::String(_) => VariantType::String,
            Self::Boolean(_) => VariantType::Boolean,
            Self::DateTime(_) => VariantType::DateTime,
            Self::TimeSpan(_) => VariantType::TimeSpan,
            Self::Object(_) => VariantType::Object,
            Self::Array(_) => VariantType::Array,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Tests whether the value carries no content.
    ///
    /// `Null`, the empty string, and the empty array are empty.
    ///
    /// # Example
    /// ```
    /// use formulary::variant::Variant;
    ///
    /// assert!(Variant::Null.is_empty());
    /// assert!(Variant::from("").is_empty());
    /// assert!(!Variant::Integer(0).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.variant_type().is_numeric()
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        if let Self::Integer(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub const fn as_long(&self) -> Option<i64> {
        if let Self::Long(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        if let Self::Float(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        if let Self::Double(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(v) = self { Some(v) } else { None }
    }

    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub const fn as_date_time(&self) -> Option<DateTime<Utc>> {
        if let Self::DateTime(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub const fn as_time_span(&self) -> Option<i64> {
        if let Self::TimeSpan(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        if let Self::Array(v) = self { Some(v) } else { None }
    }

    /// Returns the wrapped host object if it has type `T`.
    #[must_use]
    pub fn as_object<T: Any>(&self) -> Option<&T> {
        if let Self::Object(v) = self { v.downcast_ref() } else { None }
    }

    /// Returns the number of elements of an array, or `0` for other values.
    #[must_use]
    pub fn length(&self) -> usize {
        self.as_array().map_or(0, <[Self]>::len)
    }

    /// Returns the array element at `index`.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|items| items.get(index))
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) | (Self::TimeSpan(a), Self::TimeSpan(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Variant {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Variant {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<DateTime<Utc>> for Variant {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl From<Vec<Self>> for Variant {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) | Self::TimeSpan(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{}", v.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Object(_) => write!(f, "[object]"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
        }
    }
}
