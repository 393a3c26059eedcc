use std::fmt;

/// The type tag of a [`Variant`](super::Variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
    Null,
    Integer,
    Long,
    Float,
    Double,
    String,
    Boolean,
    DateTime,
    TimeSpan,
    Object,
    Array,
}

impl VariantType {
    /// Tests whether the type is one of the four numeric types.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Long | Self::Float | Self::Double)
    }

    /// Returns the position of a numeric type on the promotion ladder
    /// `Integer < Long < Float < Double`.
    #[must_use]
    pub const fn numeric_rank(self) -> Option<u8> {
        match self {
            Self::Integer => Some(0),
            Self::Long => Some(1),
            Self::Float => Some(2),
            Self::Double => Some(3),
            _ => None,
        }
    }

    /// Returns the type both operands of a binary operator are converted to.
    ///
    /// Two numeric types meet at the wider one. Otherwise the left operand
    /// decides.
    ///
    /// # Example
    /// ```
    /// use formulary::variant::VariantType;
    ///
    /// assert_eq!(VariantType::Integer.common_type(VariantType::Float), VariantType::Float);
    /// assert_eq!(VariantType::String.common_type(VariantType::Integer), VariantType::String);
    /// ```
    #[must_use]
    pub const fn common_type(self, other: Self) -> Self {
        match (self.numeric_rank(), other.numeric_rank()) {
            (Some(left), Some(right)) if right > left => other,
            _ => self,
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::DateTime => "DateTime",
            Self::TimeSpan => "TimeSpan",
            Self::Object => "Object",
            Self::Array => "Array",
        };
        f.write_str(name)
    }
}
