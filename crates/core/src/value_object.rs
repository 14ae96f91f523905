//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Nothing is generic over it; it documents which types are compared by value.
///
/// Value objects have no identity and are compared by their attribute values.
/// To "modify" one, build a new value and swap it in.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ContactInfo {
///     phone: String,
///     email: String,
/// }
///
/// impl ValueObject for ContactInfo {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
