//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are the same value. `Money` is the canonical
/// example here: `$5.00` equals `$5.00` no matter where either came from. To
/// "modify" a value object, construct a new one.
///
/// The supertraits are the minimum a value needs to behave like one: cheap to
/// copy around (`Clone`), comparable by its attributes (`PartialEq`), and
/// printable in tests and logs (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
