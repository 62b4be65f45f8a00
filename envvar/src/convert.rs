//! Conversion of raw values into field types

use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::FieldError;
use crate::record::{Field, FieldDescriptor, Slot};
use crate::unmarshal::Unmarshal;

/// A mutable reference to a field of one of the built-in scalar types.
#[derive(Debug)]
pub enum Scalar<'a> {
    String(&'a mut String),
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Duration(&'a mut Duration),
}

impl Scalar<'_> {
    /// Name of the destination type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::I128(_) => "i128",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::U128(_) => "u128",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Duration(_) => "Duration",
        }
    }

    /// Parse `raw` and store the result in the referenced field.
    ///
    /// The field is left untouched when parsing fails.
    pub fn set(self, raw: &str) -> anyhow::Result<()> {
        match self {
            Self::String(slot) => raw.clone_into(slot),
            Self::Bool(slot) => *slot = parse_bool(raw)?,
            Self::I8(slot) => *slot = raw.parse()?,
            Self::I16(slot) => *slot = raw.parse()?,
            Self::I32(slot) => *slot = raw.parse()?,
            Self::I64(slot) => *slot = raw.parse()?,
            Self::I128(slot) => *slot = raw.parse()?,
            Self::Isize(slot) => *slot = raw.parse()?,
            Self::U8(slot) => *slot = raw.parse()?,
            Self::U16(slot) => *slot = raw.parse()?,
            Self::U32(slot) => *slot = raw.parse()?,
            Self::U64(slot) => *slot = raw.parse()?,
            Self::U128(slot) => *slot = raw.parse()?,
            Self::Usize(slot) => *slot = raw.parse()?,
            Self::F32(slot) => *slot = raw.parse()?,
            Self::F64(slot) => *slot = raw.parse()?,
            Self::Duration(slot) => *slot = parse_duration(raw)?,
        }
        Ok(())
    }
}

macro_rules! scalar_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Scalar(Scalar::$variant(self))
                }
            }
        )*
    };
}

scalar_field! {
    String => String,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Duration => Duration,
}

/// Error returned for boolean literals outside the accepted spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid boolean {0:?}, expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
pub struct ParseBoolError(String);

/// Parse a boolean literal.
pub fn parse_bool(raw: &str) -> Result<bool, ParseBoolError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError(raw.to_owned())),
    }
}

/// A field that takes a single value, as opposed to a nested record.
pub(crate) enum Leaf<'a> {
    Scalar(Scalar<'a>),
    Custom(&'a mut dyn Unmarshal),
    Unsupported(&'static str),
}

/// Assign `raw` to a leaf field.
///
/// Custom parsers run first, then the built-in conversions. `key` is the
/// fully prefixed key the value was resolved from.
pub(crate) fn assign(
    leaf: Leaf<'_>,
    field: &FieldDescriptor,
    key: &str,
    raw: &str,
) -> Result<(), FieldError> {
    match leaf {
        Leaf::Custom(parser) => parser
            .unmarshal_text(raw)
            .map_err(|source| FieldError::invalid(key, raw, source)),
        Leaf::Scalar(scalar) => scalar
            .set(raw)
            .map_err(|source| FieldError::invalid(key, raw, source)),
        Leaf::Unsupported(ty) => Err(FieldError::unsupported(
            field.ident,
            format!("field type not supported: {ty}"),
        )),
    }
}
