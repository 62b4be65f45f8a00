//! Records, fields and the slots they expose to the walker

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::time::SystemTime;

use crate::convert::Scalar;
use crate::error::Error;
use crate::unmarshal::Unmarshal;
use crate::walker::{Binder, Walker};

/// A configuration record: a struct whose fields are bound one by one.
///
/// Normally implemented with `#[derive(Envvar)]`. A hand-written
/// implementation visits every field, in declaration order, with its
/// descriptor and slot:
///
/// ```rust
/// use envvar::{Field, FieldDescriptor, Record, Walker};
///
/// #[derive(Default)]
/// struct Server {
///     port: u16,
/// }
///
/// impl Record for Server {
///     fn bind_fields(&mut self, walker: &mut Walker<'_>) {
///         walker.visit(
///             &FieldDescriptor {
///                 ident: "port",
///                 key_ident: "port",
///                 name: Some("PORT"),
///                 default: Some("8080"),
///             },
///             self.port.slot(),
///         );
///     }
/// }
///
/// # fn main() -> Result<(), envvar::Error> {
/// let mut server = Server::default();
/// envvar::Binder::new()
///     .lookup(std::collections::HashMap::<String, String>::new())
///     .bind(&mut server)?;
/// assert_eq!(server.port, 8080);
/// # Ok(())
/// # }
/// ```
pub trait Record {
    /// Visit every field of the record with `walker`.
    fn bind_fields(&mut self, walker: &mut Walker<'_>);

    /// Build a default record and bind it from the process environment.
    fn from_env() -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        Binder::new().load()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn bind_fields(&mut self, walker: &mut Walker<'_>) {
        (**self).bind_fields(walker);
    }
}

/// An absent nested record is allocated before its fields are bound.
impl<R: Record + Default> Record for Option<R> {
    fn bind_fields(&mut self, walker: &mut Walker<'_>) {
        self.get_or_insert_with(R::default).bind_fields(walker);
    }
}

/// Static metadata of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier as declared, without any `r#`. Used in error reports.
    pub ident: &'static str,
    /// Key segment derived from the identifier by the container rename rule.
    pub key_ident: &'static str,
    /// Key override. For nested records this is the prefix of every
    /// descendant key instead.
    pub name: Option<&'static str>,
    /// Literal used when the key is absent. `Some("")` still makes the field
    /// optional.
    pub default: Option<&'static str>,
}

impl FieldDescriptor {
    /// The key segment this field contributes: its override, else the
    /// (renamed) identifier.
    pub fn key(&self) -> &'static str {
        self.name.unwrap_or(self.key_ident)
    }
}

/// What a field looks like to the walker.
pub enum Slot<'a> {
    /// A built-in conversion target.
    Scalar(Scalar<'a>),
    /// A type with its own parser.
    Custom(&'a mut dyn Unmarshal),
    /// A nested record, bound recursively.
    Nested(&'a mut dyn Record),
    /// A type no value can be converted into, named for the error message.
    Unsupported(&'static str),
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(&scalar.kind()).finish(),
            Self::Custom(_) => f.write_str("Custom"),
            Self::Nested(_) => f.write_str("Nested"),
            Self::Unsupported(ty) => f.debug_tuple("Unsupported").field(ty).finish(),
        }
    }
}

/// A type that can be the type of a record field.
///
/// Implemented for the built-in scalar types, for derived records, and for
/// `Box`/`Option` around records. Types implementing [`Unmarshal`] do not
/// need it: the derive prefers their parser.
///
/// Any other field type is rejected at compile time:
///
/// ```compile_fail
/// #[derive(envvar::Envvar)]
/// struct Config {
///     initial: char,
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound by envvar",
    label = "unsupported field type",
    note = "implement `envvar::Unmarshal` for it or wrap it in `envvar::Json`"
)]
pub trait Field {
    /// Expose the field to the walker.
    fn slot(&mut self) -> Slot<'_>;
}

impl<R: Record + ?Sized> Field for Box<R> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Nested(self)
    }
}

impl<R: Record + Default> Field for Option<R> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Nested(self)
    }
}

macro_rules! unsupported_field {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

unsupported_field! {
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [] SystemTime,
}
