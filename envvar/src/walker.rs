//! Walking a record's fields and resolving their values

use std::borrow::Cow;

use crate::convert::{self, Leaf};
use crate::error::{Error, ErrorList, FieldError};
use crate::lookup::{Env, Lookup, NotUnicodeError};
use crate::record::{FieldDescriptor, Record, Slot};

/// Drives one bind: holds the lookup source, the key prefix accumulated from
/// enclosing records, and every error seen so far.
pub struct Walker<'a> {
    lookup: &'a dyn Lookup,
    prefix: String,
    errors: ErrorList,
}

impl<'a> Walker<'a> {
    fn new(lookup: &'a dyn Lookup, prefix: &str) -> Self {
        Self {
            lookup,
            prefix: prefix.to_owned(),
            errors: ErrorList::default(),
        }
    }

    /// Bind one field.
    ///
    /// Nested records are descended into with the field's key as an extra
    /// prefix; everything else is resolved and converted. Failures are
    /// recorded and never stop the walk.
    pub fn visit(&mut self, field: &FieldDescriptor, slot: Slot<'_>) {
        let leaf = match slot {
            Slot::Nested(record) => return self.descend(field, record),
            Slot::Scalar(scalar) => Leaf::Scalar(scalar),
            Slot::Custom(parser) => Leaf::Custom(parser),
            Slot::Unsupported(ty) => Leaf::Unsupported(ty),
        };
        self.bind_leaf(field, leaf);
    }

    /// Prefix applied to the keys of the fields currently being visited.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn descend(&mut self, field: &FieldDescriptor, record: &mut dyn Record) {
        if field.default.is_some() {
            self.errors.push(FieldError::unsupported(
                field.ident,
                "default tag is not supported for nested structs",
            ));
            return;
        }

        let outer_len = self.prefix.len();
        if let Some(prefix) = field.name {
            self.prefix.push_str(prefix);
        }
        log::trace!("descending into `{}` with prefix {:?}", field.ident, self.prefix);
        record.bind_fields(self);
        self.prefix.truncate(outer_len);
    }

    fn bind_leaf(&mut self, field: &FieldDescriptor, leaf: Leaf<'_>) {
        let key = format!("{}{}", self.prefix, field.key());
        let raw = match self.resolve(field, &key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.errors.push(FieldError::unset(key));
                return;
            }
            Err(error) => {
                self.errors
                    .push(FieldError::invalid(key, error.to_string_lossy(), error));
                return;
            }
        };
        if let Err(error) = convert::assign(leaf, field, &key, &raw) {
            self.errors.push(error);
        }
    }

    /// The raw value for `key`: the source's value when present (even if
    /// empty), else the field's default.
    fn resolve(
        &self,
        field: &FieldDescriptor,
        key: &str,
    ) -> Result<Option<Cow<'static, str>>, NotUnicodeError> {
        if let Some(value) = self.lookup.lookup(key)? {
            log::trace!("`{}` resolved from {key}", field.ident);
            return Ok(Some(Cow::Owned(value)));
        }
        let Some(default) = field.default else {
            return Ok(None);
        };
        log::trace!("`{}` falls back to its default, {key} is not set", field.ident);
        Ok(Some(Cow::Borrowed(default)))
    }

    fn finish(self) -> Result<(), Error> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Fields(self.errors))
        }
    }
}

/// Bind options: where values come from and the prefix of every key.
///
/// ```rust
/// use std::collections::HashMap;
/// use envvar::{Binder, Envvar};
///
/// #[derive(Debug, Default, Envvar)]
/// struct Config {
///     #[envvar(name = "PORT")]
///     port: u16,
/// }
///
/// # fn main() -> Result<(), envvar::Error> {
/// let source = HashMap::from([("APP_PORT".to_string(), "3000".to_string())]);
/// let config: Config = Binder::new().lookup(source).prefix("APP_").load()?;
/// assert_eq!(config.port, 3000);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Binder<L = Env> {
    lookup: L,
    prefix: String,
}

impl Binder {
    /// Bind from the process environment with no prefix.
    pub fn new() -> Self {
        Self {
            lookup: Env,
            prefix: String::new(),
        }
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lookup> Binder<L> {
    /// Replace the lookup source.
    pub fn lookup<M: Lookup>(self, lookup: M) -> Binder<M> {
        Binder {
            lookup,
            prefix: self.prefix,
        }
    }

    /// Prepend `prefix` to every key.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Bind every field of `record` in place.
    ///
    /// All fields are visited even after failures; the returned
    /// [`Error::Fields`] lists every failure in visiting order. Fields that
    /// could be bound keep their new values either way.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when the prefix contains `=` or NUL; no
    ///   field is touched
    /// - [`Error::Fields`] when any field is unset, unparsable or unsupported
    pub fn bind<T: Record + ?Sized>(&self, record: &mut T) -> Result<(), Error> {
        if let Some(c) = self.prefix.chars().find(|c| matches!(c, '=' | '\0')) {
            return Err(Error::InvalidArgument(format!(
                "prefix {:?} must not contain {c:?}",
                self.prefix
            )));
        }

        log::debug!(
            "binding {} with prefix {:?}",
            std::any::type_name::<T>(),
            self.prefix
        );
        let mut walker = Walker::new(&self.lookup, &self.prefix);
        record.bind_fields(&mut walker);
        log::debug!(
            "bound {} with {} field error(s)",
            std::any::type_name::<T>(),
            walker.errors.len()
        );
        walker.finish()
    }

    /// Build a default `T` and bind it.
    pub fn load<T: Record + Default>(&self) -> Result<T, Error> {
        let mut record = T::default();
        self.bind(&mut record)?;
        Ok(record)
    }
}

/// Bind `record` from the process environment.
///
/// Shorthand for `Binder::new().bind(record)`.
pub fn bind<T: Record + ?Sized>(record: &mut T) -> Result<(), Error> {
    Binder::new().bind(record)
}
