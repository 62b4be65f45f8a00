//! Sources that raw values are looked up from

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::ffi::OsString;
use std::hash::BuildHasher;

/// A flat key/value source queried once per leaf field.
///
/// `Ok(None)` means the key is absent. `Ok(Some(String::new()))` means the key
/// is set to the empty string, which is a value like any other and takes
/// precedence over a field's default. An error means the key is set but its
/// value cannot be used; the field is reported invalid and its default is not
/// consulted.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError>;
}

/// A variable is set, but its value is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value is not valid unicode")]
pub struct NotUnicodeError(pub OsString);

impl NotUnicodeError {
    /// The value with invalid sequences replaced by U+FFFD, for reporting.
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Lookup for Env {
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError> {
        env::var_os(key)
            .map(|value| value.into_string().map_err(NotUnicodeError))
            .transpose()
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError> {
        Ok(self.get(key).cloned())
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError> {
        Ok(self.get(key).cloned())
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError> {
        (**self).lookup(key)
    }
}

impl<L: Lookup + ?Sized> Lookup for Box<L> {
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError> {
        (**self).lookup(key)
    }
}

/// Lookup backed by a closure, see [`lookup_fn`].
#[derive(Clone, Copy)]
pub struct FnLookup<F>(F);

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Result<Option<String>, NotUnicodeError> {
        Ok((self.0)(key))
    }
}

impl<F> std::fmt::Debug for FnLookup<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnLookup").finish_non_exhaustive()
    }
}

/// Use a closure as a lookup source.
///
/// ```rust
/// use envvar::{lookup_fn, Lookup};
///
/// let source = lookup_fn(|key| (key == "PORT").then(|| "8080".to_string()));
/// assert_eq!(source.lookup("PORT"), Ok(Some("8080".to_string())));
/// assert_eq!(source.lookup("HOST"), Ok(None));
/// ```
pub fn lookup_fn<F>(f: F) -> FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnLookup(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_lookup_found() {
        env::set_var("ENVVAR_TEST_LOOKUP", "value");
        assert_eq!(Env.lookup("ENVVAR_TEST_LOOKUP").unwrap().as_deref(), Some("value"));
        env::remove_var("ENVVAR_TEST_LOOKUP");
    }

    #[test]
    #[serial]
    fn test_env_lookup_empty_is_found() {
        env::set_var("ENVVAR_TEST_LOOKUP_EMPTY", "");
        assert_eq!(Env.lookup("ENVVAR_TEST_LOOKUP_EMPTY").unwrap().as_deref(), Some(""));
        env::remove_var("ENVVAR_TEST_LOOKUP_EMPTY");
    }

    #[test]
    #[serial]
    fn test_env_lookup_missing() {
        env::remove_var("ENVVAR_TEST_LOOKUP_MISSING");
        assert_eq!(Env.lookup("ENVVAR_TEST_LOOKUP_MISSING"), Ok(None));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_env_lookup_not_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"ab\xffcd");
        env::set_var("ENVVAR_TEST_LOOKUP_NOT_UNICODE", raw);
        let error = Env.lookup("ENVVAR_TEST_LOOKUP_NOT_UNICODE").unwrap_err();
        env::remove_var("ENVVAR_TEST_LOOKUP_NOT_UNICODE");

        assert_eq!(error.0.as_os_str(), raw);
        assert_eq!(error.to_string_lossy(), "ab\u{fffd}cd");
    }

    #[test]
    fn test_map_lookup() {
        let map = HashMap::from([("KEY".to_string(), "value".to_string())]);
        assert_eq!(map.lookup("KEY").unwrap().as_deref(), Some("value"));
        assert_eq!(map.lookup("OTHER"), Ok(None));

        let map: BTreeMap<_, _> = map.into_iter().collect();
        assert_eq!((&map).lookup("KEY").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_boxed_dyn_lookup() {
        let source: Box<dyn Lookup> = Box::new(lookup_fn(|key| Some(key.to_lowercase())));
        assert_eq!(source.lookup("ABC").unwrap().as_deref(), Some("abc"));
    }
}
