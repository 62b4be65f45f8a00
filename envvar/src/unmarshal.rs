//! Custom parsers

use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;

/// A type that parses itself from a raw value.
///
/// Implement this for field types the built-in conversions do not cover, or
/// to override them for a newtype. When a field type implements both
/// `Unmarshal` and [`Field`](crate::Field) (a derived record, say), the
/// parser wins and the field is treated as a single value.
///
/// ```rust
/// use envvar::Unmarshal;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Hosts(Vec<String>);
///
/// impl Unmarshal for Hosts {
///     fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()> {
///         self.0 = text.split(',').map(str::to_owned).collect();
///         Ok(())
///     }
/// }
///
/// let mut hosts = Hosts::default();
/// hosts.unmarshal_text("a,b").unwrap();
/// assert_eq!(hosts, Hosts(vec!["a".into(), "b".into()]));
/// ```
pub trait Unmarshal {
    fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()>;
}

impl<T: Unmarshal + ?Sized> Unmarshal for Box<T> {
    fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()> {
        (**self).unmarshal_text(text)
    }
}

/// RFC 3339, e.g. `2017-10-31T14:18:00Z`.
impl Unmarshal for DateTime<FixedOffset> {
    fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()> {
        *self = DateTime::parse_from_rfc3339(text)?;
        Ok(())
    }
}

/// RFC 3339, converted to UTC.
impl Unmarshal for DateTime<Utc> {
    fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()> {
        *self = DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc);
        Ok(())
    }
}

/// A field whose value is JSON, e.g. `["a","b"]` for a `Json<Vec<String>>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: DeserializeOwned> Unmarshal for Json<T> {
    fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.0 = serde_json::from_str(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_datetime_utc() {
        let mut at = DateTime::<Utc>::default();
        at.unmarshal_text("2017-10-31T14:18:00Z").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2017, 10, 31, 14, 18, 0).unwrap());

        at.unmarshal_text("2017-10-31T16:18:00+02:00").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2017, 10, 31, 14, 18, 0).unwrap());

        assert!(at.unmarshal_text("yesterday").is_err());
    }

    #[test]
    fn test_datetime_fixed_offset_keeps_offset() {
        let mut at = DateTime::<FixedOffset>::default();
        at.unmarshal_text("1992-09-29T00:00:00+09:00").unwrap();
        assert_eq!(at.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_json() {
        let mut tags: Json<Vec<String>> = Json::default();
        tags.unmarshal_text(r#"["prod","api"]"#).unwrap();
        assert_eq!(*tags, vec!["prod".to_string(), "api".to_string()]);

        assert!(tags.unmarshal_text("prod,api").is_err());
    }

    #[test]
    fn test_boxed_parser_forwards() {
        let mut boxed: Box<Json<u32>> = Box::default();
        boxed.unmarshal_text("42").unwrap();
        assert_eq!(boxed.0, 42);
    }
}
