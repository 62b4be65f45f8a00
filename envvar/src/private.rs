//! Support code for `#[derive(Envvar)]`. Not public API.
//!
//! The derive picks a field's slot with auto-ref method resolution:
//! `(&*field).envvar_kind()` finds [`ViaUnmarshal`] on `T` before it tries
//! [`ViaField`] on `&T`, so a custom parser wins over any other impl.
//! [`ViaField`] itself is unbounded; the `Field` bound sits on
//! [`FieldKind::slot`] so that unbindable types report through `Field`.

use crate::record::{Field, Slot};
use crate::unmarshal::Unmarshal;

pub struct UnmarshalKind;

impl UnmarshalKind {
    #[inline]
    pub fn slot<T: Unmarshal>(self, field: &mut T) -> Slot<'_> {
        Slot::Custom(field)
    }
}

pub struct FieldKind;

impl FieldKind {
    #[inline]
    pub fn slot<T: Field + ?Sized>(self, field: &mut T) -> Slot<'_> {
        field.slot()
    }
}

pub trait ViaUnmarshal {
    #[inline]
    fn envvar_kind(&self) -> UnmarshalKind {
        UnmarshalKind
    }
}

impl<T: Unmarshal + ?Sized> ViaUnmarshal for T {}

pub trait ViaField {
    #[inline]
    fn envvar_kind(&self) -> FieldKind {
        FieldKind
    }
}

impl<T: ?Sized> ViaField for &T {}
