//! Derive macro implementation for envvar

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{ContainerAttrs, FieldAttrs};

/// `Envvar` derive macro
///
/// Implements `envvar::Record` (the field table the binder walks) and
/// `envvar::Field` (so the struct can be nested in another record).
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[envvar(rename_all = "UPPERCASE")]`: derive keys from upper-cased
///   field names (`"lowercase"` also accepted)
///
/// **Field-level**:
/// - `#[envvar(name = "CUSTOM_NAME")]`: custom key; on a nested struct, the
///   prefix of every key inside it
/// - `#[envvar(prefix = "PREFIX_")]`: same as `name`
/// - `#[envvar(default = "value")]`: literal used when the key is not set
///
/// # Example
///
/// See the `envvar` crate documentation for usage examples.
#[proc_macro_derive(Envvar, attributes(envvar))]
pub fn derive_envvar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Envvar cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Envvar only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Envvar only supports structs",
            ));
        }
    };

    let container = ContainerAttrs::from_input(input)?;

    let field_visits = fields
        .iter()
        .map(|field| {
            let Some(field_name) = field.ident.as_ref() else {
                return Err(syn::Error::new_spanned(field, "expected a named field"));
            };
            let attrs = FieldAttrs::from_field(field)?;

            let ident = field_name.unraw().to_string();
            let key_ident = container.rename_all.apply(&ident);
            let name = match attrs.name {
                Some(name) => quote!(::core::option::Option::Some(#name)),
                None => quote!(::core::option::Option::None),
            };
            let default = match attrs.default {
                Some(default) => quote!(::core::option::Option::Some(#default)),
                None => quote!(::core::option::Option::None),
            };

            Ok(quote! {
                {
                    let __field = &mut self.#field_name;
                    walker.visit(
                        &::envvar::FieldDescriptor {
                            ident: #ident,
                            key_ident: #key_ident,
                            name: #name,
                            default: #default,
                        },
                        (&*__field).envvar_kind().slot(__field),
                    );
                }
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #[automatically_derived]
        impl ::envvar::Record for #struct_name {
            #[allow(unused_variables)]
            fn bind_fields(&mut self, walker: &mut ::envvar::Walker<'_>) {
                #[allow(unused_imports)]
                use ::envvar::__private::{ViaField as _, ViaUnmarshal as _};

                #(#field_visits)*
            }
        }

        #[automatically_derived]
        impl ::envvar::Field for #struct_name {
            fn slot(&mut self) -> ::envvar::Slot<'_> {
                ::envvar::Slot::Nested(self)
            }
        }
    })
}
