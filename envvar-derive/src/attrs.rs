//! Attribute parsing for `#[envvar(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from the struct
//! and its fields during macro expansion.

use syn::{DeriveInput, Field, LitStr};

/// Parsed `#[envvar(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Key override, from `name = "..."` or `prefix = "..."`.
    ///
    /// For nested records this is the prefix of every key inside them.
    pub name: Option<String>,

    /// Literal used when the key is not set, from `default = "..."`.
    ///
    /// `Some(String::new())` still makes the field optional.
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract and validate `#[envvar(...)]` attributes from a struct field.
    ///
    /// Attributes other than `envvar` are left to other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("envvar") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..." or prefix = "..."
                if meta.path.is_ident("name") || meta.path.is_ident("prefix") {
                    if attrs.name.is_some() {
                        return Err(meta.error("duplicate `name`/`prefix` attribute"));
                    }
                    let value: LitStr = meta
                        .value()?
                        .parse()
                        .map_err(|e| syn::Error::new(e.span(), "expected a string literal"))?;
                    attrs.name = Some(value.value());
                    return Ok(());
                }

                // default = "..."
                if meta.path.is_ident("default") {
                    if attrs.default.is_some() {
                        return Err(meta.error("duplicate `default` attribute"));
                    }
                    let value: LitStr = meta.value()?.parse().map_err(|e| {
                        syn::Error::new(
                            e.span(),
                            "default must be a string literal, it is parsed like an environment value",
                        )
                    })?;
                    attrs.default = Some(value.value());
                    return Ok(());
                }

                Err(meta.error("unsupported envvar attribute, expected `name`, `prefix` or `default`"))
            })?;
        }

        Ok(attrs)
    }
}

/// How field identifiers become keys when no name is given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// Use the identifier exactly as declared.
    #[default]
    Verbatim,
    Uppercase,
    Lowercase,
}

impl RenameRule {
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Verbatim => ident.to_string(),
            Self::Uppercase => ident.to_uppercase(),
            Self::Lowercase => ident.to_lowercase(),
        }
    }
}

/// Parsed struct-level `#[envvar(...)]` attributes.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    pub rename_all: RenameRule,
}

impl ContainerAttrs {
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("envvar") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.rename_all = match value.value().as_str() {
                        "UPPERCASE" => RenameRule::Uppercase,
                        "lowercase" => RenameRule::Lowercase,
                        _ => {
                            return Err(syn::Error::new(
                                value.span(),
                                "expected `rename_all = \"UPPERCASE\"` or `rename_all = \"lowercase\"`",
                            ))
                        }
                    };
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level envvar attribute"))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[envvar(name = "CUSTOM_NAME")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("CUSTOM_NAME".to_string()));
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn test_parse_prefix_attribute() {
        let field: Field = parse_quote! {
            #[envvar(prefix = "DB_")]
            pub database: Database
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("DB_".to_string()));
    }

    #[test]
    fn test_parse_default_string() {
        let field: Field = parse_quote! {
            #[envvar(default = "8080")]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("8080".to_string()));
    }

    #[test]
    fn test_parse_default_empty_string() {
        let field: Field = parse_quote! {
            #[envvar(default = "")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some(String::new()));
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[envvar(name = "BAR", default = "biz")]
            pub foo: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("BAR".to_string()));
        assert_eq!(attrs.default, Some("biz".to_string()));
    }

    #[test]
    fn test_parse_split_attributes() {
        let field: Field = parse_quote! {
            #[envvar(name = "BAR")]
            #[envvar(default = "biz")]
            pub foo: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("BAR".to_string()));
        assert_eq!(attrs.default, Some("biz".to_string()));
    }

    #[test]
    fn test_other_attributes_are_ignored() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, None);
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn test_reject_non_string_default() {
        let field: Field = parse_quote! {
            #[envvar(default = 42)]
            pub port: u16
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("default must be a string literal"));
    }

    #[test]
    fn test_reject_unknown_attribute() {
        let field: Field = parse_quote! {
            #[envvar(from_file)]
            pub secret: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("unsupported envvar attribute"));
    }

    #[test]
    fn test_reject_name_and_prefix() {
        let field: Field = parse_quote! {
            #[envvar(name = "A", prefix = "B_")]
            pub nested: Inner
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_parse_rename_all() {
        let input: DeriveInput = parse_quote! {
            #[envvar(rename_all = "UPPERCASE")]
            struct Config {
                database_url: String,
            }
        };

        let attrs = ContainerAttrs::from_input(&input).unwrap();
        assert_eq!(attrs.rename_all, RenameRule::Uppercase);
        assert_eq!(attrs.rename_all.apply("database_url"), "DATABASE_URL");
    }

    #[test]
    fn test_rename_all_defaults_to_verbatim() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                database_url: String,
            }
        };

        let attrs = ContainerAttrs::from_input(&input).unwrap();
        assert_eq!(attrs.rename_all.apply("database_url"), "database_url");
    }

    #[test]
    fn test_reject_unknown_rename_rule() {
        let input: DeriveInput = parse_quote! {
            #[envvar(rename_all = "kebab-case")]
            struct Config {
                database_url: String,
            }
        };

        assert!(ContainerAttrs::from_input(&input).is_err());
    }
}
