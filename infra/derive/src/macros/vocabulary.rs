use fxhash::FxHashMap;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitBool, LitStr, Variant};

struct FlagVariant<'a> {
    ident: &'a Ident,
    name: LitStr,
    default: bool,
    allow_unrecognized: bool,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let enum_name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(input, "FlagVocabulary can only be derived for enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FlagVocabulary does not support generic enums",
        ));
    }

    let flags = data.variants.iter().map(parse_variant).collect::<syn::Result<Vec<_>>>()?;
    if flags.is_empty() {
        return Err(syn::Error::new_spanned(input, "a flag vocabulary needs at least one variant"));
    }

    let mut seen: FxHashMap<String, &Ident> = FxHashMap::default();
    for flag in &flags {
        if let Some(previous) = seen.insert(flag.name.value(), flag.ident) {
            return Err(syn::Error::new_spanned(
                &flag.name,
                format!("flag name `{}` is already used by `{previous}`", flag.name.value()),
            ));
        }
    }

    let mut strictness = flags.iter().filter(|f| f.allow_unrecognized);
    let allow_unrecognized = match (strictness.next(), strictness.next()) {
        (None, _) => quote! { ::core::option::Option::None },
        (Some(flag), None) => {
            let ident = flag.ident;
            quote! { ::core::option::Option::Some(Self::#ident) }
        },
        (Some(_), Some(second)) => {
            return Err(syn::Error::new_spanned(
                second.ident,
                "only one variant may be marked `#[flag(allow_unrecognized)]`",
            ));
        },
    };

    let idents: Vec<_> = flags.iter().map(|f| f.ident).collect();
    let names: Vec<_> = flags.iter().map(|f| &f.name).collect();
    let defaults: Vec<_> = flags.iter().map(|f| f.default).collect();

    Ok(quote! {
        #[automatically_derived]
        impl ::flagpole_flags::Flag for #enum_name {
            const VOCABULARY: &'static [Self] = &[#(Self::#idents),*];
            const ALLOW_UNRECOGNIZED: ::core::option::Option<Self> = #allow_unrecognized;

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            #[inline]
            fn default_value(self) -> bool {
                match self {
                    #(Self::#idents => #defaults,)*
                }
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::flagpole_flags::Flag::name(*self))
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #enum_name {
            type Err = ::flagpole_flags::FlagError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    #(#names => ::core::result::Result::Ok(Self::#idents),)*
                    _ => ::core::result::Result::Err(::flagpole_flags::FlagError::UnknownName {
                        name: s.to_owned(),
                        context: ::core::option::Option::None,
                    }),
                }
            }
        }
    })
}

fn parse_variant(variant: &Variant) -> syn::Result<FlagVariant<'_>> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(variant, "flag variants must not carry fields"));
    }

    let mut flag = FlagVariant {
        ident: &variant.ident,
        name: LitStr::new(&variant.ident.to_string(), variant.ident.span()),
        default: false,
        allow_unrecognized: false,
    };

    for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("flag")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                flag.default = meta.value()?.parse::<LitBool>()?.value;
                Ok(())
            } else if meta.path.is_ident("name") {
                let name: LitStr = meta.value()?.parse()?;
                if name.value().trim().is_empty() {
                    return Err(meta.error("flag name cannot be empty"));
                }
                flag.name = name;
                Ok(())
            } else if meta.path.is_ident("allow_unrecognized") {
                flag.allow_unrecognized = true;
                Ok(())
            } else {
                Err(meta.error("expected `default = <bool>`, `name = \"...\"` or `allow_unrecognized`"))
            }
        })?;
    }

    Ok(flag)
}
