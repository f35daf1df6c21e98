use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{
    Attribute, Data, DataStruct, DeriveInput, Fields, GenericArgument, PathArguments, Type,
    parse_macro_input,
};

/// Derives `indexable::Indexer`, mapping index `i` to the `i`-th field.
///
/// Fields marked `#[indexer(skip)]` are not counted. Every other field must
/// have the same type. When that type is `Option<X>` the value type is `X`:
/// reads return the field as is and writes store `Some(value)`. Otherwise
/// reads return `Some(field.clone())` and writes assign.
///
/// `#[indexer(read_only)]` on the struct omits the setter, so writes land in
/// the wrapper's raw property store instead.
#[proc_macro_derive(Indexer, attributes(indexer))]
pub fn derive_indexer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Indexer can only be derived for structs with named fields",
            ));
        }
    };

    let read_only = has_flag(&input.attrs, "read_only")?;

    let mut mapped = Vec::new();
    for field in fields {
        if !has_flag(&field.attrs, "skip")? {
            mapped.push(field);
        }
    }

    let Some(first) = mapped.first() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Indexer needs at least one field that is not skipped",
        ));
    };

    let first_ty = first.ty.to_token_stream().to_string();
    for field in &mapped[1..] {
        if field.ty.to_token_stream().to_string() != first_ty {
            let first_name = first.ident.to_token_stream();
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!("Indexer fields must all have the same type as `{first_name}`"),
            ));
        }
    }

    let (value_type, optional) = match option_inner(&first.ty) {
        Some(inner) => (inner, true),
        None => (&first.ty, false),
    };

    let indices = 0..mapped.len();
    let idents: Vec<_> = mapped.iter().map(|field| &field.ident).collect();

    let reads = idents.iter().zip(indices.clone()).map(|(field, index)| {
        if optional {
            quote! { #index => ::core::clone::Clone::clone(&target.#field), }
        } else {
            quote! {
                #index => ::core::option::Option::Some(::core::clone::Clone::clone(&target.#field)),
            }
        }
    });

    let get = quote! {
        let get: ::indexable::Getter<Self> = |target, index| {
            ::core::result::Result::Ok(match index {
                #(#reads)*
                _ => ::core::option::Option::None,
            })
        };
    };

    let expanded = if read_only {
        quote! {
            impl #impl_generics ::indexable::Indexer for #struct_name #ty_generics #where_clause {
                type Value = #value_type;
                type Error = ::core::convert::Infallible;

                fn indexer(&self) -> ::core::result::Result<::indexable::Accessors<Self>, Self::Error> {
                    #get
                    ::core::result::Result::Ok(::indexable::Accessors::getter(get))
                }
            }
        }
    } else {
        let writes = idents.iter().zip(indices).map(|(field, index)| {
            if optional {
                quote! { #index => target.#field = ::core::option::Option::Some(value), }
            } else {
                quote! { #index => target.#field = value, }
            }
        });

        quote! {
            impl #impl_generics ::indexable::Indexer for #struct_name #ty_generics #where_clause {
                type Value = #value_type;
                type Error = ::core::convert::Infallible;

                fn indexer(&self) -> ::core::result::Result<::indexable::Accessors<Self>, Self::Error> {
                    #get
                    let set: ::indexable::Setter<Self> = |target, index, value| {
                        match index {
                            #(#writes)*
                            _ => {}
                        }
                        ::core::result::Result::Ok(())
                    };
                    ::core::result::Result::Ok(::indexable::Accessors::new(get, set))
                }
            }
        }
    };

    Ok(expanded)
}

/// Returns `X` when `ty` is written as `Option<X>` (optionally path-qualified).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Looks for `#[indexer(flag)]`. `flag` is the only attribute accepted at
/// this site: `read_only` on the struct, `skip` on fields.
fn has_flag(attrs: &[Attribute], flag: &str) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("indexer")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(flag) {
                found = true;
                Ok(())
            } else {
                Err(meta.error(format!("unsupported indexer attribute here, expected `{flag}`")))
            }
        })?;
    }
    Ok(found)
}
