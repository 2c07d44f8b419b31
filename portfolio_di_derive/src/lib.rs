use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Field, Fields};

/// Derive `portfolio_di::Build` for a struct.
///
/// Every field is built from the provider, except fields marked with
/// `#[state]` which are initialized using `Default`. The built value is
/// stored in the provider's cache and reused for subsequent requests.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = input.ident;

    let generics = input
        .generics
        .type_params()
        .map(|x| &x.ident)
        .collect::<Vec<_>>();

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Build can only be derived for structs"); }.into();
    };

    let bounds = data
        .fields
        .iter()
        .filter(|x| !is_state(x))
        .map(|Field { ty, .. }| quote! { #ty: ::portfolio_di::Build<__Provider> })
        .collect::<Vec<_>>();

    let field_expr = |field: &Field| {
        if is_state(field) {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { ::portfolio_di::Build::build(provider) }
        }
    };

    let build_expr = match &data.fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|f| {
                let ident = &f.ident;
                let expr = field_expr(f);
                quote! { #ident: #expr }
            });
            quote! { Self { #(#fields),* } }
        }
        Fields::Unnamed(fields) => {
            let fields = fields.unnamed.iter().map(field_expr);
            quote! { Self( #(#fields),* ) }
        }
        Fields::Unit => quote! { Self },
    };

    quote! {
        impl<__Provider, #(#generics),*> ::portfolio_di::Build<__Provider> for #ident<#(#generics),*>
        where
            Self: ::core::clone::Clone + 'static,
            __Provider: ::portfolio_di::Provider,
            #(#bounds),*
        {
            fn build(provider: &mut __Provider) -> Self {
                if let ::core::option::Option::Some(cached) =
                    ::portfolio_di::Provider::cache(provider).get::<Self>()
                {
                    return ::core::clone::Clone::clone(cached);
                }

                let built = #build_expr;
                ::portfolio_di::Provider::cache(provider).insert(::core::clone::Clone::clone(&built));
                built
            }
        }
    }
    .into()
}

fn is_state(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|x| x.path().get_ident().is_some_and(|x| x == "state"))
}
