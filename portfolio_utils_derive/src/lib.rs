use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Instrument a function with a [`tracing`](https://docs.rs/tracing) span and
/// emit a `trace` event on every call.
///
/// The arguments are forwarded to `#[tracing::instrument(...)]`. The return
/// value is always recorded at `trace` level.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let args = if meta.is_empty() {
        quote! { ret(level = "trace") }
    } else {
        quote! { ret(level = "trace"), #meta }
    };

    quote! {
        #[::tracing::instrument(#args)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
