use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// `"value".to_string()`
pub(crate) fn string(value: &str) -> TokenStream {
    quote::quote!(#value.to_string())
}
