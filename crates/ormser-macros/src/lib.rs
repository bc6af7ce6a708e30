extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Model,
    attributes(key, column, default, table, serializer, has_many, has_one, belongs_to)
)]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match ormser_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
