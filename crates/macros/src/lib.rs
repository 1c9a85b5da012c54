use proc_macro::TokenStream;

mod entry;
mod error;
mod into_tokens;
mod parsing;
mod token_stream;

/// Turn a `fn main(input: IStr) -> Result<T>` into the entry point of a
/// puzzle binary.
///
/// The annotated function is kept as-is and called from a generated `main`
/// which parses command line options, loads the input file and either runs
/// the solution once or benchmarks it.
///
/// Arguments:
/// * `input = "dNN.txt"` (required) names the file under `inputs/`.
/// * `expect = <expr>` (optional) is the answer the solution must produce.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
