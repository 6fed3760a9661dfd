extern crate proc_macro;

use proc_macro::TokenStream;

/// Derive a `const fn` builder for a struct with named fields.
///
/// ```ignore
/// #[derive(ConstBuilder)]
/// pub struct Device<'a> {
///     pub id: &'a str,
///     pub name: &'a str,
///     pub model: Option<&'a str>,
/// }
///
/// const DEVICE: Device = Device::builder().id("vacuum_1").name("Vacuum").build();
/// ```
///
/// Generated items:
/// - `DeviceBuilder<'a>` holding every field as `Option`
/// - `DeviceBuilder::new()` and one const setter per field
/// - `DeviceBuilder::build()`; `Option` fields default to `None`, any other
///   missing field panics (a compile error in `const` items)
/// - `Device::builder()`
#[proc_macro_derive(ConstBuilder)]
pub fn derive_const_builder(input: TokenStream) -> TokenStream {
    const_builder::derive(input.into()).into()
}

mod const_builder;
