//! The runtime-typed `Variant` and its type-keyed matcher.

use proc_macro2::TokenStream;
use quote::quote;

pub fn emit_dynamic() -> TokenStream {
    quote! {
        /// A value of any `'static` type, tagged with that type's identity.
        ///
        /// The value and its tag are only ever set together, by [`Variant::make`].
        pub struct Variant {
            value: Box<dyn Any>,
            type_id: TypeId,
            type_name: &'static str,
        }

        impl Variant {
            pub fn make<T: Any>(value: T) -> Self {
                Variant {
                    value: Box::new(value),
                    type_id: TypeId::of::<T>(),
                    type_name: ::core::any::type_name::<T>(),
                }
            }

            /// Identity of the stored value's type.
            pub fn type_id(&self) -> TypeId {
                self.type_id
            }

            pub fn type_name(&self) -> &'static str {
                self.type_name
            }

            pub fn is_a<T: Any>(&self) -> bool {
                self.type_id == TypeId::of::<T>()
            }

            /// The stored value, or `None` when it is not a `T`.
            pub fn get<T: Any>(&self) -> Option<&T> {
                if self.is_a::<T>() {
                    self.value.downcast_ref::<T>()
                } else {
                    None
                }
            }

            pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
                if self.is_a::<T>() {
                    self.value.downcast_mut::<T>()
                } else {
                    None
                }
            }

            /// Take the stored value out, handing the container back on a type mismatch.
            pub fn into_inner<T: Any>(self) -> Result<T, Self> {
                if !self.is_a::<T>() {
                    return Err(self);
                }
                let Variant { value, type_id, type_name } = self;
                match value.downcast::<T>() {
                    Ok(value) => Ok(*value),
                    Err(value) => Err(Variant { value, type_id, type_name }),
                }
            }

            pub fn if_is<'a, T: Any, Ret>(
                &'a self,
                callback: impl FnOnce(&T) -> Ret + 'a,
            ) -> VariantMatcher<'a, Ret> {
                VariantMatcher::new(self).if_is::<T>(callback)
            }
        }

        impl ::core::fmt::Debug for Variant {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct("Variant")
                    .field("type_name", &self.type_name)
                    .finish_non_exhaustive()
            }
        }

        /// Handlers keyed by type. A value whose type has no handler matches nothing.
        #[must_use = "a matcher does nothing until it is invoked"]
        pub struct VariantMatcher<'a, Ret> {
            variant: &'a Variant,
            callbacks: HashMap<TypeId, Box<dyn FnOnce(&(dyn Any + 'static)) -> Option<Ret> + 'a>>,
        }

        impl<'a, Ret> VariantMatcher<'a, Ret> {
            pub fn new(variant: &'a Variant) -> Self {
                VariantMatcher {
                    variant,
                    callbacks: HashMap::new(),
                }
            }

            /// Register the handler for `T`, replacing any earlier one.
            pub fn if_is<T: Any>(mut self, callback: impl FnOnce(&T) -> Ret + 'a) -> Self {
                self.callbacks.insert(
                    TypeId::of::<T>(),
                    Box::new(move |value: &(dyn Any + 'static)| value.downcast_ref::<T>().map(callback)),
                );
                self
            }

            /// Run the handler registered for the stored type, if there is one.
            pub fn invoke(mut self) -> Option<Ret> {
                let variant = self.variant;
                let callback = self.callbacks.remove(&variant.type_id)?;
                callback(&*variant.value)
            }
        }
    }
}
