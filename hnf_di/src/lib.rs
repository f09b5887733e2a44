//! Minimal compile-time dependency injection.
//!
//! Services are plain structs that are generic over their dependencies.
//! `#[derive(Build)]` lets a [`Provider`] construct them recursively, and the
//! [`provider!`] macro declares a provider holding the leaf values (configs,
//! connections) everything else is built from. Every built value is cached
//! per provider, so a service shared by multiple dependents is constructed
//! only once.

extern crate self as hnf_di;

pub use hnf_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
