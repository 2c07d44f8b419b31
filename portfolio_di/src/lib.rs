//! Minimal compile time dependency injection.
//!
//! Services declare their dependencies as (generic) fields and derive
//! [`Build`]. A provider created with [`provider!`] owns the leaf values
//! (connections, configs) and builds everything else on demand. Every built
//! value is cached per provider, so each service type exists only once.

extern crate self as portfolio_di;

pub use portfolio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of the values that have already been built by this provider.
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
