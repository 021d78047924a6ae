mod errors;
mod internal;

pub use errors::IdentityError;
pub use internal::IdentityProvider;
