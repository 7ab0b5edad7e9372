//! JSON Web Key Set adapter for the signing key cache.

mod http_source;

pub use http_source::JwksHttpSource;
