pub mod access;

pub use access::{jwt_optional, jwt_required, optional_jwt, require_jwt};
