/*!
 * Request-scoped JWT context
 *
 * Responsibility:
 * - The type handlers see after the gate has verified a token
 * - axum glue (FromRequestParts) stays in core, the type itself in types
 *
 * Public API:
 * - JwtCtx
 */

mod core;
mod types;

pub use types::JwtCtx;
