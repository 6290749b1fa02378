use drawboard_core::authorization::Identity;
use drawboard_core::roles::UserRole;

use crate::auth::jwt::{validate_token, JwtConfig};

/// Resolve an `Authorization` header value to the caller's identity.
///
/// Anything other than a valid `Bearer` token yields `None`; this never
/// fails. An unrecognised role claim falls back to [`UserRole::User`].
pub fn resolve(authorization: Option<&str>, config: &JwtConfig) -> Option<Identity> {
    let token = authorization?.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }

    let claims = match validate_token(token, config) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid access token");
            return None;
        }
    };

    let role = claims.role.parse().unwrap_or_else(|_| {
        tracing::debug!(user_id = claims.sub, role = %claims.role, "Unknown role claim");
        UserRole::User
    });
    Some(Identity::new(claims.sub, role))
}
