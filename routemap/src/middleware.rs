//! Reading authorization details out of a route's middleware stack.

/// Marker preceding the comma-separated role list in a role middleware tag.
pub const ROLE_MARKER: &str = "RoleMiddleware:";

/// Substring identifying an authentication middleware.
pub const AUTH_MARKER: &str = "Authenticate";

/// Collects the roles required by every role middleware in the stack.
///
/// For a tag like `App\Http\Middleware\RoleMiddleware:admin,faculty` the
/// text after the marker is split on `,`. Roles keep tag order.
pub fn extract_roles<S: AsRef<str>>(middleware: &[S]) -> Vec<String> {
    middleware
        .iter()
        .filter_map(|tag| tag.as_ref().split(ROLE_MARKER).nth(1))
        .flat_map(|roles| roles.split(','))
        .map(str::to_string)
        .collect()
}

/// Returns true if any middleware tag mentions `Authenticate`.
pub fn is_auth_required<S: AsRef<str>>(middleware: &[S]) -> bool {
    middleware.iter().any(|tag| tag.as_ref().contains(AUTH_MARKER))
}
