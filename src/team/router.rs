//! Request router: short selection tokens -> role sets.
//!
//! Pure lookup table, no state. Unrecognized tokens fall back to the
//! configured default selection instead of raising an error, so a typo picks
//! the default role rather than failing the request.

use super::{Role, RoleSelection};

/// Map a recognized selection token to its role set.
///
/// Tokens are case-normalized and trimmed. Returns `None` for anything that
/// is not a recognized token, which the REPL uses to tell selection switches
/// apart from problem text.
pub fn lookup(token: &str) -> Option<RoleSelection> {
    let token = token.trim().to_ascii_lowercase();
    let roles: &[Role] = match token.as_str() {
        "ba" => &[Role::BusinessAnalyst],
        "it" => &[Role::ItSpecialist],
        "designer" => &[Role::Designer],
        "dev" => &[Role::Developer],
        "coder" => &[Role::Coder],
        "test" => &[Role::Tester],
        "both" => &[Role::ItSpecialist, Role::Coder],
        "all" => &Role::ALL,
        _ => return None,
    };
    Some(roles.iter().copied().collect())
}

/// Resolve a token to a role set, falling back to `default` when the token
/// is unrecognized. Callers cannot distinguish an explicit default from a
/// typo fallback.
pub fn resolve(token: &str, default: &RoleSelection) -> RoleSelection {
    lookup(token).unwrap_or_else(|| default.clone())
}
