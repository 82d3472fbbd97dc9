//! Account role constants and derivation rules.
//!
//! A profile's role is derived from its account's superuser flag. The rules
//! run synchronously at the two call sites that mutate account state
//! (registration and admin promotion/demotion); there is no implicit
//! save-hook dispatch.

/// Role held by superuser accounts.
pub const ROLE_ADMIN: &str = "admin";

/// Default role for everyone else.
pub const ROLE_NORMAL: &str = "normal";

/// Role for the profile paired with a freshly registered account.
///
/// Always `normal`: registration payloads carry no superuser field, and any
/// superuser state is ignored at creation time. Promotion happens only
/// through a later account update.
pub fn role_for_new_account() -> &'static str {
    ROLE_NORMAL
}

/// Derive the profile role after an account update.
///
/// Superuser accounts become `admin`. For non-superusers an empty role is
/// defaulted to `normal`, while an already-set role is kept unchanged --
/// clearing the superuser flag never downgrades an existing role.
pub fn role_after_account_update<'a>(is_superuser: bool, current_role: &'a str) -> &'a str {
    if is_superuser {
        ROLE_ADMIN
    } else if current_role.is_empty() {
        ROLE_NORMAL
    } else {
        current_role
    }
}
