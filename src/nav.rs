use crate::models::user::Role;

/// Landing page for a signed-in user of `role`.
pub fn destination_for(role: Role) -> &'static str {
    match role {
        Role::Student => "student.html",
        Role::Faculty => "faculty.html",
        Role::Admin => "admin.html",
    }
}

/// Resolve a raw role string (as posted by the login form) to its landing
/// page. Unrecognized roles navigate nowhere.
pub fn navigate_for_role(role: &str) -> Option<&'static str> {
    match role.parse::<Role>() {
        Ok(role) => Some(destination_for(role)),
        Err(e) => {
            log::warn!("No landing page: {e}");
            None
        }
    }
}
