use crate::errors::AppError;
use crate::ids::IdGenerator;
use crate::store::{self, KeyValueStore, keys};
use crate::validate::{ensure, validate_required};

use super::types::{ID_PREFIX, NewUser, Role, User};

pub fn find_all(store: &impl KeyValueStore) -> Vec<User> {
    store::read_collection(store, keys::USERS)
}

/// Create an account. Emails are unique across all roles.
pub fn register(
    store: &mut impl KeyValueStore,
    ids: &mut impl IdGenerator,
    new: NewUser,
) -> Result<User, AppError> {
    ensure([
        validate_required(&new.email, "Email"),
        validate_required(&new.password, "Password"),
    ])?;

    let taken = store::read_records(store, keys::USERS)
        .iter()
        .any(|u| store::field(u, "email") == Some(new.email.as_str()));
    if taken {
        log::debug!("Rejected sign-up for existing email {}", new.email);
        return Err(AppError::DuplicateEmail);
    }

    let user = User {
        id: ids.next_id(ID_PREFIX),
        name: new.name,
        email: new.email,
        role: new.role,
        password: new.password,
        extra: new.extra,
    };
    store::append(store, keys::USERS, &user)?;

    log::info!("Registered {} account {}", user.role, user.email);
    Ok(user)
}

/// Look up the account for (email, role) and check its password.
pub fn login(
    store: &impl KeyValueStore,
    email: &str,
    password: &str,
    role: Role,
) -> Result<User, AppError> {
    let user = find_all(store)
        .into_iter()
        .find(|u| u.email == email && u.role == role)
        .ok_or(AppError::AccountNotFound)?;

    if user.password != password {
        log::debug!("Wrong password for {role} account {email}");
        return Err(AppError::WrongPassword);
    }

    Ok(user)
}
