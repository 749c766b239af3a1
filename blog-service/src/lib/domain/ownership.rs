use thiserror::Error;

use crate::domain::user::models::UserId;

/// A persisted resource carrying an immutable owner reference.
///
/// Implemented by every aggregate whose mutation is restricted to its
/// creator (articles, comments).
pub trait Owned {
    /// The user that created the resource; set once at creation.
    fn owner(&self) -> UserId;
}

/// Outcome of a failed ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OwnershipError {
    #[error("Resource does not exist")]
    NotFound,

    #[error("Resource is owned by another user")]
    Forbidden,
}

/// Authorize a mutation of `resource` by `principal`.
///
/// Existence is checked before ownership: a missing resource is `NotFound`
/// no matter who asks, so the 403/404 distinction never leaks whether a
/// resource exists only to its owner.
///
/// # Arguments
/// * `resource` - The loaded resource, or None when the load found nothing
/// * `principal` - The authenticated user requesting the mutation
///
/// # Returns
/// The resource, for the mutation to proceed on
///
/// # Errors
/// * `NotFound` - Resource does not exist
/// * `Forbidden` - Resource exists but is owned by someone else
pub fn authorize_owner<T: Owned>(
    resource: Option<T>,
    principal: UserId,
) -> Result<T, OwnershipError> {
    let resource = resource.ok_or(OwnershipError::NotFound)?;

    if resource.owner() != principal {
        return Err(OwnershipError::Forbidden);
    }

    Ok(resource)
}
