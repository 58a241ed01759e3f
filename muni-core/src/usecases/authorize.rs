use super::prelude::*;

pub fn authorize_capability(user: &User, capability: Capability) -> Result<()> {
    if !user.role.grants(capability) {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Resolves the acting user from the municipality's registered users
/// and checks the required capability. Registration in the catalog is
/// what ties the actor to this municipality.
pub fn authorize_actor(
    catalog: &MunicipalCatalog,
    actor: &Id,
    capability: Capability,
) -> Result<User> {
    let user = catalog.user(actor).ok_or(Error::UserDoesNotExist)?;
    authorize_capability(&user, capability)?;
    Ok(user)
}
