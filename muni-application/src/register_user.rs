use super::*;

pub fn register_user<R: UserRepo>(
    catalog: &MunicipalCatalog,
    repo: &R,
    new_user: usecases::NewUser,
) -> Result<Id> {
    let id = usecases::register_new_user(catalog, new_user).map_err(|err| {
        warn!("Failed to register user: {err}");
        err
    })?;
    let user = catalog
        .user(&id)
        .ok_or_else(|| AppError::Internal(format!("User {id} vanished after registration")))?;
    repo.create_user(&user)?;
    Ok(id)
}
