use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub role: Role,
}

/// Registers a user with the municipality. The clear-text password is
/// hashed here and never stored.
pub fn register_new_user(catalog: &MunicipalCatalog, new_user: NewUser) -> Result<Id> {
    let NewUser {
        name,
        password,
        role,
    } = new_user;
    validate::element_name(&name)?;
    if catalog.user_by_name(&name).is_some() {
        return Err(Error::UserExists);
    }
    let password = password.parse::<Password>()?;
    let user = User {
        id: Id::new(),
        name,
        password,
        municipality: catalog.id().clone(),
        role,
    };
    log::debug!(
        "Registering user {} ({:?}) with {}",
        user.name,
        user.role,
        catalog.municipality().name
    );
    Ok(catalog.register_user(user)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures::*, *};

    #[test]
    fn register_and_look_up() {
        let fixture = fixture();
        let id = register_new_user(
            &fixture.catalog,
            NewUser {
                name: "marco".into(),
                password: "secret".into(),
                role: Role::Contributor,
            },
        )
        .unwrap();
        let user = fixture.catalog.user(&id).unwrap();
        assert_eq!(user.role, Role::Contributor);
        assert!(user.password.verify("secret"));
        assert_ne!(user.password.as_ref(), "secret");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let fixture = fixture();
        let new_user = || NewUser {
            name: "marco".into(),
            password: "secret".into(),
            role: Role::Contributor,
        };
        register_new_user(&fixture.catalog, new_user()).unwrap();
        assert!(matches!(
            register_new_user(&fixture.catalog, new_user()),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn short_password_is_rejected() {
        let fixture = fixture();
        let new_user = NewUser {
            name: "marco".into(),
            password: "hello".into(),
            role: Role::Contributor,
        };
        assert!(matches!(
            register_new_user(&fixture.catalog, new_user),
            Err(Error::Password)
        ));
        assert!(fixture.catalog.user_by_name("marco").is_none());
    }
}
