use strum::{EnumIter, EnumString};

use crate::{id::Id, password::Password};

/// What an operation requires from its actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Submit new POIs, itineraries and contents for review.
    Propose,
    /// Proposals skip the review queue and are published directly.
    SelfPublish,
    /// Approve or reject staged proposals.
    Moderate,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Tourist               = 0,
    Contributor           = 1,
    AuthorizedContributor = 2,
    Curator               = 3,
}

impl Role {
    /// Capability check; operations name the capability they require
    /// instead of comparing roles.
    pub fn grants(self, capability: Capability) -> bool {
        match capability {
            Capability::Propose => matches!(
                self,
                Role::Contributor | Role::AuthorizedContributor | Role::Curator
            ),
            Capability::SelfPublish => {
                matches!(self, Role::AuthorizedContributor | Role::Curator)
            }
            Capability::Moderate => matches!(self, Role::Curator),
        }
    }
}

impl Default for Role {
    fn default() -> Role {
        Role::Tourist
    }
}

/// A registered member of a municipality.
///
/// Authored elements are not stored here; they are looked up from the
/// owning collections by author id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub password: Password,
    pub municipality: Id,
    pub role: Role,
}
