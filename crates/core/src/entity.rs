//! Registry of the entity kinds exposed by the API.
//!
//! The stats endpoint and the storage backends iterate [`EntityKind::ALL`]
//! instead of discovering types at runtime.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl EntityKind {
    /// Every kind, in the order the stats endpoint reports them.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Amenity,
        EntityKind::City,
        EntityKind::Place,
        EntityKind::Review,
        EntityKind::State,
        EntityKind::User,
    ];

    /// Public type name, used as the stats key and in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Amenity => "Amenity",
            EntityKind::City => "City",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
            EntityKind::State => "State",
            EntityKind::User => "User",
        }
    }

    /// Name of the foreign-key attribute other entities use to point here.
    pub const fn foreign_key(self) -> &'static str {
        match self {
            EntityKind::Amenity => "amenity_id",
            EntityKind::City => "city_id",
            EntityKind::Place => "place_id",
            EntityKind::Review => "review_id",
            EntityKind::State => "state_id",
            EntityKind::User => "user_id",
        }
    }

    /// Kinds a record of this kind belongs to. Deleting an owner deletes
    /// the records that reference it.
    pub const fn owners(self) -> &'static [EntityKind] {
        match self {
            EntityKind::City => &[EntityKind::State],
            EntityKind::Place => &[EntityKind::City, EntityKind::User],
            EntityKind::Review => &[EntityKind::Place, EntityKind::User],
            EntityKind::Amenity | EntityKind::State | EntityKind::User => &[],
        }
    }

    /// Kinds owned by this kind (inverse of [`EntityKind::owners`]).
    pub fn children(self) -> Vec<EntityKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.owners().contains(&self))
            .collect()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
