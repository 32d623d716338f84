#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// `Missing <field>`: a mandatory key is absent from a create body.
    pub fn missing(field: &str) -> Self {
        CoreError::BadRequest(format!("Missing {field}"))
    }

    /// `Invalid <field>`: a known key carries a value of the wrong JSON type.
    pub fn invalid(field: &str) -> Self {
        CoreError::BadRequest(format!("Invalid {field}"))
    }
}
