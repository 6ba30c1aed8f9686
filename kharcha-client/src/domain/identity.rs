use serde::{Deserialize, Serialize};

/// The signed-in user, as returned by the login endpoint. Opaque to the
/// client beyond display use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub mobile: String,
}

impl Identity {
    /// First word of the full name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
