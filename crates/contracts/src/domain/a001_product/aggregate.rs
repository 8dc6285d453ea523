use serde::{Deserialize, Serialize};

/// Catalog entry for a medication, owned by the `products` REST resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier assigned by the collaborator.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Internal product code.
    pub code: Option<String>,

    /// Catalog category (e.g. "Analgesics").
    pub category: Option<String>,

    /// Whether the product is currently sold. Absent in older payloads.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Product id cannot be empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("Product name cannot be empty".into());
        }
        Ok(())
    }
}
