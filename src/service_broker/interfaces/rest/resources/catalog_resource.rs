use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogResource {
    pub services: Vec<CatalogServiceResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogServiceResource {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default = "default_bindable")]
    pub bindable: bool,
    #[serde(default)]
    pub plan_updateable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub plans: Vec<CatalogPlanResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogPlanResource {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default = "default_free")]
    pub free: bool,
}

fn default_bindable() -> bool {
    true
}

fn default_free() -> bool {
    true
}

impl CatalogResource {
    /// Parses a catalog document, falling back to the built-in single-plan
    /// catalog when none is configured.
    pub fn from_json(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for CatalogResource {
    fn default() -> Self {
        Self {
            services: vec![CatalogServiceResource {
                id: "0b5d3c2e-8f1a-4c5e-9a47-5f1d2b6c7e01".to_string(),
                name: "database".to_string(),
                description: "Dedicated database per service instance".to_string(),
                bindable: true,
                plan_updateable: false,
                tags: vec!["database".to_string(), "relational".to_string()],
                plans: vec![CatalogPlanResource {
                    id: "3f2a9c1d-6b4e-4d8a-8c3f-1e7b5a9d2c04".to_string(),
                    name: "shared".to_string(),
                    description: "A database on the shared server".to_string(),
                    free: true,
                }],
            }],
        }
    }
}
