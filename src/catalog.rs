//! Static policy catalog, validated once at load time.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::model::PolicyTemplate;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("policy id {id} appears more than once")]
    DuplicateId { id: String },

    #[error("invalid template: {reason}")]
    InvalidTemplate { reason: String },
}

/// Authored policy templates keyed by id. Templates are handed out as
/// `Arc`s so every implementation record shares the catalog's copy.
#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    templates: BTreeMap<String, Arc<PolicyTemplate>>,
}

impl PolicyCatalog {
    pub fn from_templates(
        templates: impl IntoIterator<Item = PolicyTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for template in templates {
            template
                .validate()
                .map_err(|reason| CatalogError::InvalidTemplate { reason })?;
            if by_id.contains_key(&template.id) {
                return Err(CatalogError::DuplicateId { id: template.id });
            }
            by_id.insert(template.id.clone(), Arc::new(template));
        }
        tracing::debug!(policies = by_id.len(), "loaded policy catalog");
        Ok(Self { templates: by_id })
    }

    /// Parse a JSON array of templates.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let templates: Vec<PolicyTemplate> = serde_json::from_str(json)?;
        Self::from_templates(templates)
    }

    pub fn get(&self, id: &str) -> Option<Arc<PolicyTemplate>> {
        self.templates.get(id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<PolicyTemplate>> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
