use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CycloneDX SBOM for one application, as produced by the remote service
///
/// Component, dependency and vulnerability descriptors are carried as opaque
/// JSON values; only the fields the aggregation reads are typed. Every
/// section is required, so a document missing one fails to deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SbomDocument {
    pub metadata: SourceMetadata,
    pub components: Vec<Value>,
    pub dependencies: Vec<Value>,
    pub vulnerabilities: Vec<Value>,
}

/// The `metadata` section of a source SBOM
///
/// `authors` and `supplier` are only read from the first document of a
/// collection; when absent they are `null`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceMetadata {
    #[serde(default)]
    pub authors: Value,
    #[serde(default)]
    pub supplier: Value,
    /// Descriptor the service uses for the application itself
    pub component: Value,
}

impl SbomDocument {
    /// Parses a document from its JSON text
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_full_document() {
        let content = json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.4",
            "metadata": {
                "timestamp": "2024-01-01T00:00:00Z",
                "authors": [{"name": "Veracode"}],
                "supplier": {"name": "Acme"},
                "component": {"type": "application", "name": "checkout", "bom-ref": "app-1"}
            },
            "components": [{"type": "library", "name": "serde", "bom-ref": "c1"}],
            "dependencies": [{"ref": "app-1", "dependsOn": ["c1"]}],
            "vulnerabilities": []
        })
        .to_string();

        let document = SbomDocument::from_json(&content).unwrap();
        assert_eq!(document.components.len(), 1);
        assert_eq!(document.dependencies.len(), 1);
        assert!(document.vulnerabilities.is_empty());
        assert_eq!(document.metadata.authors, json!([{"name": "Veracode"}]));
        assert_eq!(document.metadata.component["name"], "checkout");
    }

    #[test]
    fn test_from_json_missing_section() {
        let content = json!({
            "metadata": {"authors": [], "supplier": {}, "component": {}},
            "components": [],
            "dependencies": []
        })
        .to_string();

        let err = SbomDocument::from_json(&content).unwrap_err();
        assert!(err.to_string().contains("vulnerabilities"));
    }

    #[test]
    fn test_from_json_missing_metadata_component() {
        let content = json!({
            "metadata": {"authors": [], "supplier": {}},
            "components": [],
            "dependencies": [],
            "vulnerabilities": []
        })
        .to_string();

        let err = SbomDocument::from_json(&content).unwrap_err();
        assert!(err.to_string().contains("component"));
    }

    #[test]
    fn test_from_json_without_authors_or_supplier() {
        let content = json!({
            "metadata": {"component": {"type": "application", "name": "ledger"}},
            "components": [],
            "dependencies": [],
            "vulnerabilities": []
        })
        .to_string();

        let document = SbomDocument::from_json(&content).unwrap();
        assert!(document.metadata.authors.is_null());
        assert!(document.metadata.supplier.is_null());
        assert_eq!(document.metadata.component["name"], "ledger");
    }
}
