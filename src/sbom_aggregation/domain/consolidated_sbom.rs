use serde::Serialize;
use serde_json::Value;

/// The consolidated SBOM of a whole collection
///
/// Sections keep the grouping of their sources: `vulnerabilities` and
/// `dependencies` hold one sub-sequence per source document. `components`
/// holds one group per source document followed by one application
/// descriptor per source document. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedSbom {
    pub vulnerabilities: Vec<Vec<Value>>,
    pub components: Vec<ComponentEntry>,
    pub dependencies: Vec<Vec<Value>>,
    pub metadata: CollectionMetadata,
}

/// One top-level element of the consolidated `components` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentEntry {
    /// All components of one source document
    Group(Vec<Value>),
    /// The `metadata.component` of one source document
    Application(Value),
}

impl ComponentEntry {
    pub fn is_group(&self) -> bool {
        matches!(self, ComponentEntry::Group(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionMetadata {
    pub timestamp: String,
    pub authors: Value,
    pub supplier: Value,
    pub tools: Vec<ToolDescriptor>,
    pub component: CollectionComponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub vendor: String,
    pub name: String,
    pub version: String,
}

impl ToolDescriptor {
    pub const VENDOR: &'static str = "Veracode";
    pub const NAME: &'static str = "SCA SBOM Tool";
    pub const VERSION: &'static str = "1.0";

    /// The descriptor recorded for this aggregation tool
    pub fn aggregation_tool() -> Self {
        Self {
            vendor: Self::VENDOR.to_string(),
            name: Self::NAME.to_string(),
            version: Self::VERSION.to_string(),
        }
    }
}

/// Component representing the collection itself
///
/// The absent fields serialize as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionComponent {
    #[serde(rename = "type")]
    pub component_type: String,
    pub group: Option<String>,
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    pub name: String,
    pub version: Option<String>,
    pub purl: Option<String>,
    pub hashes: Option<Vec<Value>>,
    pub licenses: Option<Vec<Value>>,
    pub supplier: Option<Value>,
    pub properties: Vec<Property>,
}

/// A CycloneDX name/value property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
