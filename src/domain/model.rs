use serde::{Deserialize, Serialize};

/// One company's entry as it appears on disk, one JSON document per file.
/// `nodeProjectRate` and `nodeDeveloperRate` may be omitted; `army` and
/// `frameworks` are required, so a document missing them fails to parse and
/// the file is dropped by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpRecord {
    pub name: String,
    pub link: String,
    pub army: Vec<String>,
    pub official: bool,
    pub remote_work: bool,
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub node_project_rate: f64,
    #[serde(default)]
    pub node_developer_rate: f64,
}

/// Normalized record: list fields flattened to comma-joined strings, rates
/// defaulted to 0 when the source omitted them.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpInfo {
    pub name: String,
    pub link: String,
    pub army: String,
    pub official: bool,
    pub remote_work: bool,
    pub frameworks: String,
    pub node_project_rate: f64,
    pub node_developer_rate: f64,
}

impl From<CorpRecord> for CorpInfo {
    fn from(record: CorpRecord) -> Self {
        Self {
            name: record.name,
            link: record.link,
            army: record.army.join(","),
            official: record.official,
            remote_work: record.remote_work,
            frameworks: record.frameworks.join(","),
            node_project_rate: record.node_project_rate,
            node_developer_rate: record.node_developer_rate,
        }
    }
}

/// A record rendered into display-ready cell strings.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub official: String,
    pub name: String,
    pub node_developer_rate: String,
    pub node_project_rate: String,
    pub frameworks: String,
    pub link: String,
    pub remote_work: String,
    pub army: String,
}

impl TableRow {
    /// Cell values in the fixed column order of the rendered table.
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.official,
            &self.name,
            &self.node_developer_rate,
            &self.node_project_rate,
            &self.frameworks,
            &self.link,
            &self.remote_work,
            &self.army,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub rows: Vec<TableRow>,
    pub markdown: String,
}
