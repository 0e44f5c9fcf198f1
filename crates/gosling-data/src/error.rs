//! Error types for gosling-data

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Dataset for {tool} is not valid JSON: {source}")]
    Dataset {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}
