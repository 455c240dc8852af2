/// Log tags identify the subsystem a message comes from
///
/// Each tag maps to a `--debug-<key>` command-line flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Registry,
    TokenList,
    Ingest,
    Logo,
    Api,
}

impl LogTag {
    /// Key used in `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Registry => "registry".to_string(),
            LogTag::TokenList => "tokenlist".to_string(),
            LogTag::Ingest => "ingest".to_string(),
            LogTag::Logo => "logo".to_string(),
            LogTag::Api => "api".to_string(),
        }
    }

    /// Uncolored label used in log files
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Registry => "REGISTRY".to_string(),
            LogTag::TokenList => "TOKENLIST".to_string(),
            LogTag::Ingest => "INGEST".to_string(),
            LogTag::Logo => "LOGO".to_string(),
            LogTag::Api => "API".to_string(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
