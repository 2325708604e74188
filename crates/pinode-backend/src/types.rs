use serde::{Deserialize, Serialize};

/// Delegate version managers that can install and activate Node.js.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    #[default]
    Nvm,
}

impl ToolId {
    pub const DEFAULT: Self = Self::Nvm;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nvm => "nvm",
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A version to install and activate through a specific tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedVersionRequest {
    pub version: String,
    pub tool: ToolId,
}

impl ManagedVersionRequest {
    #[must_use]
    pub fn new(version: impl Into<String>, tool: ToolId) -> Self {
        Self {
            version: version.into(),
            tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ManagedVersionRequest, ToolId};

    #[test]
    fn default_tool_is_nvm() {
        assert_eq!(ToolId::DEFAULT, ToolId::Nvm);
        assert_eq!(ToolId::default(), ToolId::Nvm);
    }

    #[test]
    fn display_outputs_tool_name() {
        assert_eq!(ToolId::Nvm.to_string(), "nvm");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let value = serde_json::to_string(&ToolId::Nvm).expect("tool should serialize");
        assert_eq!(value, "\"nvm\"");

        let parsed: ToolId = serde_json::from_str("\"nvm\"").expect("tool should deserialize");
        assert_eq!(parsed, ToolId::Nvm);
        assert!(serde_json::from_str::<ToolId>("\"volta\"").is_err());
    }

    #[test]
    fn request_keeps_version_verbatim() {
        let request = ManagedVersionRequest::new("v18.20.0", ToolId::Nvm);
        assert_eq!(request.version, "v18.20.0");
        assert_eq!(request.tool, ToolId::Nvm);
    }
}
