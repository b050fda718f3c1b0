//! The resource table: managed kinds, filenames, first-run defaults.
//!
//! Every component (resolver, provisioner, loader) consumes this single
//! table, so a kind's filename and default payload are defined exactly once.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Directory holding resource files in development mode, relative to the
/// working directory.
pub const DEV_ASSETS_DIR: &str = "assets";

/// Sentinel token value signaling an unconfigured install.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_TOKEN_HERE";

/// Sentinel agent id signaling an unconfigured install.
pub const PLACEHOLDER_AGENT_ID: &str = "YOUR_AGENT_ID_HERE";

/// Sample questions written on first run so the question slider renders
/// something before the install is customized.
pub const DEFAULT_QUESTIONS: [&str; 3] =
    ["test question 1", "test question 2", "test question 3"];

/// A JSON-backed resource this crate manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Ordered list of suggested questions (`questions.json`).
    Questions,
    /// Single-agent credential record (`config.json`).
    Config,
    /// Multi-agent credential list (`agents.json`).
    Agents,
}

impl ResourceKind {
    /// Fixed on-disk filename for this kind.
    pub const fn filename(self) -> &'static str {
        match self {
            ResourceKind::Questions => "questions.json",
            ResourceKind::Config => "config.json",
            ResourceKind::Agents => "agents.json",
        }
    }

    /// First-run payload written by the provisioner when no file exists.
    pub fn default_payload(self) -> Value {
        match self {
            ResourceKind::Questions => json!(DEFAULT_QUESTIONS),
            ResourceKind::Config => json!({
                "token": PLACEHOLDER_TOKEN,
                "agentId": PLACEHOLDER_AGENT_ID,
            }),
            // One self-describing placeholder entry rather than an empty
            // array, so a hand-editing user sees the expected shape.
            ResourceKind::Agents => json!([{
                "id": PLACEHOLDER_AGENT_ID,
                "token": PLACEHOLDER_TOKEN,
            }]),
        }
    }
}

/// Which credential resource a deployment uses.
///
/// Exactly one credential kind is managed per deployment; the other file is
/// neither provisioned nor expected to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScheme {
    /// One agent, credentials in `config.json`.
    SingleAgent,
    /// Multiple agents, credentials in `agents.json`.
    MultiAgent,
}

impl CredentialScheme {
    /// The credential resource this scheme manages.
    pub const fn credential_kind(self) -> ResourceKind {
        match self {
            CredentialScheme::SingleAgent => ResourceKind::Config,
            CredentialScheme::MultiAgent => ResourceKind::Agents,
        }
    }

    /// All resources managed under this scheme, in provisioning order.
    pub const fn managed_kinds(self) -> [ResourceKind; 2] {
        [ResourceKind::Questions, self.credential_kind()]
    }
}

/// Authentication credentials for the chat API (single-agent deployments).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub token: String,
    #[serde(rename = "agentId")]
    pub agent_id: String,
}

/// One agent's credentials (multi-agent deployments).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEntry {
    pub id: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies the kind → filename mapping is the fixed table the on-disk
    /// layout documents.
    #[test]
    fn filenames_match_on_disk_layout() {
        assert_eq!(ResourceKind::Questions.filename(), "questions.json");
        assert_eq!(ResourceKind::Config.filename(), "config.json");
        assert_eq!(ResourceKind::Agents.filename(), "agents.json");
    }

    /// Verifies the default config payload deserializes into the typed
    /// record with both sentinel placeholders.
    #[test]
    fn default_config_payload_carries_placeholders() {
        let cfg: AppConfig =
            serde_json::from_value(ResourceKind::Config.default_payload()).expect("typed config");
        assert_eq!(cfg.token, PLACEHOLDER_TOKEN);
        assert_eq!(cfg.agent_id, PLACEHOLDER_AGENT_ID);
    }

    /// Verifies the default agents payload is a single placeholder entry.
    #[test]
    fn default_agents_payload_is_one_placeholder_entry() {
        let agents: Vec<AgentEntry> =
            serde_json::from_value(ResourceKind::Agents.default_payload()).expect("typed agents");
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].id, PLACEHOLDER_AGENT_ID);
        assert_eq!(agents[0].token, PLACEHOLDER_TOKEN);
    }

    /// Verifies each scheme manages questions plus exactly its own
    /// credential kind.
    #[test]
    fn schemes_manage_disjoint_credential_kinds() {
        assert_eq!(
            CredentialScheme::SingleAgent.managed_kinds(),
            [ResourceKind::Questions, ResourceKind::Config]
        );
        assert_eq!(
            CredentialScheme::MultiAgent.managed_kinds(),
            [ResourceKind::Questions, ResourceKind::Agents]
        );
    }
}
