use crate::{
    candidate::Tool,
    matcher::MatcherConfig,
    types::canonical,
};
use serde::{Deserialize, Serialize};

/// Read-only tool name -> capabilities lookup, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Later entries with an already-seen name are dropped.
    pub fn new(tools: Vec<Tool>) -> Self {
        let mut catalog = Self::default();
        for tool in tools {
            if catalog.get(&tool.name).is_some() {
                log::warn!("tool catalog: duplicate entry '{}' ignored", tool.name);
                continue;
            }
            catalog.tools.push(tool);
        }
        catalog
    }

    /// Case-insensitive lookup by tool name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        let wanted = canonical(name);
        self.tools.iter().find(|t| canonical(&t.name) == wanted)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ToolCatalogFile {
    tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ToolEntry {
    name: String,
    capabilities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PresetsFile {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DelegationConfig {
    pub matcher: MatcherConfig,
    pub tool_catalog: ToolCatalog,
    /// Pick-list offered by the add-employee form.
    pub strength_presets: Vec<String>,
    pub weakness_presets: Vec<String>,
}

impl DelegationConfig {
    /// Load from the data/ directory.
    /// In tests, use DelegationConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let matcher_path = format!("{data_dir}/matcher.json");
        let matcher_content = std::fs::read_to_string(&matcher_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {matcher_path}: {e}"))?;
        let matcher: MatcherConfig = serde_json::from_str(&matcher_content)
            .map_err(|e| anyhow::anyhow!("Invalid {matcher_path}: {e}"))?;

        let catalog_path = format!("{data_dir}/tool_catalog.json");
        let catalog_content = std::fs::read_to_string(&catalog_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {catalog_path}: {e}"))?;
        let catalog_file: ToolCatalogFile = serde_json::from_str(&catalog_content)
            .map_err(|e| anyhow::anyhow!("Invalid {catalog_path}: {e}"))?;
        let tool_catalog = ToolCatalog::new(
            catalog_file
                .tools
                .into_iter()
                .map(|t| Tool::new(&t.name, t.capabilities))
                .collect(),
        );

        let presets_path = format!("{data_dir}/presets.json");
        let presets_content = std::fs::read_to_string(&presets_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {presets_path}: {e}"))?;
        let presets: PresetsFile = serde_json::from_str(&presets_content)
            .map_err(|e| anyhow::anyhow!("Invalid {presets_path}: {e}"))?;

        log::debug!(
            "config loaded from {data_dir}: {} catalog tools, {} strength presets",
            tool_catalog.len(),
            presets.strengths.len()
        );

        Ok(Self {
            matcher,
            tool_catalog,
            strength_presets: presets.strengths,
            weakness_presets: presets.weaknesses,
        })
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        let tool = |name: &str, caps: &[&str]| Tool::new(name, caps.iter().copied());
        let tool_catalog = ToolCatalog::new(vec![
            tool("HubSpot", &["crm", "email automation", "lead tracking", "contact management"]),
            tool("QuickBooks", &["invoicing", "payment follow-up", "expense tracking", "financial reports"]),
            tool("Calendly", &["calendar & meeting management", "appointment scheduling"]),
            tool("Trello", &["project tracking", "task prioritization", "kanban boards"]),
            tool("Buffer", &["social media scheduling", "post analytics"]),
            tool("Zapier", &["workflow automation", "data sync between apps"]),
            tool("Canva", &["graphic design", "presentation slides", "social media graphics"]),
            tool("Expensify", &["expense reports", "receipt tracking", "travel booking"]),
        ]);

        Self {
            matcher: MatcherConfig::default(),
            tool_catalog,
            strength_presets: to_strings(&[
                "Task prioritization", "Calendar & meeting management", "CRM usage",
                "Invoicing & payment follow-up", "Vendor communication", "Managing inbox",
                "Taking notes during meetings", "Creating SOPs", "Spreadsheet building",
                "Data cleanup", "Travel booking", "Project tracking", "Social media scheduling",
                "Customer follow-up", "Cold calling", "Warm lead nurturing", "Quote generation",
                "Order processing", "Inventory tracking", "Creating reports",
                "Writing professional emails", "Problem-solving under pressure",
                "Cross-functional coordination", "File and folder organization",
                "Research & summarizing information",
            ]),
            weakness_presets: to_strings(&[
                "Easily overwhelmed with multi-tasking", "Avoids confrontation or client follow-up",
                "Not detail-oriented", "Struggles with written communication",
                "Doesn't enjoy phone calls", "Gets distracted easily",
                "Avoids complex spreadsheets or numbers",
                "Uncomfortable with tech tools or new software", "Poor time estimation",
                "Doesn't take initiative", "Slow response time", "Struggles with follow-through",
                "Disorganized digital workspace", "Doesn't document processes",
                "Uncomfortable giving or receiving feedback",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
