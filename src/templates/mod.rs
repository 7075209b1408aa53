//! Pre-built search templates with fill-in-the-blank parameters.
//!
//! The catalog is static data: templates are defined at compile time, never
//! mutated, and looked up by id or by category.

mod catalog;

pub use catalog::TEMPLATES;

use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Network,
    Web,
    Iot,
    Industrial,
    Database,
    Vuln,
    Cloud,
    Country,
    Custom,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Category; 9] = [
        Category::Network,
        Category::Web,
        Category::Iot,
        Category::Industrial,
        Category::Database,
        Category::Vuln,
        Category::Cloud,
        Category::Country,
        Category::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Web => "web",
            Self::Iot => "iot",
            Self::Industrial => "industrial",
            Self::Database => "database",
            Self::Vuln => "vuln",
            Self::Cloud => "cloud",
            Self::Country => "country",
            Self::Custom => "custom",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "Network & Infrastructure",
            Self::Web => "Web Servers & Apps",
            Self::Iot => "IoT & Cameras",
            Self::Industrial => "ICS / SCADA",
            Self::Database => "Databases",
            Self::Vuln => "Vulnerabilities",
            Self::Cloud => "Cloud Services",
            Self::Country => "By Country / Region",
            Self::Custom => "Custom / Raw Query",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Network => "🌐",
            Self::Web => "🌍",
            Self::Iot => "📡",
            Self::Industrial => "🏭",
            Self::Database => "🗄️",
            Self::Vuln => "🛡️",
            Self::Cloud => "☁️",
            Self::Country => "🗺️",
            Self::Custom => "⚙️",
        }
    }
}

impl FromStr for Category {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or(())
    }
}

/// One placeholder in a template's query string.
#[derive(Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Placeholder key, unique within its template.
    pub name: &'static str,
    pub description: &'static str,
    /// Example value, also used when the operator supplies nothing.
    pub example: &'static str,
    pub required: bool,
}

impl Parameter {
    pub const fn new(name: &'static str, description: &'static str, example: &'static str) -> Self {
        Self {
            name,
            description,
            example,
            required: true,
        }
    }

    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub category: Category,
    pub params: &'static [Parameter],
    /// Query with `{name}` placeholders.
    pub query: &'static str,
    /// Fully substituted example query.
    pub example: &'static str,
    /// Default facet spec requested with the search, e.g. `org:10,port:10`.
    pub facets: &'static str,
    pub tags: &'static [&'static str],
}

impl Template {
    pub fn param(&self, index: usize) -> Option<&'static Parameter> {
        self.params.get(index)
    }

    pub fn facets(&self) -> Option<&'static str> {
        (!self.facets.is_empty()).then_some(self.facets)
    }

    fn matches_keyword(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
            || self.description.to_lowercase().contains(keyword)
            || self.tags.iter().any(|t| t.contains(keyword))
    }
}

pub fn get_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn templates_in(category: Category) -> Vec<&'static Template> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

/// Categories that hold at least one template, in menu order, with their template count.
pub fn populated_categories() -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|c| (c, templates_in(c).len()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

/// Case-insensitive keyword search over name, description and tags.
pub fn search_templates(keyword: &str) -> Vec<&'static Template> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Vec::new();
    }
    TEMPLATES
        .iter()
        .filter(|t| t.matches_keyword(&keyword))
        .collect()
}

/// Substitute every `{param}` placeholder with the supplied value, falling back to
/// the parameter's example. Values are inserted verbatim; the search API rejects
/// malformed queries.
pub fn build_query(template: &Template, values: &HashMap<String, String>) -> String {
    template.params.iter().fold(template.query.to_string(), |query, param| {
        let value = values
            .get(param.name)
            .map(String::as_str)
            .unwrap_or(param.example);
        query.replace(&param.placeholder(), value)
    })
}
