//! Prompt construction for the classification and planning model calls.
//!
//! Pure string assembly, no I/O. The planning prompt embeds one worked
//! example selected by domain so the model sees output shaped like the plan
//! it is being asked for; unknown domains fall back to a generic example.

use crate::domain::{ALL_DOMAINS, Domain};

/// Output budget for the classification call. One token would do; a few
/// leave room for backends that count tokens differently.
pub const CLASSIFY_MAX_TOKENS: u32 = 8;

/// Output budget for the planning call.
pub const PLAN_MAX_TOKENS: u32 = 2048;

// ---------------------------------------------------------------------------
// Classification prompt
// ---------------------------------------------------------------------------

/// Build the closed-set classification prompt.
///
/// The model is instructed to answer with exactly one lowercase token from
/// the domain set; the classifier validates membership regardless.
pub fn build_classification_prompt(goal: &str) -> String {
    let mut prompt = String::with_capacity(512);

    prompt.push_str(
        "Classify the following software project goal into exactly one category.\n\n",
    );
    prompt.push_str("Categories:\n");
    for domain in ALL_DOMAINS {
        prompt.push_str(&format!("- {domain}\n"));
    }
    prompt.push_str(
        "\nRespond with exactly one lowercase category name and nothing else. \
         If none fits, respond with: general\n\n",
    );
    prompt.push_str(&format!("Goal: {goal}\n"));
    prompt.push_str("Category:");

    prompt
}

// ---------------------------------------------------------------------------
// Planning prompt
// ---------------------------------------------------------------------------

/// Schema reference included in the planning prompt.
const PLAN_SCHEMA_REFERENCE: &str = r#"The JSON object must contain:
- goal: the project goal, verbatim
- project_type: a short label such as "web_application"
- domain: the project category
- planner: { subtasks: [ordered strings], requirements: { core_features, tech_stack, timeline } }
- coder: { tasks: [ordered strings], technical_specs: {...}, file_structure: { "path": "description" } }
- designer: { theme, pages: [{ name, components }], design_system: { colors, typography } }
"#;

/// Worked example for marketplace goals.
const MARKETPLACE_EXAMPLE: &str = r##"Goal: Build a handmade jewelry marketplace
Output:
{
  "goal": "Build a handmade jewelry marketplace",
  "project_type": "web_application",
  "domain": "marketplace",
  "planner": {
    "subtasks": [
      "Define seller onboarding and listing requirements",
      "Design the product catalog and search flow",
      "Plan cart, checkout, and payment integration",
      "Create a launch timeline"
    ],
    "requirements": {
      "core_features": ["Product listings", "Search and filters", "Cart and checkout", "Seller ratings"],
      "tech_stack": "React + Node.js + Stripe",
      "timeline": "4 weeks"
    }
  },
  "coder": {
    "tasks": ["Scaffold the storefront", "Build the listings API", "Implement checkout"],
    "technical_specs": {"frontend": "React", "backend": "Node.js", "database": "PostgreSQL", "payments": "Stripe"},
    "file_structure": {
      "src/App.js": "Application shell and routing",
      "src/components/ProductCard.js": "Product summary card",
      "src/api/products.js": "Product catalog API client"
    }
  },
  "designer": {
    "theme": "Warm, craft-focused storefront",
    "pages": [
      {"name": "Home", "components": ["Hero banner", "Featured products"]},
      {"name": "Product Detail", "components": ["Image gallery", "Add to cart"]}
    ],
    "design_system": {
      "colors": {"primary": "#B45309"},
      "typography": {"headings": "Playfair Display", "body": "Inter"}
    }
  }
}"##;

/// Worked example for dashboard goals.
const DASHBOARD_EXAMPLE: &str = r##"Goal: Build a sales analytics dashboard
Output:
{
  "goal": "Build a sales analytics dashboard",
  "project_type": "web_application",
  "domain": "dashboard",
  "planner": {
    "subtasks": [
      "Define the metrics and data sources",
      "Design the overview and report views",
      "Plan filtering, drill-down, and export",
      "Create a rollout timeline"
    ],
    "requirements": {
      "core_features": ["KPI cards", "Trend charts", "Saved filters", "CSV export"],
      "tech_stack": "React + Node.js + ClickHouse",
      "timeline": "3 weeks"
    }
  },
  "coder": {
    "tasks": ["Scaffold the app", "Build the metrics API", "Implement the chart views"],
    "technical_specs": {"frontend": "React", "backend": "Node.js", "database": "ClickHouse", "charts": "Recharts"},
    "file_structure": {
      "src/App.js": "Application shell and routing",
      "src/components/KpiCard.js": "Single-metric summary card",
      "src/api/metrics.js": "Metrics query API client"
    }
  },
  "designer": {
    "theme": "Dense, data-first layout with a light palette",
    "pages": [
      {"name": "Overview", "components": ["KPI cards", "Trend chart"]},
      {"name": "Reports", "components": ["Filter bar", "Data table"]}
    ],
    "design_system": {
      "colors": {"primary": "#1D4ED8"},
      "typography": {"headings": "Inter", "body": "Inter"}
    }
  }
}"##;

/// Worked example for social goals.
const SOCIAL_EXAMPLE: &str = r##"Goal: Build a book club social network
Output:
{
  "goal": "Build a book club social network",
  "project_type": "web_application",
  "domain": "social",
  "planner": {
    "subtasks": [
      "Define profiles, follows, and feed requirements",
      "Design posting, comments, and notifications",
      "Plan moderation and reporting",
      "Create a beta timeline"
    ],
    "requirements": {
      "core_features": ["Profiles", "Post feed", "Comments and likes", "Notifications"],
      "tech_stack": "React + Node.js + Redis",
      "timeline": "5 weeks"
    }
  },
  "coder": {
    "tasks": ["Scaffold the app", "Build the feed API", "Implement messaging"],
    "technical_specs": {"frontend": "React", "backend": "Node.js", "database": "PostgreSQL", "cache": "Redis"},
    "file_structure": {
      "src/App.js": "Application shell and routing",
      "src/components/PostCard.js": "Single post with actions",
      "src/api/posts.js": "Post and feed API client"
    }
  },
  "designer": {
    "theme": "Friendly, conversation-centered layout",
    "pages": [
      {"name": "Feed", "components": ["Post composer", "Post list"]},
      {"name": "Profile", "components": ["Avatar header", "Post grid"]}
    ],
    "design_system": {
      "colors": {"primary": "#7C3AED"},
      "typography": {"headings": "Inter", "body": "Inter"}
    }
  }
}"##;

/// Worked example for goals with no templated domain.
const GENERIC_EXAMPLE: &str = r##"Goal: Build a weather app
Output:
{
  "goal": "Build a weather app",
  "project_type": "web_application",
  "domain": "general",
  "planner": {
    "subtasks": [
      "Define app requirements",
      "Research weather APIs",
      "Plan architecture",
      "Create timeline"
    ],
    "requirements": {
      "core_features": ["Current weather", "Forecast", "Search"],
      "tech_stack": "React + OpenWeatherMap",
      "timeline": "2 weeks"
    }
  },
  "coder": {
    "tasks": ["Setup React project", "Create API service", "Build UI components"],
    "technical_specs": {"frontend": "React", "backend": "Node", "database": "None", "deployment": "Vercel"},
    "file_structure": {
      "src/App.js": "Main component",
      "src/api/weather.js": "API handler"
    }
  },
  "designer": {
    "theme": "Blue card UI with icons",
    "pages": [
      {"name": "Home", "components": ["Search", "Forecast cards"]}
    ],
    "design_system": {
      "colors": {"primary": "#2196F3"},
      "typography": {"headings": "Inter", "body": "Sans"}
    }
  }
}"##;

/// Select the worked example for a domain.
fn worked_example(domain: Domain) -> &'static str {
    match domain {
        Domain::Marketplace => MARKETPLACE_EXAMPLE,
        Domain::Dashboard => DASHBOARD_EXAMPLE,
        Domain::Social => SOCIAL_EXAMPLE,
        Domain::General => GENERIC_EXAMPLE,
    }
}

/// Build the planning prompt for a goal in a given domain.
pub fn build_planning_prompt(goal: &str, domain: Domain) -> String {
    let mut prompt = String::with_capacity(4096);

    prompt.push_str(
        "You are a multi-agent project planner. Given a software goal, return a \
         structured JSON object with detailed plans for planner, coder, and \
         designer agents.\n\n",
    );
    prompt.push_str(PLAN_SCHEMA_REFERENCE);
    prompt.push_str(
        "\nRespond with the JSON object only. Do not add commentary before or \
         after it.\n\n",
    );
    prompt.push_str("EXAMPLE:\n");
    prompt.push_str(worked_example(domain));
    prompt.push_str("\n\nNOW DO THIS:\n");
    prompt.push_str(&format!("Goal: {goal}\n"));
    prompt.push_str("Output:");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_prompt_lists_every_domain() {
        let prompt = build_classification_prompt("Build a shoe marketplace");
        for domain in ALL_DOMAINS {
            assert!(prompt.contains(&domain.to_string()), "missing {domain}");
        }
        assert!(prompt.contains("Build a shoe marketplace"));
        assert!(prompt.ends_with("Category:"));
    }

    #[test]
    fn classification_prompt_names_the_default() {
        let prompt = build_classification_prompt("anything");
        assert!(prompt.contains("respond with: general"));
    }

    #[test]
    fn planning_prompt_contains_schema_markers() {
        let prompt = build_planning_prompt("Build a todo app", Domain::General);
        assert!(prompt.contains("planner"));
        assert!(prompt.contains("file_structure"));
        assert!(prompt.contains("design_system"));
        assert!(prompt.contains("Respond with the JSON object only"));
    }

    #[test]
    fn planning_prompt_embeds_the_goal() {
        let prompt = build_planning_prompt("Build a todo app", Domain::General);
        assert!(prompt.contains("Goal: Build a todo app"));
        assert!(prompt.ends_with("Output:"));
    }

    #[test]
    fn planning_prompt_selects_domain_example() {
        let marketplace = build_planning_prompt("g", Domain::Marketplace);
        assert!(marketplace.contains("jewelry marketplace"));

        let dashboard = build_planning_prompt("g", Domain::Dashboard);
        assert!(dashboard.contains("sales analytics dashboard"));

        let social = build_planning_prompt("g", Domain::Social);
        assert!(social.contains("book club"));

        let general = build_planning_prompt("g", Domain::General);
        assert!(general.contains("weather app"));
    }

    #[test]
    fn worked_examples_are_valid_json() {
        for example in [
            MARKETPLACE_EXAMPLE,
            DASHBOARD_EXAMPLE,
            SOCIAL_EXAMPLE,
            GENERIC_EXAMPLE,
        ] {
            let json = example
                .split_once("Output:\n")
                .expect("example should have an Output section")
                .1;
            let value: serde_json::Value =
                serde_json::from_str(json).expect("example JSON should parse");
            assert!(value.is_object());
        }
    }
}
