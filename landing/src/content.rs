//! Page content as data.
//!
//! Every literal string on the landing page lives here, in one ordered table
//! per section. Components never hold text of their own; they render whatever
//! [`PageContent`] hands them. The types are:
//!
//! - **Serializable** - content can be exported or loaded as JSON / TOML
//! - **Clone-friendly** - sections take owned props
//! - **Default-able** - `PageContent::default()` is the built-in SaasApp page
//!
//! # Example
//!
//! ```rust
//! use saas_landing::content::PageContent;
//!
//! let mut content = PageContent::default();
//! content.hero.heading = "Ship faster with SaasApp".into();
//!
//! assert!(content.validate().is_ok());
//! assert_eq!(content.pricing.plans.len(), 3);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::components::Glyph;

/// Link target used for footer entries that have no destination yet.
pub const PLACEHOLDER_HREF: &str = "#";

/// The six fixed regions of the page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Top navigation bar
    Nav,
    /// Hero banner
    Hero,
    /// Feature grid
    Features,
    /// Pricing tiers
    Pricing,
    /// Call-to-action banner
    Cta,
    /// Footer link groups
    Footer,
}

impl SectionKind {
    /// All sections in the order they appear on the page.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Pricing,
        SectionKind::Cta,
        SectionKind::Footer,
    ];

    /// Stable name, used for the `data-section` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Nav => "nav",
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Pricing => "pricing",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
        }
    }

    /// Element id for sections reachable through an in-page fragment link.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionKind::Features => Some("features"),
            SectionKind::Pricing => Some("pricing"),
            _ => None,
        }
    }
}

/// A single hyperlink (label + target).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible link text
    pub label: String,
    /// Link target; same-page fragments (`#pricing`) or [`PLACEHOLDER_HREF`]
    pub href: String,
}

impl NavLink {
    /// Link pointing at [`PLACEHOLDER_HREF`].
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: PLACEHOLDER_HREF.into(),
        }
    }

    /// Same-page link to the section's anchor.
    pub fn to_section(label: impl Into<String>, section: SectionKind) -> Self {
        let href = match section.anchor() {
            Some(anchor) => format!("#{anchor}"),
            None => PLACEHOLDER_HREF.into(),
        };
        Self {
            label: label.into(),
            href,
        }
    }
}

/// One entry of the feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Heading text
    pub title: String,
    /// Body text
    pub description: String,
    /// Glyph shown next to the text
    #[serde(default)]
    pub icon: Glyph,
}

/// One pricing tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Plan name shown as the card heading
    pub name: String,
    /// Whole currency units per month
    pub monthly_price: u32,
    /// Highlight this plan as the recommended one
    #[serde(default)]
    pub is_popular: bool,
    /// Included features, in display order
    pub features: Vec<String>,
}

/// Heading plus ordered links, one column of the footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGroup {
    /// Column heading
    pub title: String,
    /// Links in display order
    pub links: Vec<NavLink>,
}

/// Navigation bar content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavContent {
    /// Brand label on the left
    pub brand: String,
    /// Label of the outlined login control
    pub login_label: String,
    /// Label of the primary signup control
    pub signup_label: String,
    /// In-page anchor links
    pub links: Vec<NavLink>,
}

/// Hero banner content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Main heading
    pub heading: String,
    /// Supporting line under the heading
    pub subheading: String,
    /// Primary call-to-action label
    pub cta_label: String,
}

/// Feature grid content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesContent {
    /// Section heading
    pub heading: String,
    /// Grid entries in display order
    pub items: Vec<FeatureItem>,
}

/// Pricing grid content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContent {
    /// Section heading
    pub heading: String,
    /// Tiers in display order
    pub plans: Vec<PricingPlan>,
}

/// Call-to-action banner content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaContent {
    /// Banner heading
    pub heading: String,
    /// Supporting line under the heading
    pub subheading: String,
    /// Call-to-action label
    pub cta_label: String,
}

/// Footer content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    /// Closing copyright line
    pub copyright: String,
    /// Link columns in display order
    pub groups: Vec<LinkGroup>,
}

/// Everything the page renders, section by section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Navigation bar
    pub nav: NavContent,
    /// Hero banner
    pub hero: HeroContent,
    /// Feature grid
    pub features: FeaturesContent,
    /// Pricing grid
    pub pricing: PricingContent,
    /// Call-to-action banner
    pub cta: CtaContent,
    /// Footer
    pub footer: FooterContent,
}

/// Errors from loading or validating page content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content file {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON for [`PageContent`].
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// The content is not valid TOML for [`PageContent`].
    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported content format for {} (expected .json or .toml)", path.display())]
    UnsupportedFormat {
        /// File that was rejected
        path: PathBuf,
    },

    /// A pricing plan lists no features.
    #[error("pricing plan `{plan}` has no features")]
    EmptyPlanFeatures {
        /// Offending plan name
        plan: String,
    },

    /// Two or more plans claim to be the popular one.
    #[error("more than one pricing plan is marked popular: `{first}` and `{second}`")]
    MultiplePopularPlans {
        /// First popular plan
        first: String,
        /// Second popular plan
        second: String,
    },

    /// A footer column has a heading but no links.
    #[error("footer link group `{group}` has no links")]
    EmptyLinkGroup {
        /// Offending group title
        group: String,
    },
}

impl PageContent {
    /// Parse content from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse content from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(input)?)
    }

    /// Load content from a `.json` or `.toml` file.
    ///
    /// The result is not validated; call [`PageContent::validate`] before
    /// rendering content that did not come from this crate.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ContentError> = match format.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(ContentError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&raw)
    }

    /// Check the conventions the page relies on.
    ///
    /// Rendering never fails, so these are not enforced by the components:
    /// every plan has at least one feature, at most one plan is popular, and
    /// every footer group has at least one link.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut popular: Option<&str> = None;
        for plan in &self.pricing.plans {
            if plan.features.is_empty() {
                return Err(ContentError::EmptyPlanFeatures {
                    plan: plan.name.clone(),
                });
            }
            if plan.is_popular {
                if let Some(first) = popular {
                    return Err(ContentError::MultiplePopularPlans {
                        first: first.to_string(),
                        second: plan.name.clone(),
                    });
                }
                popular = Some(&plan.name);
            }
        }

        if let Some(group) = self.footer.groups.iter().find(|g| g.links.is_empty()) {
            return Err(ContentError::EmptyLinkGroup {
                group: group.title.clone(),
            });
        }

        Ok(())
    }

    /// The plan marked popular, if any.
    pub fn popular_plan(&self) -> Option<&PricingPlan> {
        self.pricing.plans.iter().find(|plan| plan.is_popular)
    }
}

// =============================================================================
// Built-in SaasApp content
// =============================================================================

fn feature(title: &str, description: &str) -> FeatureItem {
    FeatureItem {
        title: title.into(),
        description: description.into(),
        icon: Glyph::CheckCircle,
    }
}

fn plan(name: &str, monthly_price: u32, is_popular: bool, features: &[&str]) -> PricingPlan {
    PricingPlan {
        name: name.into(),
        monthly_price,
        is_popular,
        features: features.iter().map(|f| (*f).to_string()).collect(),
    }
}

fn link_group(title: &str, labels: &[&str]) -> LinkGroup {
    LinkGroup {
        title: title.into(),
        links: labels.iter().copied().map(NavLink::placeholder).collect(),
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            nav: NavContent {
                brand: "SaasApp".into(),
                login_label: "Log in".into(),
                signup_label: "Sign up".into(),
                links: vec![
                    NavLink::to_section("Features", SectionKind::Features),
                    NavLink::to_section("Pricing", SectionKind::Pricing),
                ],
            },
            hero: HeroContent {
                heading: "Streamline Your Workflow with SaasApp".into(),
                subheading: "Boost productivity and collaboration with our all-in-one platform."
                    .into(),
                cta_label: "Start Free Trial".into(),
            },
            features: FeaturesContent {
                heading: "Powerful Features".into(),
                items: vec![
                    feature(
                        "Task Management",
                        "Organize and prioritize your tasks with ease.",
                    ),
                    feature(
                        "Team Collaboration",
                        "Work together seamlessly with real-time updates.",
                    ),
                    feature(
                        "Analytics Dashboard",
                        "Gain insights with comprehensive data visualization.",
                    ),
                    feature(
                        "Integrations",
                        "Connect with your favorite tools and services.",
                    ),
                    feature(
                        "Mobile App",
                        "Stay productive on-the-go with our mobile app.",
                    ),
                    feature(
                        "24/7 Support",
                        "Get help whenever you need it with our support team.",
                    ),
                ],
            },
            pricing: PricingContent {
                heading: "Simple, Transparent Pricing".into(),
                plans: vec![
                    plan(
                        "Basic",
                        9,
                        false,
                        &["Up to 5 users", "Basic features", "1GB storage", "Email support"],
                    ),
                    plan(
                        "Pro",
                        29,
                        true,
                        &[
                            "Up to 20 users",
                            "Advanced features",
                            "10GB storage",
                            "Priority support",
                            "API access",
                        ],
                    ),
                    plan(
                        "Enterprise",
                        99,
                        false,
                        &[
                            "Unlimited users",
                            "All features",
                            "Unlimited storage",
                            "24/7 phone support",
                            "Custom integrations",
                        ],
                    ),
                ],
            },
            cta: CtaContent {
                heading: "Ready to Boost Your Productivity?".into(),
                subheading:
                    "Join thousands of satisfied users and take your workflow to the next level."
                        .into(),
                cta_label: "Start Your Free Trial".into(),
            },
            footer: FooterContent {
                copyright: "\u{a9} 2023 SaasApp. All rights reserved.".into(),
                groups: vec![
                    link_group("Product", &["Features", "Pricing", "Integrations"]),
                    link_group("Company", &["About", "Careers", "Contact"]),
                    link_group("Resources", &["Blog", "Documentation", "Help Center"]),
                    link_group(
                        "Legal",
                        &["Privacy Policy", "Terms of Service", "Cookie Policy"],
                    ),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_is_valid() {
        let content = PageContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.features.items.len(), 6);
        assert_eq!(content.pricing.plans.len(), 3);
        assert_eq!(content.footer.groups.len(), 4);
    }

    #[test]
    fn builtin_pro_plan_is_the_only_popular_one() {
        let content = PageContent::default();
        let popular: Vec<_> = content
            .pricing
            .plans
            .iter()
            .filter(|p| p.is_popular)
            .map(|p| (p.name.as_str(), p.monthly_price))
            .collect();
        assert_eq!(popular, vec![("Pro", 29)]);
        assert_eq!(content.popular_plan().map(|p| p.name.as_str()), Some("Pro"));
    }

    #[test]
    fn nav_links_point_at_section_anchors() {
        let content = PageContent::default();
        let hrefs: Vec<_> = content.nav.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#features", "#pricing"]);
    }

    #[test]
    fn section_kinds_are_in_page_order() {
        let names: Vec<_> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["nav", "hero", "features", "pricing", "cta", "footer"]);
        assert_eq!(SectionKind::Hero.anchor(), None);
    }

    #[test]
    fn rejects_plan_without_features() {
        let mut content = PageContent::default();
        content.pricing.plans[0].features.clear();

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::EmptyPlanFeatures { ref plan } if plan == "Basic"));
    }

    #[test]
    fn rejects_second_popular_plan() {
        let mut content = PageContent::default();
        content.pricing.plans[2].is_popular = true;

        let err = content.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "more than one pricing plan is marked popular: `Pro` and `Enterprise`"
        );
    }

    #[test]
    fn no_popular_plan_is_allowed() {
        let mut content = PageContent::default();
        content.pricing.plans[1].is_popular = false;
        assert!(content.validate().is_ok());
        assert!(content.popular_plan().is_none());
    }

    #[test]
    fn rejects_empty_footer_group() {
        let mut content = PageContent::default();
        content.footer.groups[3].links.clear();

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::EmptyLinkGroup { ref group } if group == "Legal"));
    }

    #[test]
    fn json_round_trip_preserves_content() {
        let content = PageContent::default();
        let json = serde_json::to_string_pretty(&content).expect("serialize json");
        let parsed = PageContent::from_json_str(&json).expect("parse json");
        assert_eq!(parsed, content);
    }

    #[test]
    fn toml_round_trip_preserves_content() {
        let content = PageContent::default();
        let raw = toml::to_string_pretty(&content).expect("serialize toml");
        let parsed = PageContent::from_toml_str(&raw).expect("parse toml");
        assert_eq!(parsed, content);
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let json = r#"{"name": "Solo", "monthly_price": 0, "features": ["1 user"]}"#;
        let plan: PricingPlan = serde_json::from_str(json).expect("parse plan");
        assert!(!plan.is_popular);

        let json = r#"{"title": "Fast", "description": "Very fast."}"#;
        let item: FeatureItem = serde_json::from_str(json).expect("parse feature");
        assert_eq!(item.icon, Glyph::CheckCircle);
    }

    #[test]
    fn negative_prices_are_rejected_at_parse_time() {
        let json = r#"{"name": "Refund", "monthly_price": -5, "features": ["x"]}"#;
        assert!(serde_json::from_str::<PricingPlan>(json).is_err());
    }

    #[test]
    fn load_picks_format_from_extension() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let content = PageContent::default();

        let json_path = dir.path().join("page.json");
        std::fs::write(&json_path, serde_json::to_string(&content).unwrap()).unwrap();
        assert_eq!(PageContent::load(&json_path).expect("load json"), content);

        let toml_path = dir.path().join("page.TOML");
        std::fs::write(&toml_path, toml::to_string(&content).unwrap()).unwrap();
        assert_eq!(PageContent::load(&toml_path).expect("load toml"), content);
    }

    #[test]
    fn load_rejects_unknown_extension_and_missing_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");

        let yaml = dir.path().join("page.yaml");
        std::fs::write(&yaml, "nav: {}").unwrap();
        assert!(matches!(
            PageContent::load(&yaml),
            Err(ContentError::UnsupportedFormat { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            PageContent::load(&missing),
            Err(ContentError::Io { .. })
        ));
    }
}
