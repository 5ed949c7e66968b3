use std::{sync::OnceLock, time::Duration};

use serde_json::{json, Value};
use url::Url;

pub const SITE_URL: &str = "https://www.ivailo.dev";
pub const CONTACT_PATH: &str = "/api/contact";

/// How long the "Message Sent!" panel stays up before the form comes back.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);
/// Hover delay before a tooltip opens.
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(300);
pub const MAX_MESSAGE_LEN: usize = 2000;

pub const OWNER_NAME: &str = "Ivaylo Atanassov";
pub const DEFAULT_TITLE: &str = "Ivaylo Atanassov - Web Developer & Full-Stack Engineer";
pub const DESCRIPTION: &str = "I am a Web Developer with 3+ years of experience. I specialize in building custom websites, e-commerce platforms, content management systems, and admin dashboards that give you complete control over your business.";
pub const KEYWORDS: &[&str] = &[
    "web developer",
    "full-stack developer",
    "React developer",
    "Next.js developer",
    "TypeScript developer",
    "e-commerce developer",
    "CMS developer",
    "admin dashboard developer",
    "frontend developer",
    "backend developer",
    "JavaScript developer",
    "Node.js developer",
    "portfolio",
    "custom websites",
    "web applications",
];
pub const SOCIAL_PROFILES: &[&str] = &[
    "https://github.com/ivayloatanassov",
    "https://linkedin.com/in/ivayloatanassov",
];
pub const TWITTER_HANDLE: &str = "@ivayloatanassov";

pub const CONTACT_PHONE: &str = "+359 879 850 066";
pub const CONTACT_EMAIL: &str = "ivailoatanassov@gmail.com";
pub const CONTACT_LOCATION: &str = "Bulgaria";

/// Runtime settings read by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: SITE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Reads `SITE_URL`, falling back to the production domain.
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var("SITE_URL").ok().as_deref())
    }

    /// Process-wide config, read from the environment on first use.
    pub fn current() -> &'static SiteConfig {
        static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    fn from_base_url(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(base_url) if !base_url.is_empty() => Self {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }

    pub fn og_image(&self) -> String {
        format!("{}/og-image.webp", self.base_url)
    }
}

/// Where the contact form posts to.
///
/// A `CONTACT_ENDPOINT` set at build time wins, otherwise [`CONTACT_PATH`]
/// is joined onto the page origin.
pub fn contact_endpoint(origin: &str) -> Result<Url, url::ParseError> {
    resolve_endpoint(origin, option_env!("CONTACT_ENDPOINT"))
}

fn resolve_endpoint(origin: &str, configured: Option<&str>) -> Result<Url, url::ParseError> {
    match configured {
        Some(endpoint) => Url::parse(endpoint),
        None => Url::parse(origin)?.join(CONTACT_PATH),
    }
}

/// schema.org `Person` description embedded in every page head.
pub fn person_json_ld(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": OWNER_NAME,
        "jobTitle": "Web Developer",
        "description": "Web Developer with 3+ years of experience specializing in custom websites, e-commerce platforms, content management systems, and admin dashboards.",
        "url": base_url,
        "sameAs": SOCIAL_PROFILES,
        "knowsAbout": [
            "Web Development",
            "React",
            "Next.js",
            "TypeScript",
            "JavaScript",
            "Node.js",
            "E-commerce",
            "Content Management Systems",
            "Admin Dashboards",
        ],
        "worksFor": {
            "@type": "Organization",
            "name": "Freelance",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_origin() {
        let url = resolve_endpoint("http://localhost:3000", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/contact");

        // a trailing path on the origin is replaced, not appended to
        let url = resolve_endpoint("https://www.ivailo.dev/projects", None).unwrap();
        assert_eq!(url.as_str(), "https://www.ivailo.dev/api/contact");
    }

    #[test]
    fn test_endpoint_override() {
        let url = resolve_endpoint(
            "http://localhost:3000",
            Some("https://mail.example.com/send"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://mail.example.com/send");

        assert!(resolve_endpoint("not a url", None).is_err());
    }

    #[test]
    fn test_person_json_ld() {
        let value = person_json_ld(SITE_URL);
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["url"], SITE_URL);
        assert_eq!(value["name"], OWNER_NAME);
        assert_eq!(value["sameAs"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_base_url_from_env_value() {
        assert_eq!(SiteConfig::from_base_url(None), SiteConfig::default());
        assert_eq!(SiteConfig::from_base_url(Some("  ")), SiteConfig::default());

        let staging = SiteConfig::from_base_url(Some("https://staging.ivailo.dev/"));
        assert_eq!(staging.base_url, "https://staging.ivailo.dev");
        assert_eq!(staging.og_image(), "https://staging.ivailo.dev/og-image.webp");
        assert_eq!(
            person_json_ld(&staging.base_url)["url"],
            "https://staging.ivailo.dev"
        );
    }
}
