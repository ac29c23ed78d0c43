//! Sign-in deep-link construction
//!
//! Turns a student/staff ID into an institutional email address and builds
//! the `login_hint` URL for each Microsoft 365 or Google Workspace service.

pub mod catalog;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub use catalog::{Catalog, Service};

pub const DEFAULT_MICROSOFT_DOMAIN: &str = "live.yuntech.edu.tw";
pub const DEFAULT_GOOGLE_DOMAIN: &str = "gemail.yuntech.edu.tw";
pub const DEFAULT_SHAREPOINT_PREFIX: &str = "liveyuntechedu";

const GOOGLE_ACCOUNT_CHOOSER: &str = "https://accounts.google.com/AccountChooser";

/// Which identity provider signs the user in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Microsoft,
    Google,
}

impl Provider {
    pub fn badge(&self) -> &'static str {
        match self {
            Provider::Microsoft => "MS",
            Provider::Google => "Google",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "microsoft" | "ms" | "m365" => Ok(Provider::Microsoft),
            "google" | "gws" => Ok(Provider::Google),
            other => Err(format!(
                "unknown provider '{}' (expected microsoft or google)",
                other
            )),
        }
    }
}

/// Where a service sends the user after sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Plain service URL, gets a `login_hint` (Microsoft) or becomes the
    /// account chooser's `continue` (Google)
    Url(String),
    /// Personal OneDrive, derived from the email address
    OneDrive,
}

/// Institution-specific pieces used to build addresses and URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    pub microsoft: String,
    pub google: String,
    pub sharepoint_prefix: String,
}

impl Default for Domains {
    fn default() -> Self {
        Self {
            microsoft: DEFAULT_MICROSOFT_DOMAIN.to_string(),
            google: DEFAULT_GOOGLE_DOMAIN.to_string(),
            sharepoint_prefix: DEFAULT_SHAREPOINT_PREFIX.to_string(),
        }
    }
}

/// A fully resolved sign-in link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub service: String,
    pub provider: Provider,
    pub email: String,
    pub url: String,
}

/// Trim and uppercase a typed ID
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Append `domain` unless the ID already carries its own
pub fn build_email(id: &str, domain: &str) -> String {
    if id.contains('@') {
        id.to_string()
    } else {
        format!("{}@{}", id, domain)
    }
}

/// Google accounts always live on the Google domain, whatever the user typed
pub fn build_google_email(id: &str, domain: &str) -> String {
    let local = id.split('@').next().unwrap_or(id);
    format!("{}@{}", local, domain)
}

pub fn build_onedrive_url(email: &str, sharepoint_prefix: &str) -> String {
    let user_path = email.replace(['@', '.'], "_").to_lowercase();
    format!(
        "https://{}-my.sharepoint.com/personal/{}/_layouts/15/onedrive.aspx?login_hint={}&view=1",
        sharepoint_prefix,
        user_path,
        urlencoding::encode(email)
    )
}

pub fn build_microsoft_url(base: &str, email: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}login_hint={}",
        base,
        separator,
        urlencoding::encode(email)
    )
}

pub fn build_google_url(email: &str, continue_url: &str) -> String {
    format!(
        "{}?Email={}&continue={}",
        GOOGLE_ACCOUNT_CHOOSER,
        urlencoding::encode(email),
        urlencoding::encode(continue_url)
    )
}

/// Build the sign-in link for `service` from a raw, user-typed ID
pub fn resolve(service: &Service, raw_id: &str, domains: &Domains) -> Result<Redirect> {
    let id = normalize_id(raw_id);
    if id.is_empty() {
        return Err(Error::MissingId);
    }

    let (email, url) = match (service.provider, &service.target) {
        (Provider::Microsoft, target) => {
            let email = build_email(&id, &domains.microsoft);
            let url = match target {
                Target::OneDrive => build_onedrive_url(&email, &domains.sharepoint_prefix),
                Target::Url(base) => build_microsoft_url(base, &email),
            };
            (email, url)
        }
        (Provider::Google, Target::Url(base)) => {
            let email = build_google_email(&id, &domains.google);
            let url = build_google_url(&email, base);
            (email, url)
        }
        (Provider::Google, Target::OneDrive) => {
            return Err(Error::InvalidService(format!(
                "'{}' is a Google service but targets OneDrive",
                service.key
            )));
        }
    };

    tracing::debug!("Resolved {} as {} -> {}", service.key, email, url);

    Ok(Redirect {
        service: service.key.clone(),
        provider: service.provider,
        email,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id("  b11123021 \n"), "B11123021");
        assert_eq!(normalize_id("   "), "");
    }

    #[test]
    fn test_build_email_appends_domain() {
        assert_eq!(
            build_email("B11123021", "live.yuntech.edu.tw"),
            "B11123021@live.yuntech.edu.tw"
        );
    }

    #[test]
    fn test_build_email_keeps_typed_domain() {
        assert_eq!(
            build_email("B11123021@EXAMPLE.COM", "live.yuntech.edu.tw"),
            "B11123021@EXAMPLE.COM"
        );
    }

    #[test]
    fn test_build_google_email_replaces_domain() {
        assert_eq!(
            build_google_email("B11123021@LIVE.YUNTECH.EDU.TW", "gemail.yuntech.edu.tw"),
            "B11123021@gemail.yuntech.edu.tw"
        );
        assert_eq!(
            build_google_email("B11123021", "gemail.yuntech.edu.tw"),
            "B11123021@gemail.yuntech.edu.tw"
        );
    }

    #[test]
    fn test_onedrive_url() {
        let url = build_onedrive_url("B11123021@live.yuntech.edu.tw", "liveyuntechedu");
        assert_eq!(
            url,
            "https://liveyuntechedu-my.sharepoint.com/personal/b11123021_live_yuntech_edu_tw/_layouts/15/onedrive.aspx?login_hint=B11123021%40live.yuntech.edu.tw&view=1"
        );
    }

    #[test]
    fn test_microsoft_url_separator() {
        assert_eq!(
            build_microsoft_url("https://teams.cloud.microsoft/", "A@b.tw"),
            "https://teams.cloud.microsoft/?login_hint=A%40b.tw"
        );
        assert_eq!(
            build_microsoft_url("https://app.powerbi.com/home?tab=1", "A@b.tw"),
            "https://app.powerbi.com/home?tab=1&login_hint=A%40b.tw"
        );
    }

    #[test]
    fn test_google_url_encodes_continue() {
        assert_eq!(
            build_google_url("B1@gemail.yuntech.edu.tw", "https://mail.google.com/"),
            "https://accounts.google.com/AccountChooser?Email=B1%40gemail.yuntech.edu.tw&continue=https%3A%2F%2Fmail.google.com%2F"
        );
    }

    #[test]
    fn test_resolve_microsoft_service() {
        let catalog = Catalog::builtin();
        let outlook = catalog.find("outlook").unwrap();

        let redirect = resolve(outlook, " b11123021 ", &Domains::default()).unwrap();
        assert_eq!(redirect.email, "B11123021@live.yuntech.edu.tw");
        assert_eq!(
            redirect.url,
            "https://outlook.cloud.microsoft/mail/?login_hint=B11123021%40live.yuntech.edu.tw"
        );
        assert_eq!(redirect.provider, Provider::Microsoft);
    }

    #[test]
    fn test_resolve_onedrive_uses_prefix() {
        let catalog = Catalog::builtin();
        let domains = Domains {
            sharepoint_prefix: "contoso".into(),
            ..Domains::default()
        };

        let redirect = resolve(catalog.find("onedrive").unwrap(), "s1", &domains).unwrap();
        assert!(redirect
            .url
            .starts_with("https://contoso-my.sharepoint.com/personal/s1_live_yuntech_edu_tw/"));
    }

    #[test]
    fn test_resolve_google_strips_typed_domain() {
        let catalog = Catalog::builtin();
        let redirect = resolve(
            catalog.find("gmail").unwrap(),
            "b11123021@live.yuntech.edu.tw",
            &Domains::default(),
        )
        .unwrap();

        assert_eq!(redirect.email, "B11123021@gemail.yuntech.edu.tw");
        assert!(redirect.url.starts_with(GOOGLE_ACCOUNT_CHOOSER));
    }

    #[test]
    fn test_resolve_rejects_blank_id() {
        let catalog = Catalog::builtin();
        let err = resolve(catalog.default_service(), "  ", &Domains::default()).unwrap_err();
        assert!(matches!(err, Error::MissingId));
    }

    #[test]
    fn test_resolve_rejects_google_onedrive() {
        let service = Service {
            key: "bogus".into(),
            name: "Bogus".into(),
            description: String::new(),
            provider: Provider::Google,
            target: Target::OneDrive,
        };

        let err = resolve(&service, "B1", &Domains::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidService(_)));
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("MS".parse::<Provider>().unwrap(), Provider::Microsoft);
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert!("yahoo".parse::<Provider>().is_err());
    }

    #[test]
    fn test_encoding_of_reserved_and_non_ascii() {
        assert_eq!(
            build_microsoft_url("https://teams.cloud.microsoft/", "a+b c@x.tw"),
            "https://teams.cloud.microsoft/?login_hint=a%2Bb%20c%40x.tw"
        );
        assert_eq!(
            build_microsoft_url("https://teams.cloud.microsoft/", "學生@x.tw"),
            "https://teams.cloud.microsoft/?login_hint=%E5%AD%B8%E7%94%9F%40x.tw"
        );
        assert_eq!(
            build_google_url("B1@g.tw", "https://drive.google.com/?usp=a&b=1"),
            "https://accounts.google.com/AccountChooser?Email=B1%40g.tw&continue=https%3A%2F%2Fdrive.google.com%2F%3Fusp%3Da%26b%3D1"
        );
    }

    #[test]
    fn test_sub_delims_are_escaped() {
        // Stricter than encodeURIComponent, which keeps !'()* as-is
        assert_eq!(
            build_microsoft_url("https://word.cloud.microsoft/", "p(1)!*'"),
            "https://word.cloud.microsoft/?login_hint=p%281%29%21%2A%27"
        );
        assert_eq!(
            build_onedrive_url("p(1)!*'@x.tw", "contoso"),
            "https://contoso-my.sharepoint.com/personal/p(1)!*'_x_tw/_layouts/15/onedrive.aspx?login_hint=p%281%29%21%2A%27%40x.tw&view=1"
        );
    }
}
