//! Service catalog
//!
//! The built-in Microsoft 365 and Google Workspace services, plus any extra
//! services declared in the config file.

use super::{Provider, Target};

/// A service the user can jump into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub key: String,
    pub name: String,
    pub description: String,
    pub provider: Provider,
    pub target: Target,
}

impl Service {
    fn builtin(key: &str, name: &str, description: &str, provider: Provider, url: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            provider,
            target: Target::Url(url.to_string()),
        }
    }

    /// Human-readable destination, used in listings
    pub fn target_label(&self) -> &str {
        match &self.target {
            Target::Url(url) => url,
            Target::OneDrive => "(personal OneDrive)",
        }
    }

    fn name_matches(&self, query: &str) -> bool {
        let squash = |s: &str| s.replace(' ', "").to_lowercase();
        squash(&self.name) == squash(query)
    }
}

const DEFAULT_SERVICE: &str = "outlook";

#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn builtin() -> Self {
        use Provider::{Google, Microsoft};

        let services = vec![
            Service::builtin(
                "apps",
                "Microsoft Apps",
                "App overview",
                Microsoft,
                "https://m365.cloud.microsoft/apps/",
            ),
            Service::builtin(
                "outlook",
                "Outlook",
                "Microsoft mail (Live)",
                Microsoft,
                "https://outlook.cloud.microsoft/mail/",
            ),
            Service {
                key: "onedrive".into(),
                name: "OneDrive".into(),
                description: "Microsoft cloud drive (1TB)".into(),
                provider: Microsoft,
                target: Target::OneDrive,
            },
            Service::builtin(
                "teams",
                "Teams",
                "Online meetings / classes",
                Microsoft,
                "https://teams.cloud.microsoft/",
            ),
            Service::builtin(
                "gmail",
                "GMail",
                "School GMail inbox",
                Google,
                "https://mail.google.com/",
            ),
            Service::builtin(
                "drive",
                "Google Drive",
                "Google cloud drive",
                Google,
                "https://drive.google.com/",
            ),
            Service::builtin(
                "word",
                "Word",
                "Documents",
                Microsoft,
                "https://word.cloud.microsoft/",
            ),
            Service::builtin(
                "excel",
                "Excel",
                "Spreadsheets",
                Microsoft,
                "https://excel.cloud.microsoft/",
            ),
            Service::builtin(
                "powerpoint",
                "PowerPoint",
                "Presentations",
                Microsoft,
                "https://powerpoint.cloud.microsoft/",
            ),
            Service::builtin(
                "powerbi",
                "Power BI",
                "Data analysis",
                Microsoft,
                "https://app.powerbi.com/",
            ),
        ];

        Self { services }
    }

    /// Built-in services with `custom` merged in. A custom service replaces a
    /// built-in one with the same key, otherwise it is appended.
    pub fn with_custom(custom: Vec<Service>) -> Self {
        let mut catalog = Self::builtin();

        for service in custom {
            match catalog
                .services
                .iter_mut()
                .find(|s| s.key.eq_ignore_ascii_case(&service.key))
            {
                Some(existing) => *existing = service,
                None => catalog.services.push(service),
            }
        }

        catalog
    }

    /// Look up by key or display name, ignoring case and spaces.
    /// A key match anywhere in the catalog wins over a name match.
    pub fn find(&self, query: &str) -> Option<&Service> {
        self.position(query).map(|i| &self.services[i])
    }

    /// Service used when none is named (Outlook)
    pub fn default_service(&self) -> &Service {
        self.find(DEFAULT_SERVICE).unwrap_or(&self.services[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn by_provider(&self, provider: Provider) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(move |s| s.provider == provider)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn position(&self, query: &str) -> Option<usize> {
        let query = query.trim();
        self.services
            .iter()
            .position(|s| s.key.eq_ignore_ascii_case(query))
            .or_else(|| self.services.iter().position(|s| s.name_matches(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_size() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "apps",
                "outlook",
                "onedrive",
                "teams",
                "gmail",
                "drive",
                "word",
                "excel",
                "powerpoint",
                "powerbi"
            ]
        );
    }

    #[test]
    fn test_find_by_key_or_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("OUTLOOK").unwrap().name, "Outlook");
        assert_eq!(catalog.find("power bi").unwrap().key, "powerbi");
        assert_eq!(catalog.find("GoogleDrive").unwrap().key, "drive");
        assert!(catalog.find("zoom").is_none());
    }

    #[test]
    fn test_default_is_outlook() {
        assert_eq!(Catalog::builtin().default_service().key, "outlook");
    }

    #[test]
    fn test_by_provider() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_provider(Provider::Google).count(), 2);
        assert_eq!(catalog.by_provider(Provider::Microsoft).count(), 8);
    }

    #[test]
    fn test_custom_services_merge() {
        let forms = Service {
            key: "forms".into(),
            name: "Forms".into(),
            description: "Surveys".into(),
            provider: Provider::Microsoft,
            target: Target::Url("https://forms.office.com/".into()),
        };
        let teams = Service {
            key: "Teams".into(),
            name: "Teams (classic)".into(),
            description: String::new(),
            provider: Provider::Microsoft,
            target: Target::Url("https://teams.microsoft.com/".into()),
        };

        let catalog = Catalog::with_custom(vec![forms, teams]);
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.position("forms"), Some(10));
        assert_eq!(
            catalog.find("teams").unwrap().target_label(),
            "https://teams.microsoft.com/"
        );
    }

    #[test]
    fn test_onedrive_label() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.find("onedrive").unwrap().target_label(),
            "(personal OneDrive)"
        );
    }

    #[test]
    fn test_custom_key_beats_builtin_name() {
        let custom_bi = Service {
            key: "power bi".into(),
            name: "Campus BI".into(),
            description: String::new(),
            provider: Provider::Microsoft,
            target: Target::Url("https://bi.example.edu/".into()),
        };

        let catalog = Catalog::with_custom(vec![custom_bi]);
        assert_eq!(catalog.len(), 11);
        assert_eq!(
            catalog.find("power bi").unwrap().target_label(),
            "https://bi.example.edu/"
        );
        assert_eq!(catalog.position("Power BI"), Some(10));
        // The built-in is still reachable by its own key
        assert_eq!(
            catalog.find("powerbi").unwrap().target_label(),
            "https://app.powerbi.com/"
        );
    }
}
