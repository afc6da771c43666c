//! What happens in the browser when the shopper picks another store view.

use contracts::shared::store_config::StoreConfig;

pub const STORE_VIEW_CODE_KEY: &str = "store_view_code";
pub const STORE_VIEW_CURRENCY_KEY: &str = "store_view_currency";
pub const STORE_VIEW_MEDIA_URL_KEY: &str = "store_view_secure_base_media_url";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchSettings {
    /// Store codes are the first path segment of storefront URLs.
    pub use_store_code_in_url: bool,
}

impl SwitchSettings {
    /// Read `USE_STORE_CODE_IN_URL` from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_flag(option_env!("USE_STORE_CODE_IN_URL"))
    }

    fn from_flag(flag: Option<&str>) -> Self {
        Self {
            use_store_code_in_url: matches!(flag, Some("true") | Some("1")),
        }
    }
}

/// Path and query string of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub pathname: String,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Reload,
    Assign(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchPlan {
    pub storage: Vec<(&'static str, String)>,
    pub navigation: Navigation,
}

impl SwitchPlan {
    pub fn build(
        target: &StoreConfig,
        current_store_code: Option<&str>,
        location: &PageLocation,
        settings: SwitchSettings,
    ) -> Self {
        let storage = vec![
            (STORE_VIEW_CODE_KEY, target.store_code.clone()),
            (
                STORE_VIEW_CURRENCY_KEY,
                target.default_display_currency_code.clone(),
            ),
            (STORE_VIEW_MEDIA_URL_KEY, target.secure_base_media_url.clone()),
        ];

        let navigation = if settings.use_store_code_in_url {
            let path = rewrite_path(&location.pathname, current_store_code, &target.store_code);
            Navigation::Assign(format!("{}{}", path, location.search))
        } else {
            Navigation::Reload
        };

        Self {
            storage,
            navigation,
        }
    }
}

/// Swap the leading `/{current}` segment for `/{target}`, or prefix
/// `/{target}` when the path does not start with the current code.
fn rewrite_path(pathname: &str, current_store_code: Option<&str>, target: &str) -> String {
    let pathname = if pathname.is_empty() { "/" } else { pathname };

    if let Some(current) = current_store_code.filter(|c| !c.is_empty()) {
        let prefix = format!("/{}", current);
        if let Some(rest) = pathname.strip_prefix(&prefix) {
            if rest.is_empty() || rest.starts_with('/') {
                return format!("/{}{}", target, rest);
            }
        }
    }

    format!("/{}{}", target, pathname)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet() -> StoreConfig {
        let mut store = StoreConfig::new("outlet", "Outlet");
        store.default_display_currency_code = "EUR".into();
        store.secure_base_media_url = "https://cdn.example.com/outlet/".into();
        store
    }

    fn location(pathname: &str, search: &str) -> PageLocation {
        PageLocation {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    const IN_URL: SwitchSettings = SwitchSettings {
        use_store_code_in_url: true,
    };

    #[test]
    fn test_persists_store_view_entries() {
        let plan = SwitchPlan::build(
            &outlet(),
            Some("default"),
            &location("/shoes.html", ""),
            SwitchSettings::default(),
        );

        assert_eq!(
            plan.storage,
            vec![
                (STORE_VIEW_CODE_KEY, "outlet".to_string()),
                (STORE_VIEW_CURRENCY_KEY, "EUR".to_string()),
                (
                    STORE_VIEW_MEDIA_URL_KEY,
                    "https://cdn.example.com/outlet/".to_string()
                ),
            ]
        );
        assert_eq!(plan.navigation, Navigation::Reload);
    }

    #[test]
    fn test_replaces_current_code_segment() {
        let plan = SwitchPlan::build(
            &outlet(),
            Some("default"),
            &location("/default/shoes.html", "?page=2"),
            IN_URL,
        );
        assert_eq!(
            plan.navigation,
            Navigation::Assign("/outlet/shoes.html?page=2".into())
        );
    }

    #[test]
    fn test_prefixes_when_code_not_in_path() {
        let plan = SwitchPlan::build(&outlet(), Some("default"), &location("/shoes.html", ""), IN_URL);
        assert_eq!(plan.navigation, Navigation::Assign("/outlet/shoes.html".into()));
    }

    #[test]
    fn test_does_not_match_partial_segment() {
        let plan = SwitchPlan::build(
            &outlet(),
            Some("de"),
            &location("/default/shoes.html", ""),
            IN_URL,
        );
        assert_eq!(
            plan.navigation,
            Navigation::Assign("/outlet/default/shoes.html".into())
        );
    }

    #[test]
    fn test_root_paths() {
        assert_eq!(rewrite_path("", None, "outlet"), "/outlet/");
        assert_eq!(rewrite_path("/", Some("default"), "outlet"), "/outlet/");
        assert_eq!(rewrite_path("/default", Some("default"), "outlet"), "/outlet");
    }

    #[test]
    fn test_settings_flag() {
        assert!(SwitchSettings::from_flag(Some("true")).use_store_code_in_url);
        assert!(SwitchSettings::from_flag(Some("1")).use_store_code_in_url);
        assert!(!SwitchSettings::from_flag(Some("false")).use_store_code_in_url);
        assert!(!SwitchSettings::from_flag(None).use_store_code_in_url);
    }
}
