//! Hand a sign-in link to the system browser

use crate::error::{CampuslinkError, Result};

/// Open `url` in the default browser, which shows it in a new tab
pub fn open_in_new_tab(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(CampuslinkError::BrowserError(format!(
            "refusing to open non-web URL '{}'",
            url
        )));
    }

    tracing::debug!("Opening {}", url);
    open::that(url).map_err(|e| CampuslinkError::BrowserError(e.to_string()))
}
