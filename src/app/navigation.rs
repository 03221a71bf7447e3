//! Usage: Keeps the main webview on the bundled frontend; other sites go to the browser.

use tauri::Url;
use tauri_plugin_opener::OpenerExt;

/// Host the bundled frontend is served from on Windows (`http(s)://tauri.localhost`).
/// macOS and Linux use the `tauri://` scheme instead.
const APP_HOST: &str = "tauri.localhost";

pub(crate) fn opens_externally(url: &Url) -> bool {
    match url.scheme() {
        "http" | "https" => url.host_str() != Some(APP_HOST),
        "mailto" => true,
        _ => false,
    }
}

pub(crate) fn open_externally(app: &tauri::AppHandle, url: &Url) {
    if !opens_externally(url) {
        tracing::debug!(%url, "in-app popup blocked");
        return;
    }

    if let Err(err) = app.opener().open_url(url.as_str(), None::<&str>) {
        tracing::warn!(%url, "failed to open link externally: {}", err);
    }
}

/// Navigation guard for the main window: `false` keeps the webview where it is.
pub(crate) fn allow_navigation(app: &tauri::AppHandle, url: &Url) -> bool {
    if !opens_externally(url) {
        return true;
    }

    open_externally(app, url);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("url")
    }

    #[test]
    fn bundled_frontend_stays_in_the_webview() {
        for raw in [
            "tauri://localhost/index.html",
            "http://tauri.localhost/",
            "https://tauri.localhost/index.html#settings",
            "about:blank",
        ] {
            assert!(!opens_externally(&url(raw)), "{raw}");
        }
    }

    #[test]
    fn other_sites_and_mail_links_open_externally() {
        for raw in [
            "https://example.com/docs",
            "http://localhost:8080/",
            "mailto:someone@example.com",
        ] {
            assert!(opens_externally(&url(raw)), "{raw}");
        }
    }
}
