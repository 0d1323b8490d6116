use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_UPDATE_PATH: &str = "/editar";
pub(crate) const DEFAULT_DELETE_PATH: &str = "/eliminar";
pub(crate) const DEFAULT_ALERT_DISMISS_MS: u32 = 5_000;
pub(crate) const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Runtime settings for the page controller.
///
/// Read once at start-up from `window.ENV`, which the server template may
/// define before loading the module. Every key is optional.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageConfig {
    /// Origin the record endpoints live on. Empty means "same origin".
    pub api_url: String,
    pub update_path: String,
    pub delete_path: String,
    pub alert_dismiss_ms: u32,
    pub scroll_threshold_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            update_path: DEFAULT_UPDATE_PATH.to_string(),
            delete_path: DEFAULT_DELETE_PATH.to_string(),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl PageConfig {
    pub fn from_window() -> Self {
        let mut cfg = Self::default();

        let Some(window) = web_sys::window() else {
            return cfg;
        };

        if let Ok(origin) = window.location().origin() {
            cfg.api_url = origin;
        }

        let Some(env) = window.get("ENV") else {
            return cfg;
        };
        let env: JsValue = env.into();
        if env.is_undefined() || !env.is_object() {
            return cfg;
        }

        // Accept both `API_URL` and the lowercase spelling.
        if let Some(url) = env_string(&env, "API_URL").or_else(|| env_string(&env, "api_url")) {
            cfg.api_url = url;
        }
        if let Some(p) = env_string(&env, "UPDATE_PATH") {
            cfg.update_path = p;
        }
        if let Some(p) = env_string(&env, "DELETE_PATH") {
            cfg.delete_path = p;
        }
        if let Some(ms) = env_number(&env, "ALERT_DISMISS_MS") {
            if ms >= 0.0 {
                cfg.alert_dismiss_ms = ms as u32;
            }
        }
        if let Some(px) = env_number(&env, "SCROLL_THRESHOLD") {
            cfg.scroll_threshold_px = px;
        }

        cfg
    }

    pub fn update_url(&self, id: &str) -> String {
        join_url(&self.api_url, &self.update_path, id)
    }

    pub fn delete_url(&self, id: &str) -> String {
        join_url(&self.api_url, &self.delete_path, id)
    }
}

fn env_string(env: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(env, &key.into())
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.trim().is_empty())
}

fn env_number(env: &JsValue, key: &str) -> Option<f64> {
    let v = js_sys::Reflect::get(env, &key.into()).ok()?;
    v.as_f64()
        .or_else(|| v.as_string().and_then(|s| s.trim().parse::<f64>().ok()))
}

/// `origin` + `/path` + `/id`, with the id percent-encoded.
pub(crate) fn join_url(origin: &str, path: &str, id: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("{origin}/{}", urlencoding::encode(id))
    } else {
        format!("{origin}/{path}/{}", urlencoding::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_listing_page_routes() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.update_path, "/editar");
        assert_eq!(cfg.delete_path, "/eliminar");
        assert_eq!(cfg.alert_dismiss_ms, 5_000);
        assert_eq!(cfg.scroll_threshold_px, 50.0);
        assert!(cfg.api_url.is_empty());
    }

    #[test]
    fn test_urls_use_same_origin_when_api_url_empty() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.update_url("7"), "/editar/7");
        assert_eq!(cfg.delete_url("7"), "/eliminar/7");
    }

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:5000/", "/editar/", "12"),
            "http://localhost:5000/editar/12"
        );
        assert_eq!(join_url("http://h", "", "3"), "http://h/3");
    }

    #[test]
    fn test_join_url_encodes_identifier() {
        assert_eq!(join_url("http://h", "/eliminar", "a b/c"), "http://h/eliminar/a%20b%2Fc");
    }
}
