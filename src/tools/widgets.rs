//! Widget Tools
//!
//! Registers embeddable calculator widgets and renders their HTML embed code.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::Widget;
use crate::store::WidgetRepository;

/// Theme used when neither the request nor the widget names one
pub const DEFAULT_THEME: &str = "default";

/// Script that bootstraps the widget on the embedding page
pub const LOADER_SCRIPT_PATH: &str = "/static/js/widget.js";

/// Response for get_widget_embed_code
#[derive(Debug, Serialize)]
pub struct EmbedCodeResponse {
    pub widget_key: String,
    pub theme: String,
    pub embed_code: String,
}

/// Response for delete_widget
#[derive(Debug, Serialize)]
pub struct WidgetDeleteResponse {
    pub success: bool,
    pub deleted_id: i64,
}

/// Data for registering a widget
#[derive(Debug, Clone)]
pub struct WidgetRegistration {
    pub key: String,
    pub name: String,
    pub theme: Option<String>,
    pub config: Option<Map<String, Value>>,
    pub allowed_domains: Option<Vec<String>>,
}

/// Register a new widget
pub fn register_widget(
    repo: &dyn WidgetRepository,
    data: WidgetRegistration,
) -> Result<Widget, String> {
    let key = data.key.trim();
    if key.is_empty() {
        return Err("Widget key cannot be empty".to_string());
    }
    let name = data.name.trim();
    if name.is_empty() {
        return Err("Widget name cannot be empty".to_string());
    }

    let now = chrono::Utc::now();
    let mut widget = Widget::new(key, name);
    widget.theme = data.theme;
    widget.config = data.config;
    widget.allowed_domains = data.allowed_domains;
    widget.created_at = Some(now);
    widget.updated_at = Some(now);

    let saved = repo
        .save(widget)
        .map_err(|e| format!("Failed to register widget: {}", e))?;

    tracing::info!(id = ?saved.id, key = %saved.key, "registered widget");
    Ok(saved)
}

/// List all widgets
pub fn list_widgets(repo: &dyn WidgetRepository) -> Result<Vec<Widget>, String> {
    repo.get_all()
        .map_err(|e| format!("Failed to list widgets: {}", e))
}

/// Delete a widget. Returns Ok(None) if it does not exist.
pub fn delete_widget(
    repo: &dyn WidgetRepository,
    id: i64,
) -> Result<Option<WidgetDeleteResponse>, String> {
    let deleted = repo
        .delete(id)
        .map_err(|e| format!("Failed to delete widget: {}", e))?;

    Ok(deleted.then(|| WidgetDeleteResponse {
        success: true,
        deleted_id: id,
    }))
}

/// Render the HTML snippet that embeds a widget on `domain`.
///
/// `theme` and `config` override the widget's stored values; empty overrides
/// count as absent. Fails for unknown keys and for domains outside the
/// widget's allowlist.
pub fn get_widget_embed_code(
    repo: &dyn WidgetRepository,
    widget_key: &str,
    domain: &str,
    theme: Option<&str>,
    config: Option<&Map<String, Value>>,
) -> Result<EmbedCodeResponse, String> {
    let widget = repo
        .get_by_key(widget_key)
        .map_err(|e| format!("Failed to look up widget: {}", e))?
        .ok_or_else(|| format!("Invalid widget key: {}", widget_key))?;

    if !widget.allows_domain(domain) {
        tracing::warn!(key = %widget_key, domain, "embed refused for domain");
        return Err(format!("Domain not allowed: {}", domain));
    }

    let theme = theme
        .filter(|t| !t.is_empty())
        .or(widget.theme.as_deref().filter(|t| !t.is_empty()))
        .unwrap_or(DEFAULT_THEME);

    let config = config
        .filter(|c| !c.is_empty())
        .or(widget.config.as_ref().filter(|c| !c.is_empty()))
        .cloned()
        .unwrap_or_default();

    let config_json = serde_json::to_string(&Value::Object(config))
        .map_err(|e| format!("Failed to serialize widget config: {}", e))?;

    let embed_code = render_embed(widget_key, theme, &config_json);

    Ok(EmbedCodeResponse {
        widget_key: widget_key.to_string(),
        theme: theme.to_string(),
        embed_code,
    })
}

fn render_embed(widget_key: &str, theme: &str, config_json: &str) -> String {
    let key = html_escape::encode_quoted_attribute(widget_key);
    let theme = html_escape::encode_quoted_attribute(theme);
    let config = html_escape::encode_quoted_attribute(config_json);

    format!(
        r#"<div id="widget-{key}" class="widget-container">
    <script type="application/json" class="widget-config">
        {config}
    </script>
    <script>
        (function() {{
            var script = document.createElement('script');
            script.src = '{loader}';
            script.onload = function() {{
                if (window.WidgetLoader) {{
                    window.WidgetLoader.init({{
                        key: '{key}',
                        theme: '{theme}',
                        config: {config},
                        container: 'widget-{key}'
                    }});
                }}
            }};
            document.head.appendChild(script);
        }})();
    </script>
</div>"#,
        key = key,
        theme = theme,
        config = config,
        loader = LOADER_SCRIPT_PATH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryWidgetRepository;

    fn registration(key: &str, domains: Option<Vec<&str>>) -> WidgetRegistration {
        WidgetRegistration {
            key: key.to_string(),
            name: "Dough Calculator".to_string(),
            theme: None,
            config: None,
            allowed_domains: domains.map(|d| d.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_register_assigns_id() {
        let repo = InMemoryWidgetRepository::new();
        let widget = register_widget(&repo, registration("calc", None)).unwrap();
        assert_eq!(widget.id, Some(1));
        assert!(widget.created_at.is_some());
        assert!(register_widget(&repo, registration(" ", None)).is_err());
    }

    #[test]
    fn test_unknown_key() {
        let repo = InMemoryWidgetRepository::new();
        let err = get_widget_embed_code(&repo, "nope", "example.com", None, None).unwrap_err();
        assert_eq!(err, "Invalid widget key: nope");
    }

    #[test]
    fn test_domain_not_allowed() {
        let repo = InMemoryWidgetRepository::new();
        register_widget(&repo, registration("calc", Some(vec!["*.pizza.test"]))).unwrap();

        let err = get_widget_embed_code(&repo, "calc", "https://evil.test", None, None).unwrap_err();
        assert_eq!(err, "Domain not allowed: https://evil.test");
        assert!(get_widget_embed_code(&repo, "calc", "https://shop.pizza.test:443", None, None).is_ok());
    }

    #[test]
    fn test_theme_and_config_resolution() {
        let repo = InMemoryWidgetRepository::new();
        let mut reg = registration("calc", None);
        reg.theme = Some("dark".to_string());
        register_widget(&repo, reg).unwrap();

        let stored = get_widget_embed_code(&repo, "calc", "a.test", None, None).unwrap();
        assert_eq!(stored.theme, "dark");
        assert!(stored.embed_code.contains("theme: 'dark'"));
        assert!(stored.embed_code.contains("config: {}"));

        let overridden = get_widget_embed_code(&repo, "calc", "a.test", Some("light"), None).unwrap();
        assert_eq!(overridden.theme, "light");

        let blank = get_widget_embed_code(&repo, "calc", "a.test", Some(""), None).unwrap();
        assert_eq!(blank.theme, "dark");
    }

    #[test]
    fn test_default_theme() {
        let repo = InMemoryWidgetRepository::new();
        register_widget(&repo, registration("calc", None)).unwrap();
        let resp = get_widget_embed_code(&repo, "calc", "a.test", None, None).unwrap();
        assert_eq!(resp.theme, DEFAULT_THEME);
        assert!(resp.embed_code.starts_with(r#"<div id="widget-calc" class="widget-container">"#));
        assert!(resp.embed_code.contains(LOADER_SCRIPT_PATH));
    }

    #[test]
    fn test_config_is_escaped() {
        let repo = InMemoryWidgetRepository::new();
        register_widget(&repo, registration("calc", None)).unwrap();

        let mut config = Map::new();
        config.insert("title".to_string(), Value::String("</script><b>".to_string()));
        let resp = get_widget_embed_code(&repo, "calc", "a.test", None, Some(&config)).unwrap();

        assert!(!resp.embed_code.contains("</script><b>"));
        assert!(resp.embed_code.contains("&lt;/script&gt;&lt;b&gt;"));
        assert!(resp.embed_code.contains("&quot;title&quot;"));
    }
}
