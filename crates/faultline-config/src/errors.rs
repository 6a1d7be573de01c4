use serde::Deserialize;

/// How failed requests are turned into responses
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Format name asked of the content negotiator before rendering a page
    #[serde(default = "default_page_format")]
    pub page_format: String,
    /// When false, clients always receive a structured body
    #[serde(default = "default_render_pages")]
    pub render_pages: bool,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            page_format: default_page_format(),
            render_pages: true,
        }
    }
}

fn default_page_format() -> String {
    "html".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_render_pages() -> bool {
    true
}
