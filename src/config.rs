#[cfg(debug_assertions)]
pub fn get_content_api_url() -> &'static str {
    "http://localhost:5678"  // Local n8n instance when developing
}

#[cfg(not(debug_assertions))]
pub fn get_content_api_url() -> &'static str {
    "https://n8nottobon.duckdns.org"  // Production content service
}

// Workflow id of the by-slug blog endpoint on the content service.
pub const BLOG_BY_SLUG_WORKFLOW: &str = "82f25359-8c38-4f01-b544-19689dba0649";
