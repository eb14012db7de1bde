use web_sys::window;

const DEV_API_BASE: &str = "http://127.0.0.1:8080";

pub fn get_api_base_url() -> String {
    // Build-time override, e.g. STARGIFT_API_BASE=https://api.example.com trunk build
    if let Some(base) = option_env!("STARGIFT_API_BASE") {
        if !base.is_empty() {
            return base.trim_end_matches('/').to_string();
        }
    }

    if let Some(window) = window() {
        let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
        // Deployed behind the same origin as the bot API
        if protocol == "https:" {
            return String::new();
        }
    }

    DEV_API_BASE.to_string()
}
