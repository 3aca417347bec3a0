use clubsite_core::share_query;

pub(crate) fn current_search() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().search().unwrap_or_default()
}

/// Base URL that share links are built against. A build-time value wins over
/// the address the page was actually served from.
pub(crate) fn public_base_url() -> Option<String> {
    if let Some(raw) = option_env!("CLUBSITE_PUBLIC_URL")
        .or(option_env!("TRUNK_PUBLIC_CLUBSITE_URL"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    let window = web_sys::window()?;
    let location = window.location();
    let origin = location.origin().ok()?;
    if origin.trim().is_empty() || origin == "null" {
        return None;
    }
    let path = location.pathname().unwrap_or_default();
    Some(format!("{origin}{path}"))
}

pub(crate) fn share_url(name: &str) -> String {
    let query = share_query(name);
    match public_base_url() {
        Some(base) => build_share_url(&base, &query),
        None => query,
    }
}

fn build_share_url(base: &str, query: &str) -> String {
    let base = base.split(['?', '#']).next().unwrap_or(base);
    format!("{base}{query}")
}

#[cfg(test)]
mod tests {
    use super::build_share_url;

    #[test]
    fn share_url_replaces_existing_query_and_hash() {
        assert_eq!(
            build_share_url("https://club.example/?project=old#teams", "?project=Rover"),
            "https://club.example/?project=Rover"
        );
        assert_eq!(
            build_share_url("https://club.example/site/", "?project=Rover"),
            "https://club.example/site/?project=Rover"
        );
    }
}
