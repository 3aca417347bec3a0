use url::form_urlencoded;

pub const DEEP_LINK_PARAM: &str = "project";

/// First value of `key` in a search string. The leading `?` is optional.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    if raw.is_empty() {
        return None;
    }
    form_urlencoded::parse(raw.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

pub fn deep_link_name(search: &str) -> Option<String> {
    query_param(search, DEEP_LINK_PARAM)
}

pub fn share_query(name: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair(DEEP_LINK_PARAM, name)
        .finish();
    format!("?{encoded}")
}
