use url::Url;

const WWW_PREFIX: &str = "www.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Web,
    Email,
}

/// Hostname of `raw` without a single leading `www.`.
///
/// Anything that does not parse as an absolute URL with a host comes back
/// unchanged, so a bad href degrades to showing the raw string.
pub fn abbreviate_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw.trim()) else {
        return raw.to_string();
    };
    match url.host_str() {
        Some(host) if !host.is_empty() => host
            .strip_prefix(WWW_PREFIX)
            .unwrap_or(host)
            .to_string(),
        _ => raw.to_string(),
    }
}

pub fn link_kind(href: &str) -> LinkKind {
    let is_mailto = href
        .trim()
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("mailto:"));
    if is_mailto {
        LinkKind::Email
    } else {
        LinkKind::Web
    }
}
