use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a year link found on the landing page against the site base URL
///
/// Links are normally root-relative (`/cruises-to-x-2024.html`), but absolute
/// links are accepted as-is. Only http(s) results are allowed. Root-relative
/// links replace any path on `base_url`, which is why the site config only
/// accepts a bare origin there.
///
/// # Arguments
///
/// * `base_url` - Scheme and host of the site, e.g. `https://www.cruisetimetables.com`
/// * `link` - The `href` taken from the year anchor
///
/// # Returns
///
/// * `Ok(Url)` - The absolute year page URL
/// * `Err(UrlError)` - The base or the joined URL is unusable
///
/// # Examples
///
/// ```
/// use cruise_calendar::url::resolve_year_url;
///
/// let url = resolve_year_url("https://www.cruisetimetables.com", "/cruises-to-malta-2024.html").unwrap();
/// assert_eq!(url.as_str(), "https://www.cruisetimetables.com/cruises-to-malta-2024.html");
/// ```
pub fn resolve_year_url(base_url: &str, link: &str) -> UrlResult<Url> {
    let base = Url::parse(base_url).map_err(|e| UrlError::Parse(e.to_string()))?;

    if base.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    let resolved = base
        .join(link.trim())
        .map_err(|e| UrlError::Parse(format!("{}: {}", link, e)))?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return Err(UrlError::InvalidScheme(resolved.scheme().to_string()));
    }

    Ok(resolved)
}
