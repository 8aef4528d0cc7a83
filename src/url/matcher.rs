/// Checks whether a landing URL begins with the required prefix
///
/// The prefix is compared byte-for-byte, so scheme, host and path must all
/// match exactly, including case.
///
/// # Arguments
///
/// * `url` - The user-supplied landing URL
/// * `prefix` - The required prefix, e.g. `https://www.cruisetimetables.com/cruises-to-`
///
/// # Returns
///
/// * `true` - If the URL starts with the prefix
/// * `false` - Otherwise
///
/// # Examples
///
/// ```
/// use cruise_calendar::url::is_valid_landing_url;
///
/// let prefix = "http://127.0.0.1:8080/cruises-to-";
/// assert!(is_valid_landing_url("http://127.0.0.1:8080/cruises-to-malta.html", prefix));
/// assert!(!is_valid_landing_url("http://127.0.0.1:8080/ships/malta.html", prefix));
/// ```
pub fn is_valid_landing_url(url: &str, prefix: &str) -> bool {
    !prefix.is_empty() && url.starts_with(prefix)
}
