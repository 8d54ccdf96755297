//! Map-viewer URL construction.
//!
//! The public map viewer can highlight traversed rail routes. This
//! module is a pure formatter: given the route names from an itinerary,
//! it produces the embeddable viewer URL. Invoking it (and rendering the
//! result) is the presentation layer's business; nothing here touches
//! the network.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const BASE_URL: &str =
    "https://public.tableau.com/views/MinecraftRealmsAioniaMapTest/AioniaWayfinder?Show%20Trains=1&";

const EMBED_PARAMS: &str = "&:embed=yes&:showVizHome=no&:host_url=https%3A%2F%2Fpublic.tableau.com%2F&:embed_code_version=3&:tabs=no&:toolbar=yes&:showAppBanner=false&:display_spinner=no";

/// Escaping for the `Path` parameter: everything but ASCII
/// alphanumerics, the unreserved marks, and the comma that separates
/// route names.
const PATH_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',');

/// Build the embeddable map-viewer URL for a set of rail route names.
///
/// Returns `None` when no rail routes were traversed (there is nothing
/// to highlight).
///
/// # Examples
///
/// ```
/// use wayfinder_server::mapview::route_url;
///
/// let url = route_url(&["West Line".to_string()]).unwrap();
/// assert!(url.contains("Path=West%20Line&"));
/// assert!(route_url(&[]).is_none());
/// ```
pub fn route_url(route_names: &[String]) -> Option<String> {
    if route_names.is_empty() {
        return None;
    }

    let joined = route_names.join(",");
    let encoded = utf8_percent_encode(&joined, PATH_PARAM);
    Some(format!("{BASE_URL}Path={encoded}{EMBED_PARAMS}"))
}
