//! Turn a URL into a [Page]. Requires the `fetch` feature.
use crate::{Error, Page};

/// Fetch `url` with a blocking GET request and extract a page from the response body.
///
/// The returned page carries the URL and the raw HTML. Bytes that are not valid UTF-8 are
/// replaced, no encoding detection takes place.
pub fn fetch(url: &str) -> Result<Page, Error> {
    log::debug!("fetching {}", url);

    let fetch_error = |source| Error::Fetch {
        url: url.to_owned(),
        source,
    };

    let response = reqwest::blocking::get(url).map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(fetch_error)?;
    log::debug!("fetched {} bytes from {}", body.len(), url);

    let html = String::from_utf8_lossy(&body).into_owned();
    let mut page = Page::parse(&html);
    page.url = url.to_owned();
    page.html = html;
    Ok(page)
}
