#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
///
/// With `test-mode` and `TS_RECORD=1`, the body is also written as a fixture named after
/// `endpoint` and `key` (see `fixtures`). `TS_DEBUG=1` reports each written file.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("TS_RECORD").ok().as_deref() == Some("1") {
            match crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text) {
                Ok(Some(path)) if env::var("TS_DEBUG").ok().as_deref() == Some("1") => {
                    eprintln!("TS_RECORD: wrote {}", path.display());
                }
                Ok(_) => {}
                Err(e) => eprintln!("TS_RECORD: failed to write {_endpoint} fixture for {_key}: {e}"),
            }
        }
    }

    Ok(text)
}
