use crate::core::YfError;

/// Send a GET and read the body as text, mapping non-2xx statuses to [`YfError::Status`].
pub(crate) async fn get_text(
    client: &reqwest::Client,
    url: url::Url,
    endpoint: &str,
) -> Result<String, YfError> {
    tracing::debug!(endpoint, url = %url, "GET");
    let resp = client.get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(YfError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = resp.text().await?;
    tracing::trace!(endpoint, bytes = text.len(), "response body received");
    Ok(text)
}
