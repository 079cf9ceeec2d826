//! Cookie & crumb acquisition for Yahoo endpoints.
//!
//! The handshake is best-effort: the timeseries endpoint answers without a
//! crumb, so a failed handshake is logged and the request goes out bare.

use crate::core::error::YfError;

impl super::YfClient {
    pub(crate) async fn ensure_credentials(&self) {
        // Fast path: the handshake already ran for this client (or a clone of it).
        if self.state.read().await.handshake_done {
            return;
        }

        let _guard = self.credential_fetch_lock.lock().await;

        // Double-check: another task might have finished the handshake while this one was waiting.
        if self.state.read().await.handshake_done {
            return;
        }

        let crumb = match self.fetch_crumb().await {
            Ok(crumb) => {
                tracing::debug!("acquired yahoo crumb");
                Some(crumb)
            }
            Err(e) => {
                tracing::warn!(error = %e, "crumb handshake failed; continuing without crumb");
                None
            }
        };

        let mut state = self.state.write().await;
        state.crumb = crumb;
        state.handshake_done = true;
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        let state = self.state.read().await;
        state.crumb.clone()
    }

    async fn fetch_crumb(&self) -> Result<String, YfError> {
        // The consent endpoint often answers 404 while still setting the cookie,
        // so its status is not checked. The cookie lands in the client's jar.
        self.http.get(self.cookie_url.clone()).send().await?;

        let url = self.crumb_url.clone();
        let resp = self.http.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(YfError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let crumb = resp.text().await?.trim().to_string();
        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(YfError::Data(format!("Received invalid crumb: {crumb}")));
        }

        Ok(crumb)
    }
}
