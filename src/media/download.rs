//! Audio stream download with progress bar.

use futures_util::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::TrackInfo;
use crate::config::RunSettings;
use crate::error::{Error, Result};
use crate::output::progress;

/// Build the HTTP client used for audio streams.
///
/// A stream is only aborted when it stops delivering bytes for
/// `read_timeout`; a cap on the whole transfer applies only when
/// `request_timeout` is set.
///
/// # Errors
///
/// Returns [`Error::Internal`] if the client cannot be created.
pub fn build_client(settings: &RunSettings) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(settings.user_agent.clone())
        .connect_timeout(settings.connect_timeout)
        .read_timeout(settings.read_timeout);

    if let Some(limit) = settings.request_timeout {
        builder = builder.timeout(limit);
    }

    builder.build().map_err(|e| Error::Internal {
        message: format!("Failed to create HTTP client: {e}"),
    })
}

/// Stream `track`'s audio bytes into `dest`.
///
/// Sends the collaborator-supplied HTTP headers along with the client's
/// configured User-Agent.
pub async fn download_stream(
    client: &Client,
    track: &TrackInfo,
    dest: &Path,
    show_progress: bool,
) -> Result<()> {
    let failed = |source: Box<dyn std::error::Error + Send + Sync>| Error::DownloadFailed {
        id: track.id.to_string(),
        source,
    };

    let mut request = client.get(&track.stream_url);
    for (name, value) in &track.http_headers {
        if !name.eq_ignore_ascii_case("user-agent") {
            request = request.header(name, value);
        }
    }

    let response = request.send().await.map_err(|e| failed(Box::new(e)))?;

    if !response.status().is_success() {
        return Err(failed(format!("HTTP {}", response.status()).into()));
    }

    let total_size = response.content_length().unwrap_or(0);
    let pb = progress::create_download_progress(total_size, &track.title, show_progress);

    let mut file = File::create(dest).await.map_err(|e| failed(Box::new(e)))?;
    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| failed(Box::new(e)))?;

        file.write_all(&chunk)
            .await
            .map_err(|e| failed(Box::new(e)))?;

        downloaded += chunk.len() as u64;
        progress::set_position(pb.as_ref(), downloaded);
    }

    file.flush().await.map_err(|e| failed(Box::new(e)))?;
    progress::finish_and_clear(pb);

    Ok(())
}
