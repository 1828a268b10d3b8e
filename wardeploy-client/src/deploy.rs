//! Archive deployment endpoint

use bytes::Bytes;
use futures::StreamExt;
use reqwest::Body;
use reqwest::multipart::{Form, Part};
use tokio::sync::mpsc;
use tracing::{debug, info};
use wardeploy_core::domain::account::Account;
use wardeploy_core::dto::deploy::DeployReceipt;

use crate::PlatformClient;
use crate::error::{ClientError, Result};
use crate::progress::UploadProgress;
use crate::remote::DeployRequest;

/// Size of the chunks the archive is streamed in
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

impl PlatformClient {
    /// Upload a web archive and deploy it under an application
    ///
    /// The archive is streamed in chunks; `progress` is notified on the
    /// calling task each time a chunk is handed to the transport, and all
    /// notifications are delivered before this method returns.
    pub(crate) async fn deploy_archive(
        &self,
        account: &Account,
        request: &DeployRequest,
        progress: &dyn UploadProgress,
    ) -> Result<DeployReceipt> {
        if request.application_id.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "application id cannot be empty".to_string(),
            ));
        }

        let data = Bytes::from(tokio::fs::read(&request.war_path).await?);
        let total = data.len() as u64;
        let file_name = request
            .war_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archive.war".to_string());

        let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
        let chunks = (0..data.len())
            .step_by(UPLOAD_CHUNK_SIZE)
            .map(move |start| data.slice(start..data.len().min(start + UPLOAD_CHUNK_SIZE)));
        let stream = futures::stream::iter(chunks).map(move |chunk| {
            // The receiver outlives the request, so a failed send only means we are done.
            let _ = tx.send(chunk.len() as u64);
            Ok::<_, std::io::Error>(chunk)
        });

        let archive = Part::stream_with_length(Body::wrap_stream(stream), total)
            .file_name(file_name)
            .mime_str("application/java-archive")?;
        let form = Form::new()
            .text("application_id", request.application_id.clone())
            .text("environment", request.environment.clone())
            .text("description", request.description.clone())
            .text("archive_name", request.archive_label.clone())
            .part("archive", archive);

        let url = format!("{}/v1/applications/deploy", self.base_url);
        debug!(
            "POST {} (application {}, {} bytes)",
            url, request.application_id, total
        );

        let send = self
            .client
            .post(&url)
            .basic_auth(&account.api_key, Some(&account.secret_key))
            .multipart(form)
            .send();
        tokio::pin!(send);

        let mut written = 0u64;
        let response = loop {
            tokio::select! {
                biased;
                Some(delta) = rx.recv() => {
                    written += delta;
                    progress.handle_bytes_written(delta, written, total);
                }
                response = &mut send => break response?,
            }
        };
        while let Ok(delta) = rx.try_recv() {
            written += delta;
            progress.handle_bytes_written(delta, written, total);
        }

        let receipt: DeployReceipt = self.handle_response(response).await?;
        info!(
            "Deployed {} to application {} (deployment {})",
            request.archive_label, request.application_id, receipt.id
        );
        Ok(receipt)
    }
}
