//! Upload progress listener

/// Receives byte counts while an archive is being uploaded
///
/// Called on the task performing the upload, before the upload call returns.
pub trait UploadProgress: Send + Sync {
    /// `delta` bytes were just handed to the transport; `written` of `total` are now sent
    fn handle_bytes_written(&self, delta: u64, written: u64, total: u64);
}

impl<F> UploadProgress for F
where
    F: Fn(u64, u64, u64) + Send + Sync,
{
    fn handle_bytes_written(&self, delta: u64, written: u64, total: u64) {
        self(delta, written, total)
    }
}
