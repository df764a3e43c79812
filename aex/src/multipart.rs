//! Single-part `multipart/form-data` framing for document uploads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use once_cell::sync::Lazy;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use aex_core::time::now;
use aex_core::{Error, Result};

const CHUNK_SIZE: usize = 8192;

/// Document extensions the service accepts, mapped to their media types.
///
/// Lookups are case sensitive and keyed on the dotted extension. Anything
/// absent from the table resolves to an empty media type.
static CONTENT_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".jpeg", "image/jpeg"),
        (".jpg", "image/jpeg"),
        (".jp2", "image/jp2"),
        (".jpx", "image/jpx"),
        (".jpm", "image/jpm"),
        (".tiff", "image/tiff"),
        (".tif", "image/tiff"),
        (".png", "image/png"),
        (".gif", "image/gif"),
        (".bmp", "image/bmp"),
        (".pdf", "application/pdf"),
        (".mdi", "image/vnd.ms-modi"),
        (".zip", "application/zip"),
    ])
});

/// Generate a boundary for one upload.
///
/// A fixed tag followed by hex digits from a microsecond clock and a random
/// filler. Document content is never scanned for collisions with the
/// generated boundary.
pub fn new_boundary() -> String {
    format!(
        "---HTTPCLIENT-{:x}{:04x}",
        now().timestamp_micros(),
        rand::random::<u16>()
    )
}

/// Resolve a dotted file extension like `.pdf` to its media type.
///
/// Returns an empty string for extensions outside the supported table.
pub fn resolve_content_type(ext: &str) -> &'static str {
    CONTENT_TYPES.get(ext).copied().unwrap_or_default()
}

/// One document wrapped in a single-part `multipart/form-data` frame.
///
/// The exact encoded length is computed before any byte is produced so the
/// request can carry a correct `Content-Length`. The declared length and
/// the bytes actually written must agree or streaming fails.
#[derive(Debug)]
pub struct UploadBody {
    boundary: String,
    header: Bytes,
    trailer: Bytes,
    source: DocumentSource,
    total_length: u64,
}

#[derive(Debug)]
enum DocumentSource {
    Path(PathBuf),
    Bytes(Bytes),
}

impl UploadBody {
    /// Frame the file at `path`, naming the part after its base name.
    ///
    /// The file length is measured upfront. If the file changes size before
    /// [`UploadBody::stream`] finishes, streaming fails instead of sending
    /// a frame that contradicts its declared length.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::request_invalid(format!(
                    "document path {} has no usable file name",
                    path.display()
                ))
            })?
            .to_string();
        let content_length = tokio::fs::metadata(path)
            .await
            .map_err(|err| {
                Error::io(format!("cannot stat document {}", path.display())).with_source(err)
            })?
            .len();

        Ok(Self::assemble(
            filename,
            content_length,
            DocumentSource::Path(path.to_path_buf()),
        ))
    }

    /// Frame an in-memory document under the given file name.
    pub fn from_bytes(filename: &str, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        let content_length = content.len() as u64;
        Self::assemble(
            filename.to_string(),
            content_length,
            DocumentSource::Bytes(content),
        )
    }

    fn assemble(filename: String, content_length: u64, source: DocumentSource) -> Self {
        let boundary = new_boundary();
        let content_type = resolve_content_type(&extension_of(&filename));

        let header = Bytes::from(format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"uploadFile\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\
             \r\n"
        ));
        let trailer = Bytes::from(format!("\r\n--{boundary}--\r\n"));
        let total_length = header.len() as u64 + content_length + trailer.len() as u64;

        Self {
            boundary,
            header,
            trailer,
            source,
            total_length,
        }
    }

    /// The boundary token framing this upload.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Exact length of the encoded body in bytes.
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Write the frame into `sink`: part header, document content in
    /// bounded chunks, then the closing boundary.
    ///
    /// Returns the number of bytes written, which is checked against
    /// [`UploadBody::total_length`] before returning.
    pub async fn stream<W>(self, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        sink.write_all(&self.header).await?;
        let mut written = self.header.len() as u64;

        match self.source {
            DocumentSource::Bytes(content) => {
                sink.write_all(&content).await?;
                written += content.len() as u64;
            }
            DocumentSource::Path(path) => {
                let mut file = File::open(&path).await.map_err(|err| {
                    Error::io(format!("cannot open document {}", path.display())).with_source(err)
                })?;
                let mut buffer = [0u8; CHUNK_SIZE];
                loop {
                    let n = file.read(&mut buffer).await.map_err(|err| {
                        Error::io(format!("cannot read document {}", path.display()))
                            .with_source(err)
                    })?;
                    if n == 0 {
                        break;
                    }
                    sink.write_all(&buffer[..n]).await?;
                    written += n as u64;
                }
            }
        }

        sink.write_all(&self.trailer).await?;
        written += self.trailer.len() as u64;
        sink.flush().await?;

        if written != self.total_length {
            return Err(Error::unexpected(format!(
                "multipart frame drifted: wrote {written} bytes, declared {}",
                self.total_length
            )));
        }

        Ok(written)
    }

    /// Encode the whole frame into memory.
    ///
    /// Convenient for transports that take a contiguous body. Large
    /// documents are better served by [`UploadBody::stream`].
    pub async fn to_bytes(self) -> Result<Bytes> {
        let mut buf = Vec::with_capacity(self.total_length as usize);
        self.stream(&mut buf).await?;
        Ok(Bytes::from(buf))
    }
}

fn extension_of(filename: &str) -> String {
    match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    }
}
