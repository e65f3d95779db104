/// Raw image payload handed to the media endpoint: verified bytes, the MIME
/// type to serve them under, and the content hash used as the ETag.
#[derive(Debug, Clone)]
pub struct MediaImageResponse {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub etag: String,
}
