use anyhow::Context as _;
use aws_sdk_s3::primitives::ByteStream;

/// Object storage for uploads. Keys are prefixed per upload kind
/// (`bulletins/`, `pdfs/`, `musics/`, `gallery/`).
#[derive(Clone, Debug)]
pub struct Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl Storage {
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: String,
        public_url: String,
    ) -> Self {
        Self {
            client,
            bucket,
            public_url,
        }
    }

    pub async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .context("failed to put object")?;

        Ok(())
    }

    pub async fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .context("failed to get object")?;

        let bytes = object
            .body
            .collect()
            .await
            .context("failed to read object body")?;

        Ok(bytes.into_bytes().to_vec())
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}
