use std::io::Cursor;
use std::time::Duration;

use anyhow::Context as _;
use image::ImageFormat;
use repository::Repository;
use storage::Storage;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use entity::gallery;

/// Dispatches beyond this depth are dropped with a warning; conversion
/// is best-effort and must never block an upload.
const QUEUE_DEPTH: usize = 64;

/// Spawns the WebP conversion worker and hands back the dispatch side of
/// its queue. Each queued id is a gallery row whose image should be
/// re-encoded.
pub async fn serve(
    repository: Repository,
    storage: Storage,
    config_name: &str,
) -> anyhow::Result<(mpsc::Sender<i32>, JoinHandle<anyhow::Result<()>>)> {
    info!(task = "start gallery conversion worker");

    let config = util::load_config(config_name)?;
    let pause_secs =
        util::get_table_int(&config, "convert", "pause_secs")? as u64;
    let max_attempts =
        util::get_table_int(&config, "convert", "max_attempts")? as u32;

    let (tx, mut rx) = mpsc::channel::<i32>(QUEUE_DEPTH);

    let handle = tokio::spawn(async move {
        while let Some(id) = rx.recv().await {
            for attempt in 1..=max_attempts {
                match convert_entry(&repository, &storage, id).await {
                    Ok(()) => {
                        info!(
                            task = "convert gallery image",
                            id = id,
                            attempt = attempt
                        );
                        break;
                    }
                    Err(err) if attempt < max_attempts => {
                        warn!(
                            task = "convert gallery image",
                            id = id,
                            attempt = attempt,
                            error = err.to_string()
                        );
                        tokio::time::sleep(Duration::from_secs(pause_secs))
                            .await;
                    }
                    Err(err) => {
                        // Out of attempts; the job is dropped.
                        error!(
                            task = "convert gallery image",
                            id = id,
                            error = format!("{:?}", err)
                        );
                    }
                }
            }
        }

        Ok(())
    });

    Ok((tx, handle))
}

async fn convert_entry(
    repository: &Repository,
    storage: &Storage,
    id: i32,
) -> anyhow::Result<()> {
    let Some(entry) = repository.gallery.find_by_id(id).await? else {
        anyhow::bail!("gallery entry {} was not found", id);
    };

    if !gallery::needs_conversion(&entry.image_key) {
        return Ok(());
    }

    let bytes = storage.get(&entry.image_key).await?;
    let img = image::load_from_memory(&bytes)
        .context("failed to decode image")?;

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::WebP)
        .context("failed to encode webp")?;

    let key = gallery::converted_key(&entry.image_key);
    storage.put(&key, out, "image/webp").await?;
    repository.gallery.update_image_key(id, &key).await?;

    Ok(())
}
