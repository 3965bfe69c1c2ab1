use std::net::{Ipv4Addr, SocketAddr};

use aws_sdk_s3::config::Credentials;
use repository::session::SessionRepository;
use storage::Storage;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let secrets = util::load_env()?;

    let conn_string = util::get_str(&secrets, "DATABASE_URL")?;
    let repository = repository::init_repository(conn_string).await?;

    let redis_url = util::get_str(&secrets, "REDIS_URL")?;
    let session = SessionRepository::new(redis::Client::open(redis_url)?);

    let access_key_id = util::get_str(&secrets, "AWS_ACCESS_KEY_ID")?;
    let secret_access_key = util::get_str(&secrets, "AWS_SECRET_ACCESS_KEY")?;
    let aws_url = util::get_str(&secrets, "AWS_URL")?;
    let bucket = util::get_str(&secrets, "BUCKET")?;
    let credentials =
        Credentials::new(access_key_id, secret_access_key, None, None, "");
    let cfg = aws_config::from_env()
        .endpoint_url(aws_url)
        .region("auto")
        .credentials_provider(credentials)
        .load()
        .await;
    let s3 = aws_sdk_s3::Client::new(&cfg);

    let config = util::get_str(&secrets, "CONFIG")?;
    let config_name = &format!("Config{}.toml", config);

    let app_config = util::load_config(config_name)?;
    let s3_url = util::get_table_str(&app_config, "aws", "s3_url")?;
    let storage = Storage::new(s3, bucket.to_string(), s3_url.to_string());

    let (convert_tx, _worker) =
        convert::serve(repository.clone(), storage.clone(), config_name)
            .await?;

    let router =
        api::serve(repository, session, storage, convert_tx).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "start serving", address = address.to_string());

    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}
