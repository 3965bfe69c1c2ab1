use redis::{Commands, RedisResult};

/// Sessions live in redis and are provisioned by the login service; this
/// side only reads the username and keeps the per-session search error
/// note the review board surfaces once.
#[derive(Clone, Debug)]
pub struct SessionRepository {
    pub redis: redis::Client,
}

impl SessionRepository {
    pub fn new(redis: redis::Client) -> Self {
        Self { redis }
    }
}

const SEARCH_ERROR_TTL_SECS: u64 = 60 * 60;

impl SessionRepository {
    pub fn username(&self, token: &str) -> anyhow::Result<Option<String>> {
        let mut con = self.redis.get_connection()?;
        let result: RedisResult<Option<String>> =
            con.get(format!("session:{}", token));

        Ok(result?)
    }

    pub fn set_search_error(
        &self,
        token: &str,
        message: &str,
    ) -> anyhow::Result<()> {
        let mut con = self.redis.get_connection()?;
        let _: () = con.set_ex(
            format!("search_error:{}", token),
            message,
            SEARCH_ERROR_TTL_SECS,
        )?;

        Ok(())
    }

    /// Reads and clears the stored search error, so it is shown once.
    pub fn take_search_error(
        &self,
        token: &str,
    ) -> anyhow::Result<Option<String>> {
        let mut con = self.redis.get_connection()?;
        let key = format!("search_error:{}", token);

        let message: Option<String> = match con.get(&key) {
            Ok(message) => message,
            Err(err) => match err.kind() {
                redis::ErrorKind::TypeError => None,
                _ => return Err(err.into()),
            },
        };

        if message.is_some() {
            let _: () = con.del(&key)?;
        }

        Ok(message)
    }
}
