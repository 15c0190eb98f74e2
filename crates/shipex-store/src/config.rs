use crate::{Error, Result};

pub const ENV_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";
pub const ENV_ACCOUNT_NAME: &str = "AZURE_ACCOUNT_NAME";
pub const ENV_ACCOUNT_KEY: &str = "AZURE_ACCOUNT_KEY";
pub const ENV_SAS_TOKEN: &str = "AZURE_SAS_TOKEN";

/// Connection settings for one container. Explicit values win over the
/// environment; `credentials()` decides which of the three shapes applies.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub container: String,
    pub connection_string: Option<String>,
    pub account_name: Option<String>,
    pub account_key: Option<String>,
    pub sas_token: Option<String>,
}

impl StoreConfig {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    /// Fill any unset credential field from the `AZURE_*` environment.
    pub fn from_env(container: impl Into<String>) -> Self {
        let mut config = Self::new(container);
        config.connection_string = std::env::var(ENV_CONNECTION_STRING).ok();
        config.account_name = std::env::var(ENV_ACCOUNT_NAME).ok();
        config.account_key = std::env::var(ENV_ACCOUNT_KEY).ok();
        config.sas_token = std::env::var(ENV_SAS_TOKEN).ok();
        config
    }

    /// Resolve the credential shape: connection string, then account+key,
    /// then account+SAS. A SAS token missing its `?` prefix is corrected.
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(conn) = &self.connection_string {
            return Ok(Credentials::ConnectionString(conn.clone()));
        }
        if let (Some(account), Some(key)) = (&self.account_name, &self.account_key) {
            return Ok(Credentials::AccountKey {
                account: account.clone(),
                key: key.clone(),
            });
        }
        if let (Some(account), Some(sas)) = (&self.account_name, &self.sas_token) {
            let token = if sas.starts_with('?') {
                sas.clone()
            } else {
                format!("?{}", sas)
            };
            return Ok(Credentials::SasToken {
                account: account.clone(),
                token,
            });
        }
        Err(Error::Config(format!(
            "No valid Azure auth found. Set either {} or {} + ({} | {}).",
            ENV_CONNECTION_STRING, ENV_ACCOUNT_NAME, ENV_ACCOUNT_KEY, ENV_SAS_TOKEN
        )))
    }
}

/// One of the three accepted credential shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    ConnectionString(String),
    AccountKey { account: String, key: String },
    SasToken { account: String, token: String },
}

/// Fields pulled out of a `Key=Value;` connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParts {
    pub account: String,
    pub key: Option<String>,
    pub sas: Option<String>,
}

/// Parse the standard Azure connection string format. Unknown fields
/// (protocol, endpoint suffix) are ignored; an account name is required.
pub fn parse_connection_string(raw: &str) -> Result<ConnectionParts> {
    let mut account = None;
    let mut key = None;
    let mut sas = None;

    for pair in raw.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        match name {
            "AccountName" => account = Some(value.to_string()),
            "AccountKey" => key = Some(value.to_string()),
            "SharedAccessSignature" => sas = Some(value.to_string()),
            _ => {}
        }
    }

    let account = account.ok_or_else(|| {
        Error::Config("Connection string has no AccountName field".to_string())
    })?;
    if key.is_none() && sas.is_none() {
        return Err(Error::Config(
            "Connection string has neither AccountKey nor SharedAccessSignature".to_string(),
        ));
    }

    Ok(ConnectionParts { account, key, sas })
}
