//! API credential loading.
//!
//! The key is wrapped in [`secrecy::SecretString`] so it never appears
//! in Debug output or logs; it is only exposed when the engine builds
//! request headers.

use std::env;

use secrecy::SecretString;

use gptfn_types::error::Error;

/// Credentials for the chat-completions endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: SecretString,
    pub organization: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, organization: Option<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            organization,
        }
    }

    /// Read `OPENAI_API_KEY` (required) and `OPENAI_ORG_ID` (optional)
    /// from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(
            env::var("OPENAI_API_KEY").ok(),
            env::var("OPENAI_ORG_ID").ok(),
        )
    }

    fn from_vars(api_key: Option<String>, organization: Option<String>) -> Result<Self, Error> {
        let api_key = api_key.ok_or(Error::MissingApiKey)?;
        Ok(Self::new(api_key, organization))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_missing_key_is_a_configuration_error() {
        assert!(matches!(
            Credentials::from_vars(None, None),
            Err(Error::MissingApiKey)
        ));
        // The organization alone does not satisfy the requirement.
        assert!(matches!(
            Credentials::from_vars(None, Some("org-1".to_string())),
            Err(Error::MissingApiKey)
        ));
    }

    #[test]
    fn test_key_with_optional_organization() {
        let creds = Credentials::from_vars(Some("sk-test".to_string()), None).unwrap();
        assert_eq!(creds.api_key.expose_secret(), "sk-test");
        assert!(creds.organization.is_none());

        let creds =
            Credentials::from_vars(Some("sk-test".to_string()), Some("org-1".to_string())).unwrap();
        assert_eq!(creds.organization.as_deref(), Some("org-1"));
    }

    #[test]
    fn test_from_env_reads_the_process_environment() {
        // Tests in this binary only ever set these variables, never
        // remove them, so this is safe under parallel execution.
        unsafe {
            env::set_var("OPENAI_API_KEY", "sk-env-test");
        }
        let creds = Credentials::from_env().unwrap();
        assert_eq!(creds.api_key.expose_secret(), "sk-env-test");
    }
}
