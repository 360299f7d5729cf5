use shared_utils::env::get_env_var_or;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo refuses requests without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub const BASE_URL_VAR: &str = "STONK_BASE_URL";
pub const USER_AGENT_VAR: &str = "STONK_USER_AGENT";

/// Connection settings for [`YahooProvider`](super::YahooProvider).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YahooConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl YahooConfig {
    /// Reads overrides from `STONK_BASE_URL` and `STONK_USER_AGENT`,
    /// keeping the defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: get_env_var_or(BASE_URL_VAR, DEFAULT_BASE_URL),
            user_agent: get_env_var_or(USER_AGENT_VAR, DEFAULT_USER_AGENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_uses_defaults_and_overrides() {
        unsafe {
            std::env::remove_var(BASE_URL_VAR);
            std::env::remove_var(USER_AGENT_VAR);
        }
        assert_eq!(YahooConfig::from_env(), YahooConfig::default());

        unsafe { std::env::set_var(BASE_URL_VAR, "http://127.0.0.1:9") };
        let cfg = YahooConfig::from_env();
        assert_eq!(cfg.base_url, "http://127.0.0.1:9");
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);

        unsafe { std::env::remove_var(BASE_URL_VAR) };
    }
}
