use std::ffi::OsString;

use crate::error::ConfigError;

/// Read-only access to environment variables.
///
/// Option parsing goes through this trait, so that tests can substitute a
/// fixed set of variables for the process environment.
pub(crate) trait Environment {
    /// Look up the raw value of the variable.
    fn lookup(&self, key: &str) -> Option<OsString>;

    /// Look up the variable as a setting.
    ///
    /// The value is trimmed. A missing variable and a variable with only white
    /// space both yield `Ok(None)`.
    fn setting(&self, key: &'static str) -> Result<Option<String>, ConfigError> {
        let Some(value) = self.lookup(key) else {
            return Ok(None);
        };

        let value = value
            .into_string()
            .map_err(|_| ConfigError::NotUnicode(key))?;
        let value = value.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use crate::error::ConfigError;
    use std::collections::HashMap;
    use std::ffi::OsString;

    /// A fixed set of environment variables.
    #[derive(Debug, Default)]
    pub(crate) struct FakeEnv(HashMap<&'static str, OsString>);

    impl FakeEnv {
        pub(crate) fn with(mut self, key: &'static str, value: impl Into<OsString>) -> Self {
            self.0.insert(key, value.into());
            self
        }
    }

    impl Environment for FakeEnv {
        fn lookup(&self, key: &str) -> Option<OsString> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn test_setting() {
        let env = FakeEnv::default().with("BLANK", "   ").with("VALUE", " 7 ");

        assert_eq!(env.setting("MISSING"), Ok(None));
        assert_eq!(env.setting("BLANK"), Ok(None));
        assert_eq!(env.setting("VALUE"), Ok(Some("7".to_string())));
    }

    #[cfg(unix)]
    #[test]
    fn test_not_unicode() {
        use std::os::unix::ffi::OsStringExt;

        let env = FakeEnv::default().with("BAD", OsString::from_vec(vec![0x66, 0xff]));
        assert_eq!(env.setting("BAD"), Err(ConfigError::NotUnicode("BAD")));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
