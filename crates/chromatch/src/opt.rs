//! Helper module with the options for ranking and palette loading.
//!
//! This module provides the options and the corresponding builder. Options
//! can also be read from the environment with [`Options::from_environment`],
//! which recognizes two variables:
//!
//!   * `CHROMATCH_TOP_K` is the number of matches to return (default 5);
//!   * `CHROMATCH_LOG` is the diagnostic [`Volume`], i.e., `silent` (the
//!     default), `regular`, or `detailed`.
//!
//!
//! # Example
//!
//! ```
//! # use chromatch::opt::{Options, Volume};
//! let options = Options::builder()
//!     .top_k(3)
//!     .volume(Volume::Regular)
//!     .build();
//!
//! assert_eq!(options.top_k(), 3);
//! assert!(options.verbose());
//! ```

use crate::core::FloatExt;
use crate::error::ConfigError;
use crate::util::{Environment, ProcessEnv};
use crate::Float;

/// The diagnostic logging volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    #[default]
    Silent,
    Regular,
    Detailed,
}

impl std::str::FromStr for Volume {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(Volume::Silent),
            "regular" => Ok(Volume::Regular),
            "detailed" => Ok(Volume::Detailed),
            _ => Err(ConfigError::UnknownVolume(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    top_k: usize,
    lab_tolerance: Float,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            top_k: Options::DEFAULT_TOP_K,
            lab_tolerance: <Float as FloatExt>::LAB_TOLERANCE,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the number of matches to return.
    pub fn top_k(&mut self, top_k: usize) -> &mut Self {
        self.0.top_k = top_k;
        self
    }

    /// Set the tolerance for precomputed Lab coordinates.
    ///
    /// When loading a palette, the Lab coordinates of every entry are compared
    /// against the coordinates computed from its hex code. Coordinates that
    /// differ by more than this tolerance are rejected. Negative and
    /// not-a-number tolerances are treated as zero.
    pub fn lab_tolerance(&mut self, tolerance: Float) -> &mut Self {
        self.0.lab_tolerance = if tolerance.is_nan() {
            0.0
        } else {
            tolerance.max(0.0)
        };
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// The default number of matches.
    pub const DEFAULT_TOP_K: usize = 5;

    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular debugging output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed debugging output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Instantiate the options from the environment.
    ///
    /// This function reads `CHROMATCH_TOP_K` and `CHROMATCH_LOG`, falling back
    /// on the defaults for undefined or empty variables.
    pub fn from_environment() -> Result<Options, ConfigError> {
        Self::from_env(&ProcessEnv)
    }

    pub(crate) fn from_env(env: &impl Environment) -> Result<Options, ConfigError> {
        const TOP_K: &str = "CHROMATCH_TOP_K";
        const LOG: &str = "CHROMATCH_LOG";

        let mut builder = Self::builder();

        if let Some(value) = env.setting(TOP_K)? {
            let top_k = value
                .parse::<usize>()
                .map_err(|_| ConfigError::MalformedTopK(value.clone()))?;
            builder.top_k(top_k);
        }

        if let Some(value) = env.setting(LOG)? {
            builder.volume(value.parse()?);
        }

        Ok(builder.build())
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether the volume is regular or detailed.
    pub fn verbose(&self) -> bool {
        self.0.volume != Volume::Silent
    }

    /// Get the number of matches to return.
    pub fn top_k(&self) -> usize {
        self.0.top_k
    }

    /// Get the tolerance for precomputed Lab coordinates.
    pub fn lab_tolerance(&self) -> Float {
        self.0.lab_tolerance
    }
}

#[cfg(test)]
mod test {
    use super::{Options, Volume};
    use crate::error::ConfigError;
    use crate::util::FakeEnv;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.top_k(), 5);
        assert_eq!(options.volume(), Volume::Silent);
        assert!(!options.verbose());
        assert!(options.lab_tolerance() > 0.0);

        assert_eq!(Options::with_log().volume(), Volume::Regular);
        assert_eq!(Options::with_detailed_log().volume(), Volume::Detailed);
    }

    #[test]
    fn test_builder() {
        let options = Options::builder().top_k(1).lab_tolerance(-1.0).build();
        assert_eq!(options.top_k(), 1);
        assert_eq!(options.lab_tolerance(), 0.0);
    }

    #[test]
    fn test_from_env() -> Result<(), ConfigError> {
        let options = Options::from_env(&FakeEnv::default())?;
        assert_eq!(options.top_k(), 5);
        assert_eq!(options.volume(), Volume::Silent);

        let env = FakeEnv::default()
            .with("CHROMATCH_TOP_K", " 3 ")
            .with("CHROMATCH_LOG", "Detailed");
        let options = Options::from_env(&env)?;
        assert_eq!(options.top_k(), 3);
        assert_eq!(options.volume(), Volume::Detailed);

        let env = FakeEnv::default().with("CHROMATCH_TOP_K", "");
        assert_eq!(Options::from_env(&env)?.top_k(), 5);

        let env = FakeEnv::default().with("CHROMATCH_TOP_K", "-1");
        assert_eq!(
            Options::from_env(&env).map(|o| o.top_k()),
            Err(ConfigError::MalformedTopK("-1".to_string()))
        );

        let env = FakeEnv::default().with("CHROMATCH_LOG", "loud");
        assert_eq!(
            Options::from_env(&env).map(|o| o.volume()),
            Err(ConfigError::UnknownVolume("loud".to_string()))
        );

        Ok(())
    }
}
