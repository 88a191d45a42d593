use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KernelLifecycle};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct AttenuatorConfig {
        shift: u32,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct AttenuatorKernel {
        shift: u32,
    }

    impl KernelLifecycle for AttenuatorKernel {
        type Config = AttenuatorConfig;

        fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
            if config.shift > 15 {
                return Err(ConfigError::InvalidArgument {
                    arg: "shift",
                    reason: "shift must not exceed the Q15 fraction width",
                });
            }
            Ok(Self {
                shift: config.shift,
            })
        }
    }

    #[test]
    fn lifecycle_constructor_accepts_valid_config() {
        let kernel =
            AttenuatorKernel::try_new(AttenuatorConfig { shift: 3 }).expect("valid config");
        assert_eq!(kernel.shift, 3);
    }

    #[test]
    fn lifecycle_constructor_rejects_invalid_config() {
        let err =
            AttenuatorKernel::try_new(AttenuatorConfig { shift: 16 }).expect_err("invalid config");
        assert_eq!(
            err,
            ConfigError::InvalidArgument {
                arg: "shift",
                reason: "shift must not exceed the Q15 fraction width",
            }
        );
    }
}
