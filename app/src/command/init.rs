use gazarch_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default config to `~/gazarch/config.json` and a starter
/// catalog next to it.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}
