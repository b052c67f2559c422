use crate::error::BridgeResult;
use crate::ffi::ForeignBackend;

use super::BridgeConfig;

/// Entry point consumed by host applications.
///
/// `Bridge` owns a [`ForeignBackend`] and the defaults used by the draw and
/// plot facades. It keeps no other state: handles, buffers and layouts all
/// live on the native side and are queried per call.
#[derive(Debug)]
pub struct Bridge<B: ForeignBackend> {
    pub(super) backend: B,
    pub(super) config: BridgeConfig,
}

impl<B: ForeignBackend> Bridge<B> {
    pub fn new(backend: B, config: BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    #[must_use]
    pub fn with_default_config(backend: B) -> Self {
        Self {
            backend,
            config: BridgeConfig::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BridgeConfig) -> BridgeResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
