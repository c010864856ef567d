//! Pin addressing capability for hosts that sit on a single pin

use tracing::debug;

use crate::capability::{Capability, Next};
use crate::config::HostConfig;
use crate::error::InitError;

/// Parts of a host under construction that can hold a pin address
pub trait PinSlot {
    fn pin_slot(&mut self) -> &mut Option<u8>;
}

/// Resolves the host's pin from `HostConfig::pin`
#[derive(Debug, Clone, Copy, Default)]
pub struct PinAddressing;

impl PinAddressing {
    pub const NAME: &'static str = "pin_addressing";
}

impl<P: PinSlot> Capability<P> for PinAddressing {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(
        &self,
        parts: &mut P,
        config: &HostConfig,
        next: Next<'_, P>,
    ) -> Result<(), InitError> {
        next.run(parts, config)?;

        let pin = config.pin.ok_or_else(|| InitError::MissingPin {
            host: config.host_id(),
        })?;
        *parts.pin_slot() = Some(pin);
        debug!(host = ?config.name, pin, "Pin address resolved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::InitChain;

    #[derive(Default)]
    struct Parts {
        pin: Option<u8>,
    }

    impl PinSlot for Parts {
        fn pin_slot(&mut self) -> &mut Option<u8> {
            &mut self.pin
        }
    }

    #[test]
    fn test_pin_from_config() {
        let chain = InitChain::new().with(PinAddressing);
        let mut parts = Parts::default();

        chain
            .run(&mut parts, &HostConfig::new().with_pin(13))
            .unwrap();

        assert_eq!(parts.pin, Some(13));
    }

    #[test]
    fn test_missing_pin() {
        let chain = InitChain::new().with(PinAddressing);
        let mut parts = Parts::default();

        let err = chain
            .run(&mut parts, &HostConfig::new().with_name("spi-0"))
            .unwrap_err();

        match err {
            InitError::MissingPin { host } => assert_eq!(host.as_str(), "spi-0"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(parts.pin, None);
    }
}
