use std::{fmt, sync::Arc};

use crate::{Clock, Keystore, MessageCodec, Transport};

/// Bundle of injected collaborators account operations run against.
///
/// Cheap to clone; all members are shared handles.
#[derive(Clone)]
pub struct AccountContext {
    transport: Arc<dyn Transport>,
    codec: Arc<dyn MessageCodec>,
    keystore: Arc<dyn Keystore>,
    clock: Arc<dyn Clock>,
}

impl AccountContext {
    pub fn new(
        transport: Arc<dyn Transport>,
        codec: Arc<dyn MessageCodec>,
        keystore: Arc<dyn Keystore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            transport,
            codec,
            keystore,
            clock,
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn codec(&self) -> &dyn MessageCodec {
        self.codec.as_ref()
    }

    pub fn keystore(&self) -> &dyn Keystore {
        self.keystore.as_ref()
    }

    /// Shared handle to the time source, passed through unmodified to
    /// message construction.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}

impl fmt::Debug for AccountContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountContext").finish_non_exhaustive()
    }
}
