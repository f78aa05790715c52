use std::fmt;

use everline_acct_types::{CodecError, SignedMessage, Signature};

/// Transient, single-use unsigned message produced by the codec runtime.
///
/// The handle owns a runtime allocation that must be freed once the message
/// has been signed or abandoned; [`UnsignedHandle`] enforces that.
pub trait UnsignedMessage: Send {
    /// Canonical hash to be signed.
    fn hash(&self) -> &[u8];

    /// Unix deadline baked into the envelope.
    fn expire_at(&self) -> u32;

    /// Binds `signature` into the final transmittable message.
    fn sign(&self, signature: &Signature) -> Result<SignedMessage, CodecError>;

    /// Frees the backing runtime allocation.
    fn release(&mut self);
}

/// Owning guard around an unsigned message.
///
/// Releases the message exactly once when dropped, on every exit path of
/// the preparing call, including signing failure.
pub struct UnsignedHandle {
    inner: Box<dyn UnsignedMessage>,
}

impl UnsignedHandle {
    pub fn new(inner: Box<dyn UnsignedMessage>) -> Self {
        Self { inner }
    }

    pub fn hash(&self) -> &[u8] {
        self.inner.hash()
    }

    pub fn expire_at(&self) -> u32 {
        self.inner.expire_at()
    }

    pub fn sign(&self, signature: &Signature) -> Result<SignedMessage, CodecError> {
        self.inner.sign(signature)
    }
}

impl Drop for UnsignedHandle {
    fn drop(&mut self) {
        self.inner.release();
    }
}

impl fmt::Debug for UnsignedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsignedHandle")
            .field("expire_at", &self.inner.expire_at())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    struct Probe {
        releases: Arc<AtomicUsize>,
    }

    impl UnsignedMessage for Probe {
        fn hash(&self) -> &[u8] {
            b"hash"
        }

        fn expire_at(&self) -> u32 {
            0
        }

        fn sign(&self, _signature: &Signature) -> Result<SignedMessage, CodecError> {
            Err(CodecError::new("unused"))
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn drop_releases_exactly_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let handle = UnsignedHandle::new(Box::new(Probe {
            releases: Arc::clone(&releases),
        }));
        assert_eq!(handle.hash(), b"hash");
        drop(handle);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
