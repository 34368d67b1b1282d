// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lazily loaded encoder capabilities.
//
// An encoder may need slow setup (reading a font file, warming a library). The
// first export awaits the loader; later exports reuse the loaded value. A failed
// load is not cached, so the next export tries again.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use papersmith_core::error::{PapersmithError, Result};
use tokio::sync::OnceCell;
use tracing::{info, warn};

type LoadFuture<E> = Pin<Box<dyn Future<Output = Result<Arc<E>>> + Send>>;
type Loader<E> = Box<dyn Fn() -> LoadFuture<E> + Send + Sync>;

/// An encoder that becomes ready on first use.
pub struct Capability<E: ?Sized> {
    name: &'static str,
    cell: OnceCell<Arc<E>>,
    loader: Loader<E>,
}

impl<E: ?Sized + Send + Sync + 'static> Capability<E> {
    /// Capability loaded by `loader` the first time it is needed.
    pub fn lazy<F, Fut>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<E>>> + Send + 'static,
    {
        Self {
            name,
            cell: OnceCell::new(),
            loader: Box::new(move || Box::pin(loader())),
        }
    }

    /// Capability that is ready immediately.
    pub fn ready(name: &'static str, encoder: Arc<E>) -> Self {
        let preloaded = Arc::clone(&encoder);
        Self {
            name,
            cell: OnceCell::new_with(Some(encoder)),
            loader: Box::new(move || {
                let encoder = Arc::clone(&preloaded);
                Box::pin(async move { Ok(encoder) })
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Wait until the encoder is ready.
    ///
    /// Any loader failure is reported as `CapabilityUnavailable`.
    pub async fn get(&self) -> Result<Arc<E>> {
        let name = self.name;
        let encoder = self
            .cell
            .get_or_try_init(|| async {
                info!(capability = name, "loading encoder");
                (self.loader)().await.map_err(|err| match err {
                    PapersmithError::CapabilityUnavailable { .. } => err,
                    other => PapersmithError::CapabilityUnavailable {
                        capability: name,
                        reason: other.to_string(),
                    },
                })
            })
            .await
            .inspect_err(|err| warn!(capability = name, error = %err, "encoder load failed"))?;
        Ok(Arc::clone(encoder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    trait Greeter: Send + Sync {
        fn greet(&self) -> &'static str;
    }

    struct Hello;

    impl Greeter for Hello {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[tokio::test]
    async fn loads_once_and_reuses() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let cap: Capability<dyn Greeter> = Capability::lazy("greeter", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(Arc::new(Hello) as Arc<dyn Greeter>) }
        });

        assert!(!cap.is_loaded());
        assert_eq!(cap.get().await.unwrap().greet(), "hello");
        assert_eq!(cap.get().await.unwrap().greet(), "hello");
        assert!(cap.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let cap: Capability<dyn Greeter> = Capability::lazy("greeter", move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(PapersmithError::ImageError("font missing".into()))
                } else {
                    Ok(Arc::new(Hello) as Arc<dyn Greeter>)
                }
            }
        });

        let err = cap.get().await.err().unwrap();
        assert!(matches!(
            err,
            PapersmithError::CapabilityUnavailable { capability: "greeter", .. }
        ));
        assert!(!cap.is_loaded());
        assert!(cap.get().await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn ready_capability_is_loaded_up_front() {
        let cap: Capability<dyn Greeter> =
            Capability::ready("greeter", Arc::new(Hello) as Arc<dyn Greeter>);
        assert!(cap.is_loaded());
        assert_eq!(cap.get().await.unwrap().greet(), "hello");
    }
}
