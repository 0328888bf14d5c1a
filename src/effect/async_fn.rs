//! Fire-and-forget async effects.
//!
//! The logger never awaits an effect. An async effect is therefore wrapped in a
//! plain callable that snapshots the call into an owned [`AsyncCall`], builds
//! the future and hands it off: to the current tokio runtime when one is
//! running, otherwise to a small process-wide [`ThreadPool`] created on first
//! use. Completion and failure of the future are not observable from the log
//! call.

use std::future::Future;
use std::sync::{Arc, LazyLock};

use futures::executor::ThreadPool;
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::effect::{share, Effect, EffectFn, SingleEffect, Timestamp};
use crate::level::Level;

/// Owned snapshot of one log call, handed to async effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncCall {
    /// When the log call happened.
    pub timestamp: Timestamp,
    /// Level of the call.
    pub level: Level,
    /// Topic path, root to leaf.
    pub topics: Vec<String>,
    /// Untransformed messages, rendered with `Display`.
    pub messages: Vec<String>,
}

type AsyncEffectFn = Arc<dyn Fn(AsyncCall) -> BoxFuture<'static, ()> + Send + Sync>;

/// Worker threads behind the no-runtime fallback.
const FALLBACK_POOL_SIZE: usize = 2;

/// `None` when the OS refused to start the workers.
static FALLBACK_POOL: LazyLock<Option<ThreadPool>> = LazyLock::new(|| {
    ThreadPool::builder()
        .pool_size(FALLBACK_POOL_SIZE)
        .name_prefix("mono-logger-async-")
        .create()
        .ok()
});

fn detach(future: BoxFuture<'static, ()>) {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        drop(handle.spawn(future));
        return;
    }
    match FALLBACK_POOL.as_ref() {
        Some(pool) => pool.spawn_ok(future),
        None => {
            #[cfg(feature = "tracing")]
            ::tracing::debug!("async effect dropped: no runtime and no fallback pool");
        }
    }
}

fn into_effect_fn(f: AsyncEffectFn) -> EffectFn {
    share(move |timestamp, level, topics, messages| {
        let call = AsyncCall {
            timestamp: *timestamp,
            level,
            topics: topics.to_vec(),
            messages: messages.iter().map(|m| m.to_string()).collect(),
        };
        detach(f(call));
    })
}

fn boxed<F, Fut>(f: F) -> AsyncEffectFn
where
    F: Fn(AsyncCall) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move |call| f(call).boxed())
}

impl Effect {
    /// Wrap an async callable as a fire-and-forget effect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mono_logger::{Effect, LoggerConfig, Logger};
    ///
    /// # tokio_test::block_on(async {
    /// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    /// let effect = Effect::from_async(move |call| {
    ///     let tx = tx.clone();
    ///     async move {
    ///         let _ = tx.send(call.messages.join(" "));
    ///     }
    /// });
    ///
    /// let logger = Logger::new().topic_with("jobs", LoggerConfig::new().effect(effect));
    /// logger.info(&[&"queued"]);
    ///
    /// assert_eq!(rx.recv().await.as_deref(), Some("queued"));
    /// # });
    /// ```
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(AsyncCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Effect::Callable(into_effect_fn(boxed(f)))
    }
}

impl SingleEffect {
    /// Wrap an async callable behind an optional level gate.
    pub fn from_async<F, Fut>(f: F, min_level: Option<Level>) -> Self
    where
        F: Fn(AsyncCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        SingleEffect::from_fn(into_effect_fn(boxed(f)), min_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn spawns_on_current_runtime() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let effect = Effect::from_async(move |call| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(call);
            }
        });

        let now = chrono::Local::now();
        let topics = vec!["api".to_string()];
        effect.apply(&now, Level::Warn, &topics, &[&"slow", &42]);

        let call = rx.recv().await.unwrap();
        assert_eq!(call.timestamp, now);
        assert_eq!(call.level, Level::Warn);
        assert_eq!(call.topics, vec!["api"]);
        assert_eq!(call.messages, vec!["slow", "42"]);
    }

    #[test]
    fn falls_back_to_shared_pool_without_runtime() {
        let (tx, rx) = std::sync::mpsc::channel();
        let effect = Effect::from_async(move |call| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(call.level);
            }
        });

        effect.apply(&chrono::Local::now(), Level::Info, &[], &[]);

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Level::Info));
    }

    #[tokio::test]
    async fn gated_async_effect_skips_low_levels() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let effect = SingleEffect::from_async(
            move |call| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(call.level);
                }
            },
            Some(Level::Error),
        );

        let now = chrono::Local::now();
        effect.apply(&now, Level::Info, &[], &[]);
        effect.apply(&now, Level::Fatal, &[], &[]);

        assert_eq!(rx.recv().await, Some(Level::Fatal));
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
