//! Concurrent fan-out of sub-commands
//!
//! Every command is launched before any is awaited. Results come back in
//! launch order. The first invocation error aborts the round: the remaining
//! in-flight invocations are dropped and the error is returned as is.

use crate::commands::{CommandError, InvocationContext};
use futures::future::try_join_all;

/// Invokes all `commands` concurrently against `context`.
///
/// `result[i]` corresponds to `commands[i]` regardless of completion order.
pub async fn invoke_all<C>(
    context: &C,
    commands: &[C::Handle],
) -> Result<Vec<C::Output>, CommandError>
where
    C: InvocationContext,
{
    if commands.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!(
        "Launching {} sub-commands of {}",
        commands.len(),
        context.command_path()
    );

    let invocations = commands.iter().map(|command| context.invoke(command));
    try_join_all(invocations).await.inspect_err(|e| {
        tracing::debug!(
            "Aborting {} after failure of '{}'",
            context.command_path(),
            e.command()
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// Fake command: sleeps, then returns its payload or fails.
    struct Fake {
        payload: u32,
        delay: Duration,
        fail: bool,
    }

    fn ok(payload: u32, delay_ms: u64) -> Fake {
        Fake {
            payload,
            delay: Duration::from_millis(delay_ms),
            fail: false,
        }
    }

    struct FakeContext {
        invocations: AtomicUsize,
        barrier: Option<Barrier>,
    }

    impl FakeContext {
        fn new() -> Self {
            Self {
                invocations: AtomicUsize::new(0),
                barrier: None,
            }
        }
    }

    #[async_trait]
    impl InvocationContext for FakeContext {
        type Handle = Fake;
        type Output = u32;

        fn command_path(&self) -> &str {
            "fake"
        }

        async fn invoke(&self, handle: &Fake) -> Result<u32, CommandError> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            tokio::time::sleep(handle.delay).await;
            if handle.fail {
                Err(CommandError::execution(handle.payload.to_string(), "exploded"))
            } else {
                Ok(handle.payload)
            }
        }
    }

    #[tokio::test]
    async fn test_empty_input_returns_empty() {
        let ctx = FakeContext::new();
        let results = invoke_all(&ctx, &[]).await.unwrap();
        assert!(results.is_empty());
        assert_eq!(ctx.invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_results_follow_launch_order_not_completion_order() {
        let ctx = FakeContext::new();
        let commands = vec![ok(1, 60), ok(2, 30), ok(3, 0)];

        let results = invoke_all(&ctx, &commands).await.unwrap();
        assert_eq!(results, vec![1, 2, 3]);
        assert_eq!(ctx.invocations.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_all_commands_start_before_any_completes() {
        // Each invocation waits for all the others; a sequential invoker
        // would never get past the first one.
        let mut ctx = FakeContext::new();
        ctx.barrier = Some(Barrier::new(4));
        let commands: Vec<Fake> = (0..4).map(|i| ok(i, 0)).collect();

        let results = tokio::time::timeout(Duration::from_secs(5), invoke_all(&ctx, &commands))
            .await
            .expect("invocations did not run concurrently")
            .unwrap();
        assert_eq!(results, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_first_failure_aborts_the_round() {
        let ctx = FakeContext::new();
        let commands = vec![
            ok(1, 10_000),
            Fake {
                payload: 2,
                delay: Duration::from_millis(10),
                fail: true,
            },
            ok(3, 10_000),
        ];

        let err = tokio::time::timeout(Duration::from_secs(5), invoke_all(&ctx, &commands))
            .await
            .expect("failure did not abort the remaining invocations")
            .unwrap_err();
        assert_eq!(err.command(), "2");
        assert_eq!(ctx.invocations.load(Ordering::SeqCst), 3);
    }
}
