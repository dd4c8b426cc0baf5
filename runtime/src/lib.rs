//! # Venuebook Runtime
//!
//! Store runtime for the venuebook composable architecture.
//!
//! The [`Store`] owns a feature's state, runs its reducer, and executes the
//! effects the reducer returns. All reducer execution is serialized behind a
//! write lock; effects run in spawned tasks and feed their resulting actions
//! back into the store.
//!
//! There is deliberately no retry policy, no request de-duplication, and no
//! ordering guarantee between concurrent in-flight effects: a later response
//! can be overwritten by an earlier one that resolves after it, exactly like
//! the interleaved callbacks of a browser page. Failures surface once, as an
//! action, and the user re-triggers the operation.
//!
//! ## Example
//!
//! ```ignore
//! use venuebook_runtime::Store;
//!
//! let store = Store::new(AvailabilityState::new("v1"), AvailabilityReducer::new(), env);
//!
//! store.send(AvailabilityAction::Load).await;
//! let loading = store.state(|s| s.loading).await;
//! assert!(loading);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;
use venuebook_core::effect::Effect;
use venuebook_core::reducer::Reducer;

/// The Store - holds state and processes actions through a reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
        }
    }

    /// Send an action to the store
    ///
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// `send` returns after starting effect execution, not completion.
    /// Multiple concurrent `send` calls serialize at the reducer level;
    /// effects complete in non-deterministic order.
    pub async fn send(&self, action: A) {
        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Read a value out of the current state
    ///
    /// # Arguments
    ///
    /// - `f`: Closure that receives a reference to state and returns a value
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Execute a single effect
    ///
    /// `Future` and `Delay` spawn a task that sends the produced action back
    /// into the store. `Parallel` fans out immediately. `Sequential` spawns
    /// one task that drains its inner effects in order.
    fn execute_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {
                tracing::trace!("executing Effect::None (no-op)");
            },
            Effect::Future(fut) => {
                tracing::trace!("executing Effect::Future");
                let store = self.clone();
                tokio::spawn(async move {
                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, sending to store");
                        store.send(action).await;
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracing::trace!("executing Effect::Delay (duration: {:?})", duration);
                let store = self.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    store.send(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("executing Effect::Parallel with {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect);
                }
            },
            Effect::Sequential(effects) => {
                tracing::trace!("executing Effect::Sequential with {} effects", effects.len());
                let store = self.clone();
                tokio::spawn(async move {
                    store.run_in_order(effects).await;
                });
            },
        }
    }

    /// Drain a sequence of effects, awaiting each before the next
    ///
    /// Nested sequences are spliced in place so their ordering is preserved;
    /// nested parallel groups fan out without blocking the sequence.
    async fn run_in_order(&self, effects: Vec<Effect<A>>) {
        let mut queue = VecDeque::from(effects);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::None => {},
                Effect::Future(fut) => {
                    if let Some(action) = fut.await {
                        self.send(action).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    self.send(*action).await;
                },
                Effect::Parallel(inner) => {
                    for effect in inner {
                        self.execute_effect(effect);
                    }
                },
                Effect::Sequential(inner) => {
                    for effect in inner.into_iter().rev() {
                        queue.push_front(effect);
                    }
                },
            }
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use venuebook_core::{SmallVec, smallvec};

    #[derive(Debug, Clone)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        ProduceEffect,
        ProduceDelayedAction,
        ProduceParallelEffects,
        ProduceSequentialEffects,
    }

    #[derive(Debug, Clone)]
    struct TestEnv;

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.value -= 1;
                    smallvec![Effect::None]
                },
                TestAction::NoOp => smallvec![Effect::None],
                TestAction::ProduceEffect => {
                    smallvec![Effect::Future(Box::pin(async {
                        Some(TestAction::Increment)
                    }))]
                },
                TestAction::ProduceDelayedAction => {
                    smallvec![Effect::Delay {
                        duration: Duration::from_millis(10),
                        action: Box::new(TestAction::Increment),
                    }]
                },
                TestAction::ProduceParallelEffects => {
                    smallvec![Effect::Parallel(vec![
                        Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                        Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                        Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                    ])]
                },
                TestAction::ProduceSequentialEffects => {
                    smallvec![Effect::Sequential(vec![
                        Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                        Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                        Effect::Future(Box::pin(async { Some(TestAction::Decrement) })),
                    ])]
                },
            }
        }
    }

    #[tokio::test]
    async fn store_creation() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 0);
    }

    #[tokio::test]
    async fn send_action() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::Increment).await;
        let value = store.state(|s| s.value).await;
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn multiple_actions() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::Increment).await;
        store.send(TestAction::Increment).await;
        store.send(TestAction::Decrement).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn effect_none_changes_nothing() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::NoOp).await;
        let value = store.state(|s| s.value).await;
        assert_eq!(value, 0);
    }

    #[tokio::test]
    async fn effect_future_feeds_back() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::ProduceEffect).await;

        // Give the spawned task time to complete
        tokio::time::sleep(Duration::from_millis(50)).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn effect_delay_waits() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::ProduceDelayedAction).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 0);

        tokio::time::sleep(Duration::from_millis(50)).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn effect_parallel_fans_out() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::ProduceParallelEffects).await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn effect_sequential_runs_in_order() {
        let store = Store::new(TestState { value: 0 }, TestReducer, TestEnv);

        store.send(TestAction::ProduceSequentialEffects).await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 1);
    }
}
