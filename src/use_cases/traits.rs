//! Trait abstraction for caller-supplied async handlers to enable mocking in tests

use crate::state::FormData;
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

/// Called with the new value before a switch change is committed.
/// An error rolls the switch back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SwitchChangeHandler: Send + Sync {
    async fn on_change(&self, value: bool) -> Result<()>;
}

/// Receives the captured form data once the form is submittable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitHandler: Send + Sync {
    async fn on_submit(&self, data: &FormData) -> Result<()>;
}

/// Adapts a closure returning a future into a handler
pub struct HandlerFn<F>(pub F);

/// Wrap an async closure as a [`SwitchChangeHandler`]
pub fn change_handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(bool) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    HandlerFn(f)
}

/// Wrap an async closure as a [`FormSubmitHandler`]
pub fn submit_handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(FormData) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    HandlerFn(f)
}

#[async_trait]
impl<F, Fut> SwitchChangeHandler for HandlerFn<F>
where
    F: Fn(bool) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    async fn on_change(&self, value: bool) -> Result<()> {
        (self.0)(value).await
    }
}

#[async_trait]
impl<F, Fut> FormSubmitHandler for HandlerFn<F>
where
    F: Fn(FormData) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    async fn on_submit(&self, data: &FormData) -> Result<()> {
        (self.0)(data.clone()).await
    }
}
