use std::time::Duration;

use async_trait::async_trait;

/// Source of delays the timeout race uses.
///
/// Native code uses [`crate::TokioTimer`]; the browser front-end supplies a
/// `gloo-timers` implementation.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

#[async_trait(?Send)]
impl<'a, T: Timer + ?Sized> Timer for &'a T {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}
