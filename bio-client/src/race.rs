use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use thiserror::Error;

use crate::timer::Timer;

/// The timer settled before the raced future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timed out after {after:?}")]
pub struct Elapsed {
    pub after: Duration,
}

/// Poll `future` against a `duration` delay from `timer`.
///
/// Whichever settles first decides the outcome. The loser is dropped before
/// this returns, which cancels an in-flight request for transports that
/// abort on drop.
pub async fn race_timeout<F, T>(future: F, timer: &T, duration: Duration) -> Result<F::Output, Elapsed>
where
    F: Future,
    T: Timer + ?Sized,
{
    let future = pin!(future);
    let delay = timer.sleep(duration);

    match select(future, delay).await {
        Either::Left((output, _delay)) => Ok(output),
        Either::Right(((), _abandoned)) => Err(Elapsed { after: duration }),
    }
}
