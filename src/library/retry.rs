use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }
}

/// Outcome of one attempt inside a gate.
#[derive(Debug, PartialEq)]
pub enum Attempt<T, E> {
    /// Good enough, stop now.
    Accept(T),
    /// Valid but not confident enough; try again, fall back to it on exhaustion.
    Retry(T),
    /// Failed in a way worth another attempt.
    Transient(E),
    /// Failed in a way no further attempt can fix.
    Fatal(E),
}

/// Runs `attempt` until it accepts, fails fatally, or the policy runs out.
///
/// `merge` folds a new soft candidate into the one held so far. When attempts
/// run out the held candidate is returned as a value; only if no candidate was
/// ever produced does the last transient error surface.
pub fn run<T, E, F, M>(policy: &RetryPolicy, mut merge: M, mut attempt: F) -> Result<T, E>
where
    F: FnMut(u32) -> Attempt<T, E>,
    M: FnMut(T, T) -> T,
{
    let attempts = policy.attempts.max(1);
    let mut candidate: Option<T> = None;
    let mut number = 0;

    loop {
        number += 1;
        let is_last = number >= attempts;

        match attempt(number) {
            Attempt::Accept(value) => return Ok(value),
            Attempt::Fatal(error) => return Err(error),
            Attempt::Retry(value) => {
                let value = match candidate.take() {
                    Some(held) => merge(held, value),
                    None => value,
                };
                if is_last {
                    return Ok(value);
                }
                candidate = Some(value);
            }
            Attempt::Transient(error) => {
                if is_last {
                    return match candidate {
                        Some(value) => Ok(value),
                        None => Err(error),
                    };
                }
            }
        }

        if !policy.delay.is_zero() {
            std::thread::sleep(policy.delay);
        }
    }
}
