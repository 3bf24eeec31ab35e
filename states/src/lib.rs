//! State and task infrastructure for the Roster UI.
//!
//! This crate carries no domain knowledge. It provides:
//!
//! - [`StateCtx`]: a typed registry the application stores its view and
//!   configuration state in, keyed by type.
//! - [`TaskId`] / [`TaskHandle`]: identity and cooperative cancellation for
//!   asynchronous work, built on `tokio_util`'s `CancellationToken`.
//! - [`Subscription`] / [`Publisher`]: a channel carrying exactly one
//!   asynchronous result. The owning view polls the subscription each frame
//!   and cancellation (explicit or on drop) guarantees a late result can
//!   never reach a disposed owner.

mod ctx;
mod subscription;
mod task;

pub use ctx::StateCtx;
pub use subscription::{Publisher, Subscription};
pub use task::{TaskHandle, TaskId};
