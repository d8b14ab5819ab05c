//! Thread-safety bounds that differ between native and browser builds.
//!
//! Native hosts may move controllers across threads (for example into a
//! `tokio::spawn`ed task), so every injected collaborator must be
//! `Send + Sync`. DOM handles are single-threaded, so `wasm32` builds drop the
//! bound.

/// `Send + Sync` on native targets, no bound on `wasm32`
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSend for T {}

/// `Send + Sync` on native targets, no bound on `wasm32`
#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}

#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}
