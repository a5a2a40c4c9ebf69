//! Test-only helpers for mutating process-global state.

/// Restores every environment variable it touched when dropped.
///
/// Env mutation races with concurrent readers, so tests using this guard run under
/// `#[serial(env)]`.
#[derive(Default)]
#[must_use]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Guard with nothing changed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `val` until the guard is dropped.
    pub fn set(mut self, key: &'static str, val: &str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: callers serialize env access with #[serial(env)].
        unsafe { std::env::set_var(key, val) };
        self
    }

    /// Unset `key` until the guard is dropped.
    pub fn remove(mut self, key: &'static str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: callers serialize env access with #[serial(env)].
        unsafe { std::env::remove_var(key) };
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        while let Some((key, prev)) = self.saved.pop() {
            // SAFETY: see `set`.
            match prev {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
