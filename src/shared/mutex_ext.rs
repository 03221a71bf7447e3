//! Usage: Poison-tolerant locking for state shared between Tauri handlers.

use std::sync::{Mutex, MutexGuard};

pub(crate) trait MutexExt<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T> {
        match self.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("mutex poisoned; recovering inner state");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn lock_or_recover_returns_value_after_poison() {
        let shared = Arc::new(Mutex::new(7_u32));
        let for_thread = shared.clone();
        let _ = std::thread::spawn(move || {
            let _guard = for_thread.lock().expect("lock");
            panic!("poison the mutex");
        })
        .join();

        assert!(shared.is_poisoned());
        assert_eq!(*shared.lock_or_recover(), 7);
    }
}
