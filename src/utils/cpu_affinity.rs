//! Thread pinning for stable timing measurements.
//!
//! On Linux the calling thread is pinned to the core it is currently running
//! on through `sched_setaffinity`; the previous mask is kept inside the guard
//! and restored when the guard is dropped. Other platforms get a no-op guard.

#[cfg(target_os = "linux")]
mod platform {
    pub type AffinityMask = libc::cpu_set_t;

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn current_mask() -> Option<AffinityMask> {
        // SAFETY: cpu_set_t is plain data; zeroed is a valid empty set.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            let rc = libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set);
            (rc == 0).then_some(set)
        }
    }

    pub fn pin(core_id: usize) -> bool {
        // SAFETY: the set is initialised before use and only read by the kernel.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(mask: &AffinityMask) -> bool {
        // SAFETY: `mask` was filled by sched_getaffinity for this thread.
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), mask) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type AffinityMask = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn current_mask() -> Option<AffinityMask> {
        None
    }

    pub fn pin(_core_id: usize) -> bool {
        false
    }

    pub fn restore(_mask: &AffinityMask) -> bool {
        true
    }
}

/// Number of online CPU cores, if the platform reports it.
pub fn core_count() -> Option<usize> {
    std::thread::available_parallelism().ok().map(|n| n.get())
}

/// RAII guard: pins the current thread on creation, restores the previous
/// affinity on drop.
///
/// # Example
/// ```
/// use sort_rank_bench::utils::CpuPinGuard;
///
/// {
///     let _pin = CpuPinGuard::new();
///     // timed region
/// }
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    previous: Option<platform::AffinityMask>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is running on right now (core 0 when the
    /// platform cannot tell).
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        Self::with_core(core)
    }

    /// Pin to a specific core.
    pub fn with_core(core_id: usize) -> Self {
        let previous = platform::current_mask();
        let pinned = previous.is_some() && platform::pin(core_id);
        if !pinned {
            tracing::trace!(core_id, "cpu pinning unavailable");
        }
        Self {
            pinned_core: pinned.then_some(core_id),
            previous,
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if !self.is_pinned() {
            return;
        }
        if let Some(mask) = self.previous.as_ref() {
            if !platform::restore(mask) {
                tracing::warn!("failed to restore cpu affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
