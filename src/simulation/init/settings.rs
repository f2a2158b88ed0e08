use super::{GridCore, PerfStats};

pub(super) fn enable_perf_metrics(core: &mut GridCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &GridCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_worker_limit(core: &mut GridCore, max_workers: usize) {
    // Runtime clamp with a floor of 1; the >= 2 requirement applies to
    // the construction-time capability only.
    core.sim.parallelism.max_workers = max_workers.max(1);
}
