//! Test utilities and shared test helpers for allocplot.
//!
//! Fixtures mirror the tables the allocator benchmark writes:
//! `allocator_type,benchmark_type,num_allocations,<value column>`.

use std::path::PathBuf;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture CSV");
    path
}

/// Sample result tables.
pub mod csv_fixtures {
    /// Timing table with two benchmark types and two allocators, rows
    /// deliberately out of x order.
    pub fn timing_csv() -> &'static str {
        concat!(
            "allocator_type,benchmark_type,num_allocations,time_ms\n",
            "system,single_size,10000,1.8\n",
            "custom,single_size,10000,0.9\n",
            "system,single_size,1000,0.21\n",
            "custom,single_size,1000,0.11\n",
            "system,random_free,1000,0.4\n",
            "custom,random_free,1000,0.25\n",
            "system,random_free,10000,3.9\n",
            "custom,random_free,10000,2.2\n",
        )
    }

    /// Second timing table, shares `random_free` with [`timing_csv`].
    pub fn second_timing_csv() -> &'static str {
        concat!(
            "allocator_type,benchmark_type,num_allocations,time_ms\n",
            "system,random_free,1000,7.5\n",
            "custom,random_free,1000,6.5\n",
            "system,multi_thread,1000,12.0\n",
            "custom,multi_thread,1000,8.0\n",
        )
    }

    /// Throughput table as written by the multi-threaded benchmark.
    pub fn throughput_csv() -> &'static str {
        concat!(
            "allocator_type,benchmark_type,num_allocations,throughput_M_ops_per_sec\n",
            "custom,multi_thread,1000,41.5\n",
            "system,multi_thread,1000,22.75\n",
            "custom,multi_thread,100000,55.0\n",
            "system,multi_thread,100000,30.25\n",
        )
    }

    /// Header only.
    pub fn empty_csv() -> &'static str {
        "allocator_type,benchmark_type,num_allocations,time_ms\n"
    }
}
