// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;

static TRACING: Once = Once::new();

/// Routes library logs to the test output; set `RUST_LOG`-style verbosity with
/// `--nocapture` to see them.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Creates a temporary INI file with the given content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
#[allow(dead_code)]
pub fn create_temp_ini(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// The sample configuration used across the integration tests.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = "\
; sample configuration
[common]
path = /var/data
paid_users_size_limit = 100

[ftp]
name = “bob”
name<itscript> = “alice”
lastname = smith
enabled = true
path<itscript> = /ftp/alt

[http]
params = a,b,c
";
