use catalog_courier_bot::logging;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::level_filters::LevelFilter;

#[test]
fn rust_log_from_env_file_sets_the_filter() {
    // A RUST_LOG already in the environment wins over the file; nothing to check then.
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let mut env_file = NamedTempFile::new().unwrap();
    writeln!(env_file, "RUST_LOG=trace").unwrap();

    logging::init(Some(env_file.path()));

    assert_eq!(LevelFilter::current(), LevelFilter::TRACE);
}
