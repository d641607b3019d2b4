//! Ensures help lists every user-facing command exactly once.
use catalog_courier_bot::commands::help::all_command_names;

#[test]
fn help_command_names_unique_and_present() {
    let names = all_command_names();
    let mut sorted = names.clone();
    sorted.sort();
    for w in sorted.windows(2) {
        assert_ne!(w[0], w[1], "Duplicate help command name: {}", w[0]);
    }
    for e in ["search", "get", "help"] {
        assert!(sorted.contains(&e), "Missing help entry for `{}`", e);
    }
}
