//! End-to-end tests driving the `zenoc` binary through `assert_cmd`,
//! covering the CLI surface and the full compile pipeline down to
//! emitted Go source.

mod e2e {
    mod cli_tests;
    mod compilation_tests;
}
