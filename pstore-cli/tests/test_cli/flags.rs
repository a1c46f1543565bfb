use crate::add_test;
use crate::common::Fixture;

// Test that -version prints only the version string
add_test!(version_prints_version, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-version"]).await;
    assert_eq!(output.code(), Some(0));
    assert_eq!(output.stdout, format!("{}\n", env!("CARGO_PKG_VERSION")));
    assert!(output.stderr.is_empty());
});

// Test that -version wins over an otherwise invalid put
add_test!(version_short_circuits_validation, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-put", "-version"]).await;
    assert_eq!(output.code(), Some(0));
    assert_eq!(output.stdout.trim(), env!("CARGO_PKG_VERSION"));
});

// Test that the double-dash spelling works too
add_test!(double_dash_version, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["--version"]).await;
    assert_eq!(output.code(), Some(0));
    assert_eq!(output.stdout.trim(), env!("CARGO_PKG_VERSION"));
});

// Test that help lists the flags and exits successfully
add_test!(help_lists_flags, async {
    let fixture = Fixture::new();

    for flag in ["-help", "-h", "--help"] {
        let output = fixture.run(&[flag]).await;
        assert_eq!(output.code(), Some(0), "help via {flag}");
        for name in [
            "--profile",
            "--role",
            "--region",
            "--put",
            "--del",
            "--name",
        ] {
            assert!(output.stdout.contains(name), "{name} missing from help");
        }
    }
});

// Test that boolean flags take an attached true/false value
add_test!(bool_flags_accept_attached_values, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-version=true"]).await;
    assert_eq!(output.code(), Some(0));
    assert_eq!(output.stdout.trim(), env!("CARGO_PKG_VERSION"));

    let output = fixture.run(&["-version=false", "-put"]).await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("parameter name is required for put"));
});

// Test that unknown flags are rejected with status 1
add_test!(unknown_flag_fails, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-bogus"]).await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
});

// Test that a value-taking flag without its value is a usage error
add_test!(missing_flag_value_fails, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-put", "-name"]).await;
    assert_eq!(output.code(), Some(1));
});
