use crate::add_test;
use crate::common::{Fixture, TEST_PROFILE, UNREACHABLE_ENDPOINT};

// Test that put without a name fails before contacting the store
add_test!(put_without_name_fails, async {
    let fixture = Fixture::new();

    for args in [
        &["-put"][..],
        &["-put", "-name", ""][..],
        &["-put", "-name="][..],
        &["--put", "--value", "v"][..],
    ] {
        let output = fixture.run(args).await;
        assert_eq!(output.code(), Some(1), "args: {args:?}");
        assert!(output.stdout.is_empty());
        assert!(
            output.stderr.contains("parameter name is required for put"),
            "stderr: {}",
            output.stderr
        );
    }
});

// Test that delete without a name fails before contacting the store
add_test!(delete_without_name_fails, async {
    let fixture = Fixture::new();

    for args in [&["-del"][..], &["-del", "-name", ""][..]] {
        let output = fixture.run(args).await;
        assert_eq!(output.code(), Some(1), "args: {args:?}");
        assert!(
            output.stderr.contains("parameter name is required for delete"),
            "stderr: {}",
            output.stderr
        );
        assert!(!output.stderr.contains("Parameter:"));
    }
});

// Test that an unreachable store makes listing fail with status 1
add_test!(list_remote_failure_exits_one, async {
    let fixture = Fixture::new();

    let output = fixture
        .run(&[
            "-profile",
            TEST_PROFILE,
            "-region",
            "us-east-1",
            "-endpoint",
            UNREACHABLE_ENDPOINT,
            "-json",
        ])
        .await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        output.stderr.contains("pstore: DescribeParameters:"),
        "stderr: {}",
        output.stderr
    );
});

// Test that an unreachable store makes put fail with status 1
add_test!(put_remote_failure_exits_one, async {
    let fixture = Fixture::new();

    let output = fixture
        .run(&[
            "-profile",
            TEST_PROFILE,
            "-endpoint",
            UNREACHABLE_ENDPOINT,
            "-put",
            "-name",
            "app/key",
            "-value",
            "v",
        ])
        .await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stderr.contains("pstore: PutParameter:"));
});

// Test that an unreachable store makes delete fail with status 1
add_test!(delete_remote_failure_exits_one, async {
    let fixture = Fixture::new();

    let output = fixture
        .run(&[
            "-profile",
            TEST_PROFILE,
            "-endpoint",
            UNREACHABLE_ENDPOINT,
            "-del",
            "-name",
            "app/key",
        ])
        .await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stderr.contains("pstore: DeleteParameter:"));
});
