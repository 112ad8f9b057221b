use attest_assert::{Sameness, assert_lines_same, assert_text_same, check_lines, check_text};

#[test]
fn equal_text_passes() {
    assert_text_same!("hello world", "hello world");
    assert_text_same!(String::from("owned"), "owned");
}

#[test]
#[should_panic(expected = "assert_text_same!(got, want)")]
fn unequal_text_panics() {
    assert_text_same!("ABC", "BCD");
}

#[test]
#[should_panic(expected = "while comparing greetings")]
fn message_arm_reaches_the_panic() {
    assert_text_same!("hello", "goodbye", "while comparing {}", "greetings");
}

#[test]
fn mismatch_message_shows_all_three_views() {
    // Default display style is plain: [-deleted-], {+inserted+}.
    let Sameness::Different(msg) = check_text("ABC", "BCD", 1) else {
        panic!("expected a mismatch");
    };
    assert_eq!(
        msg,
        "got:    [-A-]BC\nwant:   BC{+D+}\nmerged: [-A-]BC{+D+}"
    );
}

#[test]
fn equal_lines_pass() {
    let got = ["alpha", "beta"];
    let want = ["alpha", "beta"];
    assert_lines_same!(&got, &want);
    assert!(check_lines("lines", &got, &want, 1).is_same());
}

#[test]
#[should_panic(expected = "assert_lines_same!(got, want)")]
fn unequal_lines_panic() {
    let got = ["alpha", "beta"];
    let want = ["alpha", "gamma"];
    assert_lines_same!(&got, &want);
}

#[test]
fn line_report_carries_title_and_numbering() {
    let got = vec!["one".to_string(), "two".to_string()];
    let want = vec!["one".to_string(), "2".to_string()];
    let Sameness::Different(report) = check_lines("Captured", &got, &want, 1) else {
        panic!("expected a mismatch");
    };
    assert!(report.starts_with("Captured: got (2 lines) - want (2 lines)\n"));
    assert!(report.contains("1:1 one\n"));
    assert!(report.contains("[-2-]/{+two+}"));
}
