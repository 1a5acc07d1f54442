//! CLI integration tests for command-line behavior.
//!
//! Runs the actual binary to cover argument parsing, output formatting, and
//! exit codes. The verify-address command is only exercised through its help
//! text and gate failure path; no test talks to a real geocoding service.

use assert_cmd::Command;
use predicates::prelude::*;

/// Creates a test Command for the contactkit binary.
fn contactkit_cmd() -> Command {
    Command::cargo_bin("contactkit").expect("binary under test")
}

mod argument_parsing {
    use super::*;

    #[test]
    fn test_help_flag() {
        contactkit_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("mask"))
            .stdout(predicate::str::contains("digits"))
            .stdout(predicate::str::contains("check-email"))
            .stdout(predicate::str::contains("verify-address"));
    }

    #[test]
    fn test_version_flag() {
        contactkit_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("contactkit"));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        contactkit_cmd().assert().failure();
    }
}

mod mask_command {
    use super::*;

    #[test]
    fn test_masks_ten_digit_number() {
        contactkit_cmd()
            .args(["mask", "5552345678"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(555) 234-5678"));
    }

    #[test]
    fn test_masks_international_number() {
        contactkit_cmd()
            .args(["mask", "15552345678"])
            .assert()
            .success()
            .stdout(predicate::str::contains("+1 (555) 234-5678"));
    }

    #[test]
    fn test_strips_existing_punctuation() {
        contactkit_cmd()
            .args(["mask", "555-234-5678"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(555) 234-5678"));
    }

    #[test]
    fn test_verbose_shows_digit_string() {
        contactkit_cmd()
            .args(["--verbose", "mask", "555-234-5678"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Digits: 5552345678"));
    }
}

mod digits_command {
    use super::*;

    #[test]
    fn test_extracts_digits() {
        contactkit_cmd()
            .args(["digits", "+1 (555) 234-5678"])
            .assert()
            .success()
            .stdout(predicate::str::contains("15552345678"));
    }
}

mod check_email_command {
    use super::*;

    #[test]
    fn test_plausible_address_succeeds() {
        contactkit_cmd()
            .args(["check-email", "user@example.com"])
            .assert()
            .success()
            .stdout(predicate::str::contains("plausible"));
    }

    #[test]
    fn test_implausible_address_fails_with_exit_code() {
        contactkit_cmd()
            .args(["check-email", "not-an-email"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("not a plausible"));
    }
}

mod verify_address_command {
    use super::*;

    #[test]
    fn test_unroutable_address_reports_no_result() {
        // Gate failure short-circuits before the network, so the
        // unreachable endpoint is never contacted.
        contactkit_cmd()
            .args([
                "verify-address",
                "--city",
                "Boston",
                "--state",
                "MA",
                "--zip",
                "99",
                "--endpoint",
                "http://127.0.0.1:1/geocode/json",
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains("no result"));
    }

    #[test]
    fn test_requires_city_and_state() {
        contactkit_cmd()
            .args(["verify-address", "--city", "Boston"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("state").or(predicate::str::contains("required")));
    }
}
