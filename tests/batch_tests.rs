use pretty_assertions::assert_eq;
use radix::batch::{process_file, BatchOptions};
use tempfile::TempDir;

#[test]
fn test_mixed_file_reports_every_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "# hex dump\nFF\nG1\n0x10\n\n-1A\n").unwrap();

    let options = BatchOptions { source_base: 16, target_base: 10 };
    let report = process_file(&input, options).unwrap();

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.outcomes[0].outcome, Ok("255".to_string()));
    assert_eq!(report.outcomes[2].outcome, Ok("16".to_string()));
    assert_eq!(report.outcomes[3].outcome, Ok("-26".to_string()));
}

#[test]
fn test_report_written_atomically() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "1010\n1100\n").unwrap();

    let options = BatchOptions { source_base: 2, target_base: 16 };
    let report = process_file(&input, options).unwrap();

    let output = dir.path().join("out.txt");
    report.save_to_file(&output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "1010 => A\n1100 => C\n");
    assert!(!dir.path().join("out.tmp").exists());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let options = BatchOptions { source_base: 10, target_base: 2 };
    let result = process_file("/no/such/file", options);
    assert!(matches!(result, Err(radix::Error::Io(_))));
}
