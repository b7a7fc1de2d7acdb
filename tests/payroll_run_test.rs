mod common;

use payslip_mailer::application::payroll::PayrollRun;
use payslip_mailer::application::report::RunStatus;
use payslip_mailer::domain::money::Money;
use payslip_mailer::infrastructure::in_memory::{InMemoryPayslipRenderer, RecordingMailer};
use payslip_mailer::infrastructure::pdf::PdfPayslipRenderer;
use payslip_mailer::interfaces::loader::load_employees;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_end_to_end_single_employee() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    common::write_employees_csv(
        &input,
        &[["E1", "Jane Doe", "jane@x.com", "5000", "200", "150"]],
    )
    .unwrap();

    let output_dir = dir.path().join("payslips");
    let mailer = RecordingMailer::new();
    let payroll = PayrollRun::new(
        Box::new(PdfPayslipRenderer::new(&output_dir)),
        Box::new(mailer.clone()),
    );

    let report = payroll.process(&load_employees(&input).unwrap()).await;

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].status, RunStatus::Sent);
    assert_eq!(report.entries[0].net_salary, Some(Money::new(dec!(5050))));

    let payslip = output_dir.join("Jane_Doe.pdf");
    assert!(std::fs::read(&payslip).unwrap().starts_with(b"%PDF"));

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@x.com");
    assert_eq!(sent[0].subject, "Your Payslip for This Month");
    assert!(sent[0].body.starts_with("Dear Jane Doe,"));
    assert_eq!(sent[0].attachment, payslip);
}

#[tokio::test]
async fn test_payslip_content_carries_net_salary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    common::write_employees_csv(
        &input,
        &[
            ["E1", "Jane Doe", "jane@x.com", "5000", "200", "150"],
            ["E2", "John Roe", "john@x.com", "4000", "100", "abc"],
        ],
    )
    .unwrap();

    let renderer = InMemoryPayslipRenderer::new("payslips");
    let mailer = RecordingMailer::new();
    let payroll = PayrollRun::new(Box::new(renderer.clone()), Box::new(mailer.clone()));
    payroll.process(&load_employees(&input).unwrap()).await;

    let documents = renderer.documents();
    assert_eq!(documents.len(), 1);
    let jane = &documents[&std::path::Path::new("payslips").join("Jane_Doe.pdf")];
    assert!(jane.lines().any(|line| line.contains("5050")));
    assert!(!documents.keys().any(|p| p.ends_with("John_Roe.pdf")));
    assert!(mailer.sent().await.iter().all(|m| m.to != "john@x.com"));
}

#[tokio::test]
async fn test_rerun_overwrites_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    common::write_employees_csv(
        &input,
        &[["E1", "Jane Doe", "jane@x.com", "5000", "200", "150"]],
    )
    .unwrap();
    let output_dir = dir.path().join("payslips");
    let records = load_employees(&input).unwrap();

    let payslip = output_dir.join("Jane_Doe.pdf");
    let mut contents = Vec::new();
    for _ in 0..2 {
        let payroll = PayrollRun::new(
            Box::new(PdfPayslipRenderer::new(&output_dir)),
            Box::new(RecordingMailer::new()),
        );
        let report = payroll.process(&records).await;
        assert_eq!(report.entries[0].status, RunStatus::Sent);
        contents.push(std::fs::read(&payslip).unwrap());
    }

    let files: Vec<_> = std::fs::read_dir(&output_dir).unwrap().collect();
    assert_eq!(files.len(), 1);
    assert_eq!(
        common::pdf_without_dates(&contents[0]),
        common::pdf_without_dates(&contents[1])
    );
}
