use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payslip_mailer::application::payroll::PayrollRun;
use payslip_mailer::config::RelayConfig;
use payslip_mailer::domain::ports::{MailerBox, PayslipRendererBox};
use payslip_mailer::infrastructure::pdf::PdfPayslipRenderer;
use payslip_mailer::infrastructure::smtp::SmtpMailer;
use payslip_mailer::interfaces::csv::report_writer::RunReportWriter;
use payslip_mailer::interfaces::loader::load_employees;
use payslip_mailer::telemetry::setup_tracing;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Employee spreadsheet (xlsx, xls, ods) or CSV export
    #[arg(default_value = "employees.xlsx")]
    input: PathBuf,

    /// Directory the payslip PDFs are written to
    #[arg(long, default_value = "payslips")]
    output_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();
    setup_tracing();
    let cli = Cli::parse();

    // Fail on missing credentials before touching any record.
    let config = RelayConfig::from_env().into_diagnostic()?;
    let employees = load_employees(&cli.input).into_diagnostic()?;

    let renderer: PayslipRendererBox = Box::new(PdfPayslipRenderer::new(cli.output_dir));
    let mailer: MailerBox = Box::new(SmtpMailer::new(&config).into_diagnostic()?);
    let payroll = PayrollRun::new(renderer, mailer);

    let report = payroll.process(&employees).await;

    let stdout = io::stdout();
    let mut writer = RunReportWriter::new(stdout.lock());
    writer.write_report(&report).into_diagnostic()?;

    Ok(())
}
