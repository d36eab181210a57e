use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;

use labtrend_lib::intelligence::{classify_record, Classification};
use labtrend_lib::models::MeasurementRecord;
use labtrend_lib::pipeline::extraction::{DocumentHandle, PlainTextSource, ReportParser};

#[derive(Serialize)]
struct ParsedReport {
    document: String,
    record: MeasurementRecord,
    classifications: Vec<Classification>,
}

fn main() -> ExitCode {
    labtrend_lib::init_tracing();

    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: labtrend <report.txt>");
        return ExitCode::from(2);
    };

    let document = DocumentHandle::new(PathBuf::from(path));
    let parser = ReportParser::new(Box::new(PlainTextSource::new()));

    let record = match parser.parse_document(&document) {
        Ok(record) => record,
        Err(e) => {
            tracing::error!(document = %document.name, error = %e, "Failed to parse report");
            eprintln!("{}: {e}", document.name);
            return ExitCode::FAILURE;
        }
    };

    let report = ParsedReport {
        document: document.name.clone(),
        classifications: classify_record(&record),
        record,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}
