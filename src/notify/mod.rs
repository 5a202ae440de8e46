// src/notify/mod.rs
pub mod email;

pub use email::EmailNotifier;

use crate::model::RunSummary;

/// HTML report body for the run email. Rendering is separate from sending
/// so the layout is unit-testable.
pub fn render_report(summary: &RunSummary, execution_secs: f64, api_sent: bool) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let api_line = if api_sent {
        "sent successfully"
    } else {
        "FAILED"
    };

    let errors_block = if summary.errors.is_empty() {
        String::new()
    } else {
        let items: String = summary
            .errors
            .iter()
            .map(|e| format!("<li>{e}</li>"))
            .collect();
        format!("<h3>Errors:</h3><ul>{items}</ul>")
    };

    format!(
        "<html><body>\
         <h2>Currency rates scrape report</h2>\
         <p><strong>Finished:</strong> {now}</p>\
         <p><strong>Duration:</strong> {execution_secs:.2} s</p>\
         <h3>Summary:</h3>\
         <ul>\
         <li>Total sites: {total}</li>\
         <li>Successful: {ok}</li>\
         <li>Failed: {failed}</li>\
         <li>Total records: {records}</li>\
         <li>API delivery: {api_line}</li>\
         </ul>\
         {errors_block}\
         </body></html>",
        total = summary.total_sites,
        ok = summary.successful_sites,
        failed = summary.failed_sites,
        records = summary.total_records,
    )
}

/// Body for the run-scoped fatal alert.
pub fn render_critical(error: &str) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "<html><body><h2>Critical scrape error</h2><p>{error}</p><p>Time: {now}</p></body></html>"
    )
}
