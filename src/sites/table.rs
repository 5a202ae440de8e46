// src/sites/table.rs
//! Table-scan strategy for the one site that aggregates many operators in a
//! single rate table. Row labels vary slightly from the canonical operator
//! names ("Корал Трэвел ПАО" vs "Корал Трэвел"), so matching is three-way
//! containment and the first matching row wins.

use scraper::{ElementRef, Html};

use super::{sel, OperatorRow, TableSpec};
use crate::extract::extract_rate;
use crate::model::{Currency, RateRecord, SiteError};

/// Values read from one matched row: (rate text, percent, delta) per currency.
struct RowValues {
    eur: [String; 3],
    usd: [String; 3],
}

pub fn extract(doc: &Html, spec: &TableSpec) -> Result<Vec<RateRecord>, SiteError> {
    let table = doc.select(&sel(spec.table)).next().ok_or_else(|| {
        // The table is the precondition for trusting anything on this page.
        SiteError::MissingAnchor {
            operator: "rate table".to_string(),
            anchor: spec.table.to_string(),
        }
    })?;

    let row_sel = sel("tr");
    let cell_sel = sel("td");
    let label_sel = sel(spec.label_cell);
    let rows: Vec<ElementRef> = table.select(&row_sel).collect();

    let mut out = Vec::new();
    for op in spec.operators {
        match find_row_values(&rows, op, &label_sel, &cell_sel) {
            Some(values) => {
                out.push(record(op.operator, Currency::Eur, op.eur, &values.eur));
                out.push(record(op.operator, Currency::Usd, op.usd, &values.usd));
            }
            None => {
                tracing::warn!(operator = op.operator, "no matching row in rate table");
            }
        }
    }
    Ok(out)
}

fn record(
    operator: &str,
    currency: Currency,
    meta: super::RecordMeta,
    values: &[String; 3],
) -> RateRecord {
    RateRecord {
        id: meta.id,
        section_id: meta.section_id,
        currency,
        operator: operator.to_string(),
        rate: extract_rate(&values[0]),
        percent_to_reference: values[1].clone(),
        delta: values[2].clone(),
    }
}

fn find_row_values(
    rows: &[ElementRef],
    op: &OperatorRow,
    label_sel: &scraper::Selector,
    cell_sel: &scraper::Selector,
) -> Option<RowValues> {
    for row in rows {
        let Some(label_cell) = row.select(label_sel).next() else {
            continue;
        };
        // The label cell may carry extra markup; the operator name is the
        // first line of its text.
        let label = label_cell
            .text()
            .collect::<String>()
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        if !labels_match(&label, op.operator) {
            continue;
        }

        let cells: Vec<String> = row
            .select(cell_sel)
            .map(|c| c.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() < 7 {
            continue;
        }

        return Some(RowValues {
            eur: [cells[1].clone(), cells[2].clone(), cells[3].clone()],
            usd: [cells[4].clone(), cells[5].clone(), cells[6].clone()],
        });
    }
    None
}

/// Fuzzy containment match: exact, label contains target, or target
/// contains label.
pub fn labels_match(label: &str, target: &str) -> bool {
    label == target || label.contains(target) || target.contains(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::RecordMeta;

    const OPERATORS: &[OperatorRow] = &[
        OperatorRow {
            operator: "ЦБ РФ",
            eur: RecordMeta {
                id: 3153,
                section_id: 539,
            },
            usd: RecordMeta {
                id: 3167,
                section_id: 539,
            },
        },
        OperatorRow {
            operator: "Корал Трэвел",
            eur: RecordMeta {
                id: 3141,
                section_id: 527,
            },
            usd: RecordMeta {
                id: 3155,
                section_id: 527,
            },
        },
    ];

    const SPEC: TableSpec = TableSpec {
        table: "table.mod_rate_today",
        label_cell: "td.mod_rate_oper div",
        operators: OPERATORS,
    };

    fn page(rows: &str) -> String {
        format!(r#"<html><body><table class="mod_rate_today">{rows}</table></body></html>"#)
    }

    fn row(label: &str, values: [&str; 6]) -> String {
        format!(
            "<tr><td class=\"mod_rate_oper\"><div>{label}</div></td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            values[0], values[1], values[2], values[3], values[4], values[5],
        )
    }

    #[test]
    fn containment_match_rules() {
        assert!(labels_match("Корал Трэвел", "Корал Трэвел"));
        assert!(labels_match("Корал Трэвел ПАО", "Корал Трэвел"));
        assert!(labels_match("Корал", "Корал Трэвел"));
        assert!(!labels_match("Совершенно другое", "Корал Трэвел"));
    }

    #[test]
    fn matched_rows_produce_eur_and_usd_records() {
        let html = page(&format!(
            "{}{}",
            row("ЦБ РФ", ["98,50", "100%", "0,00", "88,60", "100%", "0,00"]),
            row(
                "Корал Трэвел ПАО",
                ["99,80", "101,3%", "+1,30", "89,90", "101,5%", "+1,30"]
            ),
        ));
        let doc = Html::parse_document(&html);
        let records = extract(&doc, &SPEC).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].id, 3153);
        assert_eq!(records[0].rate.as_deref(), Some("98.50"));
        assert_eq!(records[0].percent_to_reference, "100%");
        assert_eq!(records[1].id, 3167);
        assert_eq!(records[1].rate.as_deref(), Some("88.60"));

        // Fuzzy-matched row
        assert_eq!(records[2].operator, "Корал Трэвел");
        assert_eq!(records[2].rate.as_deref(), Some("99.80"));
        assert_eq!(records[3].delta, "+1,30");
    }

    #[test]
    fn unmatched_operator_is_skipped_without_error() {
        let html = page(&row(
            "ЦБ РФ",
            ["98,50", "100%", "0,00", "88,60", "100%", "0,00"],
        ));
        let doc = Html::parse_document(&html);
        let records = extract(&doc, &SPEC).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.operator == "ЦБ РФ"));
    }

    #[test]
    fn short_rows_are_ignored() {
        let html = page(
            "<tr><td class=\"mod_rate_oper\"><div>ЦБ РФ</div></td><td>98,50</td></tr>",
        );
        let doc = Html::parse_document(&html);
        let records = extract(&doc, &SPEC).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_table_is_structural_failure() {
        let doc = Html::parse_document("<html><body><p>blocked</p></body></html>");
        let err = extract(&doc, &SPEC).unwrap_err();
        assert!(matches!(err, SiteError::MissingAnchor { .. }));
    }

    #[test]
    fn blank_rate_cell_keeps_record() {
        let html = page(&row("ЦБ РФ", ["-", "", "", "88,60", "100%", "0,00"]));
        let doc = Html::parse_document(&html);
        let records = extract(&doc, &SPEC).unwrap();
        assert_eq!(records[0].rate, None);
        assert_eq!(records[1].rate.as_deref(), Some("88.60"));
    }
}
