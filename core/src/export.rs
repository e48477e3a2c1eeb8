//! CSV serialization of the employee list and the delegation history.
//!
//! Column contract:
//!   employees: name,role,strengths,weaknesses
//!     strengths  = "label:rating" pairs joined by "; "
//!     weaknesses = labels joined by "; "
//!   history:   Task,Assigned To,Confidence
//!   history with tools: Task,Delegated To,Type,Confidence
//!     Confidence is "NN%".

use crate::{candidate::Employee, delegation::DelegationRecord};

const LIST_SEPARATOR: &str = "; ";

pub fn employees_csv(employees: &[Employee]) -> String {
    let mut out = String::new();
    push_row(&mut out, &["name", "role", "strengths", "weaknesses"]);
    for emp in employees {
        let strengths = emp
            .strengths
            .iter()
            .map(|s| format!("{}:{}", s.label, s.rating))
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        let weaknesses = emp.weaknesses.join(LIST_SEPARATOR);
        push_row(&mut out, &[emp.name.as_str(), emp.role.as_str(), strengths.as_str(), weaknesses.as_str()]);
    }
    out
}

/// `with_kind` selects the tool-aware layout with a Type column.
pub fn history_csv(records: &[DelegationRecord], with_kind: bool) -> String {
    let mut out = String::new();
    if with_kind {
        push_row(&mut out, &["Task", "Delegated To", "Type", "Confidence"]);
    } else {
        push_row(&mut out, &["Task", "Assigned To", "Confidence"]);
    }
    for rec in records {
        let confidence = format!("{}%", rec.confidence);
        if with_kind {
            push_row(
                &mut out,
                &[
                    rec.task_description.as_str(),
                    rec.assignee_name.as_str(),
                    rec.assignee_kind.label(),
                    confidence.as_str(),
                ],
            );
        } else {
            push_row(&mut out, &[rec.task_description.as_str(), rec.assignee_name.as_str(), confidence.as_str()]);
        }
    }
    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    let row = fields.iter().map(|f| escape(f)).collect::<Vec<_>>().join(",");
    out.push_str(&row);
    out.push('\n');
}

/// RFC 4180 quoting: wrap when needed, double embedded quotes.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
