//! Output formatting utilities

use crate::domain::Remark;

fn branch_label(remark: &Remark) -> &str {
    remark.branch.as_deref().unwrap_or("-")
}

/// Format a list of remarks for display
pub fn format_remark_list(remarks: &[Remark]) -> String {
    if remarks.is_empty() {
        return "No remarks found".to_string();
    }

    let mut output = String::new();
    for remark in remarks {
        output.push_str(&format!(
            "{}:{}  [{}]  {}\n",
            remark.file_name,
            remark.line_number,
            branch_label(remark),
            remark.text
        ));
    }
    output
}

/// Format one remark with its full text
pub fn format_remark(remark: &Remark) -> String {
    format!(
        "{}:{} [{}]\n{}\n",
        remark.file_name,
        remark.line_number,
        branch_label(remark),
        remark.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_remark_list(&[]), "No remarks found");
    }

    #[test]
    fn test_format_remark_list() {
        let remarks = vec![
            Remark::new("a.rs", "h", 3, "first").on_branch("main"),
            Remark::new("b.rs", "h", 10, "second"),
        ];

        let output = format_remark_list(&remarks);
        assert_eq!(output, "a.rs:3  [main]  first\nb.rs:10  [-]  second\n");
    }

    #[test]
    fn test_format_single_remark() {
        let remark = Remark::new("a.rs", "h", 3, "multi\nline").on_branch("dev");
        assert_eq!(format_remark(&remark), "a.rs:3 [dev]\nmulti\nline\n");
    }
}
