use super::*;

trait Visibility {
    fn visible(&self, rows: &[FileRow]) -> Vec<bool>;
}

impl Visibility for FileFilter {
    fn visible(&self, rows: &[FileRow]) -> Vec<bool> {
        rows.iter().map(|row| self.matches_row(row)).collect()
    }
}

fn rows() -> Vec<FileRow> {
    vec![FileRow::new("report.pdf", "finance"), FileRow::new("notes.txt", "misc")]
}

#[test]
fn empty_filter_shows_everything() {
    assert_eq!(FileFilter::default().visible(&rows()), vec![true, true]);
    assert_eq!(FileFilter::new("", "").visible(&rows()), vec![true, true]);
}

#[test]
fn search_term_selects_by_filename() {
    assert_eq!(FileFilter::new("report", "").visible(&rows()), vec![true, false]);
}

#[test]
fn category_selects_exactly() {
    assert_eq!(FileFilter::new("", "misc").visible(&rows()), vec![false, true]);
    assert_eq!(FileFilter::new("", "Misc").visible(&rows()), vec![false, false]);
    assert_eq!(FileFilter::new("", "mis").visible(&rows()), vec![false, false]);
}

#[test]
fn unmatched_search_hides_everything() {
    assert_eq!(FileFilter::new("xyz", "").visible(&rows()), vec![false, false]);
}

#[test]
fn search_is_case_insensitive_both_ways() {
    let rows = vec![FileRow::new("Quarterly-REPORT.PDF", "finance")];
    assert_eq!(FileFilter::new("report", "").visible(&rows), vec![true]);
    assert_eq!(FileFilter::new("RePoRt", "").visible(&rows), vec![true]);
}

#[test]
fn search_and_category_must_both_match() {
    assert_eq!(FileFilter::new("report", "misc").visible(&rows()), vec![false, false]);
    assert_eq!(FileFilter::new(".txt", "misc").visible(&rows()), vec![false, true]);
}

#[test]
fn rows_without_attributes_only_match_empty_criteria() {
    let rows = vec![FileRow::new("", "")];
    assert_eq!(FileFilter::default().visible(&rows), vec![true]);
    assert_eq!(FileFilter::new("a", "").visible(&rows), vec![false]);
    assert_eq!(FileFilter::new("", "misc").visible(&rows), vec![false]);
}
