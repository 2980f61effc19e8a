#![forbid(unsafe_code)]
use chrono::NaiveDate;
use routinely::{
    selection_summary, LabelError, Labels, MarkdownTable, Schedule, ScheduleRenderer, Selection,
    TextListing,
};
use std::fs;
use tempfile::tempdir;

fn sample_schedule() -> Schedule {
    Schedule::new(vec![
        Selection::new(vec![0, 1, 2, 3]),
        Selection::new(vec![6, 3, 5, 4]),
    ])
}

fn sample_labels() -> Labels {
    Labels::new(["A", "B", "C", "D", "E", "F", "G"])
}

#[test]
fn labels_are_read_line_by_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("labels.txt");
    fs::write(&path, "scales\r\nchords\narpeggios\n\n").unwrap();

    let labels = Labels::from_path(&path).unwrap();
    assert_eq!(labels.len(), 3);
    assert_eq!(labels.get(0), Ok("scales"));
    assert_eq!(labels.get(2), Ok("arpeggios"));
}

#[test]
fn short_label_file_reports_missing_label() {
    let labels = Labels::parse("scales\nchords\n");
    assert_eq!(
        labels.get(5),
        Err(LabelError::Missing {
            index: 5,
            available: 2
        })
    );
    assert!(labels.ensure_covers(&[0, 1, 2]).is_err());

    let err = TextListing
        .render(&sample_schedule(), Some(&labels))
        .unwrap_err();
    assert_eq!(
        err,
        LabelError::Missing {
            index: 2,
            available: 2
        }
    );
}

#[test]
fn missing_label_file_falls_back_to_none() {
    let dir = tempdir().unwrap();
    assert!(routinely::load_labels_or_warn(dir.path().join("absent.txt")).is_none());
}

#[test]
fn text_listing_uses_labels_or_indices() {
    let schedule = sample_schedule();

    let with_labels = TextListing.render(&schedule, Some(&sample_labels())).unwrap();
    assert_eq!(
        with_labels,
        "Day 1\n  - A\n  - B\n  - C\n  - D\n\nDay 2\n  - D\n  - E\n  - F\n  - G\n"
    );

    let bare = TextListing.render(&schedule, None).unwrap();
    assert!(bare.starts_with("Day 1\n  - 0\n  - 1\n"));
    assert!(bare.ends_with("  - 6\n"));
}

#[test]
fn markdown_table_lists_days_and_counts() {
    let renderer = MarkdownTable {
        generated_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        universe: (0..7).collect(),
    };
    let markdown = renderer
        .render(&sample_schedule(), Some(&sample_labels()))
        .unwrap();

    let expected = "# Practice Routine\n\nGenerated on January 01 2024\n\n## Days\n\
| Day | Item 1 | Item 2 | Item 3 | Item 4 | Done |\n\
| --- | --- | --- | --- | --- | --- |\n\
| 01 | A | B | C | D |  |\n\
| 02 | D | E | F | G |  |\n\
\n## Selection Counts\n\n| Focus area | Count |\n| --- | --- |\n\
| A | 1 |\n| B | 1 |\n| C | 1 |\n| D | 2 |\n| E | 1 |\n| F | 1 |\n| G | 1 |\n";
    assert_eq!(markdown, expected);
}

#[test]
fn summary_counts_every_index() {
    let summary = selection_summary(&sample_schedule(), &[0, 1, 2, 3, 4, 5, 6], None).unwrap();
    assert_eq!(summary, "0: 1\n1: 1\n2: 1\n3: 2\n4: 1\n5: 1\n6: 1\n");
}
