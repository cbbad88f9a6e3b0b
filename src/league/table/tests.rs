//! Unit tests for table helpers

use super::*;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_any_cell_matches() {
        let rows = vec![
            row(&["Ahmed", "Advanced"]),
            row(&["Farhan", "Beginner"]),
            row(&["Bilal", "Intermediate"]),
        ];

        assert_eq!(filter_rows(&rows, "begin").len(), 1);
        assert_eq!(filter_rows(&rows, "AN").len(), 1);
        assert_eq!(filter_rows(&rows, "a").len(), 3);
        assert_eq!(filter_rows(&rows, "").len(), 3);
        assert!(filter_rows(&rows, "zzz").is_empty());
    }
}

#[cfg(test)]
mod pagination_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Pagination::default();
        assert_eq!(p.page(), 0);
        assert_eq!(p.rows_per_page(), 10);
    }

    #[test]
    fn test_slice_and_count() {
        let items: Vec<u32> = (1..=25).collect();
        let mut p = Pagination::new(0, 10);

        assert_eq!(p.page_count(items.len()), 3);
        assert_eq!(p.slice(&items), &items[0..10]);

        p.set_page(2);
        assert_eq!(p.slice(&items), &[21, 22, 23, 24, 25]);
        assert_eq!(p.label(items.len()), "21-25 of 25");

        p.set_page(3);
        assert!(p.slice(&items).is_empty());
    }

    #[test]
    fn test_changing_page_size_resets_page() {
        let mut p = Pagination::new(4, 5);
        p.set_rows_per_page(25);

        assert_eq!(p.page(), 0);
        assert_eq!(p.rows_per_page(), 25);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let p = Pagination::new(0, 0);
        assert_eq!(p.rows_per_page(), 1);
        assert_eq!(p.page_count(3), 3);
    }

    #[test]
    fn test_label_empty() {
        assert_eq!(Pagination::default().label(0), "0-0 of 0");
        assert_eq!(Pagination::default().page_count(0), 0);
    }
}

#[cfg(test)]
mod series_tests {
    use super::*;

    #[test]
    fn test_first_numeric_column_is_used() {
        let values = vec![
            row(&["Name", "Category", "Played", "Won"]),
            row(&["Ahmed", "Advanced", "3", "2"]),
            row(&["", "Beginner", "1.5", "0"]),
            row(&["Umer", "Intermediate", "n/a", "1"]),
        ];

        let series = numeric_series(&values);

        assert_eq!(
            series,
            vec![
                SeriesPoint { name: "Ahmed".to_string(), value: 3.0 },
                SeriesPoint { name: "Row 2".to_string(), value: 1.5 },
                SeriesPoint { name: "Umer".to_string(), value: 0.0 },
            ]
        );
    }

    #[test]
    fn test_limited_to_ten_rows() {
        let mut values = vec![row(&["Name", "Points"])];
        values.extend((0..15).map(|i| row(&["P", &i.to_string()])));

        assert_eq!(numeric_series(&values).len(), 10);
    }

    #[test]
    fn test_no_numeric_column() {
        let values = vec![row(&["Name"]), row(&["Ahmed"])];
        assert!(numeric_series(&values).is_empty());
        assert!(numeric_series(&[]).is_empty());
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5 pts"), Some(12.5));
        assert_eq!(parse_float_prefix("-3"), Some(-3.0));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
    }
}
