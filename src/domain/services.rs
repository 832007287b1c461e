use crate::domain::model::{CorpInfo, TableRow};
use std::cmp::Ordering;

/// Badge shown in the official column for verified listings.
pub const OFFICIAL_BADGE: &str = r#"<img src="https://github.com/ejn-jimmy/node-backend-in-korea/assets/142366502/e5e8cf74-3c26-4705-b56c-97fb3c6e11bf" width="20" height="20"/>"#;

/// SORT BY official DESC, nodeDeveloperRate DESC, nodeProjectRate DESC.
pub fn compare_listings(a: &CorpInfo, b: &CorpInfo) -> Ordering {
    b.official
        .cmp(&a.official)
        .then_with(|| b.node_developer_rate.total_cmp(&a.node_developer_rate))
        .then_with(|| b.node_project_rate.total_cmp(&a.node_project_rate))
}

pub fn sort_listings(records: &mut [CorpInfo]) {
    records.sort_by(compare_listings);
}

/// Pure per-record formatting into display-ready cells. Zero rates render as
/// empty cells rather than "0%".
pub fn format_row(info: &CorpInfo) -> TableRow {
    TableRow {
        official: if info.official {
            OFFICIAL_BADGE.to_string()
        } else {
            String::new()
        },
        name: info.name.clone(),
        node_developer_rate: format_rate(info.node_developer_rate),
        node_project_rate: format_rate(info.node_project_rate),
        frameworks: info.frameworks.clone(),
        link: info.link.clone(),
        remote_work: if info.remote_work { "O" } else { "X" }.to_string(),
        army: info.army.clone(),
    }
}

fn format_rate(rate: f64) -> String {
    if rate == 0.0 {
        String::new()
    } else {
        format!("{}%", rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(official: bool, developer_rate: f64, project_rate: f64) -> CorpInfo {
        CorpInfo {
            name: "Corp".to_string(),
            link: "http://example.com".to_string(),
            army: "E".to_string(),
            official,
            remote_work: true,
            frameworks: "Express".to_string(),
            node_project_rate: project_rate,
            node_developer_rate: developer_rate,
        }
    }

    #[test]
    fn official_outranks_higher_rates() {
        let mut records = vec![info(false, 99.0, 99.0), info(true, 50.0, 10.0)];
        sort_listings(&mut records);

        assert!(records[0].official);
        assert_eq!(records[1].node_developer_rate, 99.0);
    }

    #[test]
    fn developer_rate_breaks_official_ties() {
        let mut records = vec![info(true, 30.0, 90.0), info(true, 70.0, 10.0)];
        sort_listings(&mut records);

        assert_eq!(records[0].node_developer_rate, 70.0);
    }

    #[test]
    fn project_rate_breaks_remaining_ties() {
        let mut records = vec![info(true, 50.0, 20.0), info(true, 50.0, 80.0)];
        sort_listings(&mut records);

        assert_eq!(records[0].node_project_rate, 80.0);
    }

    #[test]
    fn sorted_output_is_monotonic_on_all_three_keys() {
        let mut records = vec![
            info(false, 10.0, 40.0),
            info(true, 10.0, 0.0),
            info(false, 80.0, 5.0),
            info(true, 10.0, 90.0),
            info(true, 95.0, 0.0),
        ];
        sort_listings(&mut records);

        for pair in records.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.official >= b.official);
            if a.official == b.official {
                assert!(a.node_developer_rate >= b.node_developer_rate);
                if a.node_developer_rate == b.node_developer_rate {
                    assert!(a.node_project_rate >= b.node_project_rate);
                }
            }
        }
    }

    #[test]
    fn official_listing_gets_badge_and_glyphs() {
        let row = format_row(&info(true, 90.0, 80.0));

        assert_eq!(row.official, OFFICIAL_BADGE);
        assert_eq!(row.remote_work, "O");
        assert_eq!(row.node_developer_rate, "90%");
        assert_eq!(row.node_project_rate, "80%");
    }

    #[test]
    fn unofficial_listing_gets_empty_badge_cell() {
        let mut listing = info(false, 0.0, 0.0);
        listing.remote_work = false;
        let row = format_row(&listing);

        assert_eq!(row.official, "");
        assert_eq!(row.remote_work, "X");
        assert_eq!(row.node_developer_rate, "");
        assert_eq!(row.node_project_rate, "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let listing = info(true, 42.0, 7.0);
        assert_eq!(format_row(&listing), format_row(&listing));
    }
}
