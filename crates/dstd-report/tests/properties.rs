//! Property tests for report structure.

use proptest::prelude::*;

use dstd_model::{Attribute, AttributeLink, AttributeType, Category, Datastandard};
use dstd_report::{REPORT_HEADER, ReportBuilder};

const ATTRIBUTE_COUNT: usize = 4;

/// Links per category: (attribute index, optional flag). Indexes at or past
/// `ATTRIBUTE_COUNT` dangle.
fn chain_strategy() -> impl Strategy<Value = Vec<Vec<(usize, Option<bool>)>>> {
    prop::collection::vec(
        prop::collection::vec((0..ATTRIBUTE_COUNT + 2, any::<Option<bool>>()), 0..4),
        1..6,
    )
}

/// Categories `c0 <- c1 <- ...`, listed leaf first.
fn linear_chain(links: &[Vec<(usize, Option<bool>)>]) -> Datastandard {
    let mut categories: Vec<Category> = links
        .iter()
        .enumerate()
        .map(|(depth, category_links)| Category {
            id: format!("c{depth}"),
            name: format!("Category {depth}"),
            parent_id: depth.checked_sub(1).map(|parent| format!("c{parent}")),
            attribute_links: category_links
                .iter()
                .map(|(attribute, optional)| AttributeLink {
                    id: format!("a{attribute}"),
                    optional: *optional,
                })
                .collect(),
        })
        .collect();
    categories.reverse();
    let attributes = (0..ATTRIBUTE_COUNT)
        .map(|i| Attribute {
            id: format!("a{i}"),
            name: format!("Attr{i}"),
            description: String::new(),
            attribute_type: AttributeType::scalar("Text"),
            attribute_links: vec![],
            group_ids: vec![],
        })
        .collect();
    Datastandard {
        categories,
        attributes,
        attribute_groups: vec![],
    }
}

proptest! {
    #[test]
    fn header_first_and_ancestry_root_first(links in chain_strategy()) {
        let datastandard = linear_chain(&links);
        let leaf = format!("c{}", links.len() - 1);
        let report = ReportBuilder::new(&datastandard).report(&leaf).unwrap();

        prop_assert_eq!(report.records().next(), Some(REPORT_HEADER));
        let expected: Vec<String> = (0..links.len()).map(|depth| format!("c{depth}")).collect();
        prop_assert_eq!(report.ancestry(), expected.as_slice());

        let resolvable: usize = links
            .iter()
            .flatten()
            .filter(|(attribute, _)| *attribute < ATTRIBUTE_COUNT)
            .count();
        prop_assert_eq!(report.record_count(), 1 + resolvable);
    }

    #[test]
    fn rows_follow_category_order(links in chain_strategy()) {
        let datastandard = linear_chain(&links);
        let leaf = format!("c{}", links.len() - 1);
        let report = ReportBuilder::new(&datastandard).report(&leaf).unwrap();

        let mut last_depth = 0usize;
        for row in report.rows() {
            let depth: usize = row.category.trim_start_matches("Category ").parse().unwrap();
            prop_assert!(depth >= last_depth);
            last_depth = depth;
        }
    }

    #[test]
    fn report_is_idempotent(links in chain_strategy()) {
        let datastandard = linear_chain(&links);
        let leaf = format!("c{}", links.len() - 1);
        let builder = ReportBuilder::new(&datastandard);
        prop_assert_eq!(builder.report(&leaf).unwrap(), builder.report(&leaf).unwrap());
    }

    #[test]
    fn single_link_marker_follows_optional_flag(optional in any::<Option<bool>>()) {
        let datastandard = linear_chain(&[vec![(0, optional)]]);
        let report = ReportBuilder::new(&datastandard).report("c0").unwrap();
        let expected = if optional == Some(true) { "Attr0" } else { "Attr0*" };
        prop_assert_eq!(report.rows()[0].attribute.as_str(), expected);
    }
}
