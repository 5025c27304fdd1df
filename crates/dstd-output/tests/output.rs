use dstd_model::{Attribute, AttributeLink, AttributeType, Category, Datastandard};
use dstd_output::{OutputFormat, write_csv, write_json, write_report};
use dstd_report::{Report, report};
use dstd_standards::load_default_datastandard;

fn small_report() -> Report {
    let datastandard = Datastandard {
        categories: vec![
            Category {
                id: "root".to_string(),
                name: "Root".to_string(),
                parent_id: None,
                attribute_links: vec![AttributeLink::required("name")],
            },
            Category {
                id: "child".to_string(),
                name: "Child".to_string(),
                parent_id: Some("root".to_string()),
                attribute_links: vec![AttributeLink::optional("size")],
            },
        ],
        attributes: vec![
            Attribute {
                id: "name".to_string(),
                name: "Name".to_string(),
                description: "Display name".to_string(),
                attribute_type: AttributeType::scalar("Text"),
                attribute_links: vec![],
                group_ids: vec![],
            },
            Attribute {
                id: "size".to_string(),
                name: "Size".to_string(),
                description: "Size, in cm".to_string(),
                attribute_type: AttributeType::multi_value("Number"),
                attribute_links: vec![],
                group_ids: vec![],
            },
        ],
        attribute_groups: vec![],
    };
    report(&datastandard, "child").expect("report")
}

fn render(report: &Report, format: OutputFormat) -> String {
    let mut buffer = Vec::new();
    write_report(report, format, &mut buffer).expect("write report");
    String::from_utf8(buffer).expect("utf8 output")
}

#[test]
fn csv_output_snapshot() {
    let output = render(&small_report(), OutputFormat::Csv);
    insta::assert_snapshot!(output, @r#"
    Category,Attribute,Description,Type,Groups
    Root,Name*,Display name,Text,
    Child,Size,"Size, in cm",Number[],
    "#);
}

#[test]
fn json_output_snapshot() {
    let output = render(&small_report(), OutputFormat::Json);
    insta::assert_snapshot!(output, @r#"
    [
      [
        "Category",
        "Attribute",
        "Description",
        "Type",
        "Groups"
      ],
      [
        "Root",
        "Name*",
        "Display name",
        "Text",
        ""
      ],
      [
        "Child",
        "Size",
        "Size, in cm",
        "Number[]",
        ""
      ]
    ]
    "#);
}

#[test]
fn csv_quotes_multiline_cells() {
    let datastandard = load_default_datastandard().expect("load bundled datastandard");
    let report = report(&datastandard, "apparel").expect("report");
    let mut buffer = Vec::new();
    write_csv(&report, &mut buffer).expect("write csv");
    let output = String::from_utf8(buffer).expect("utf8 output");
    assert!(output.contains("Apparel,Color*,Primary color,string,\"Appearance\nShared\"\n"));
    assert!(output.contains(
        "Apparel,Materials,Material composition,\"composite{\n  Material*: string\n  Share: integer\n}[]\",Appearance\n"
    ));
}

#[test]
fn json_round_trips_records() {
    let report = small_report();
    let mut buffer = Vec::new();
    write_json(&report, &mut buffer).expect("write json");
    let parsed: Vec<Vec<String>> = serde_json::from_slice(&buffer).expect("parse json");
    let expected: Vec<Vec<String>> = report
        .records()
        .map(|record| record.iter().map(|cell| (*cell).to_string()).collect())
        .collect();
    assert_eq!(parsed, expected);
}
