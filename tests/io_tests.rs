use lounge_search::io::{parse_lounges, read_lounges, read_lounges_from_reader};
use lounge_search::models::Lounge;
use std::io::Write;
use tempfile::NamedTempFile;

// Test fixtures - sample data for testing

fn create_sample_csv_content() -> String {
    r#"card,Lounge,Terminal,Airport,Image
HDFC Regalia,Priority Pass Lounge,T3,Indira Gandhi International Airport (DEL),https://example.com/pp.jpg
HDFC Regalia,"Plaza Premium Lounge, Domestic",T2,Chhatrapati Shivaji Maharaj International Airport (BOM),
Axis Magnus,Encalm Lounge,T3,Indira Gandhi International Airport (DEL),https://example.com/encalm.png
,Orphan Lounge,T1,Kempegowda International Airport (BLR),"#
        .to_string()
}

fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

// Tests for read_lounges function

#[test]
fn test_read_lounges_valid_file() {
    let temp_file = write_temp_csv(&create_sample_csv_content());

    let lounges = read_lounges(temp_file.path().to_str().unwrap()).unwrap();

    // Every row is kept, including the one without a card name
    assert_eq!(lounges.len(), 4);

    assert_eq!(lounges[0].card, "HDFC Regalia");
    assert_eq!(lounges[0].name, "Priority Pass Lounge");
    assert_eq!(lounges[0].terminal, "T3");
    assert_eq!(
        lounges[0].airport,
        "Indira Gandhi International Airport (DEL)"
    );
    assert_eq!(lounges[0].image_url(), Some("https://example.com/pp.jpg"));

    assert_eq!(lounges[1].name, "Plaza Premium Lounge, Domestic");
    assert_eq!(lounges[1].image, None);

    assert_eq!(lounges[3].card, "");
}

#[test]
fn test_read_lounges_preserves_file_order() {
    let temp_file = write_temp_csv(&create_sample_csv_content());

    let lounges = read_lounges(temp_file.path().to_str().unwrap()).unwrap();
    let names: Vec<&str> = lounges.iter().map(|l| l.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Priority Pass Lounge",
            "Plaza Premium Lounge, Domestic",
            "Encalm Lounge",
            "Orphan Lounge",
        ]
    );
}

#[test]
fn test_read_lounges_nonexistent_file() {
    let result = read_lounges("/this/file/does/not/exist.csv");
    assert!(result.is_err());
}

#[test]
fn test_read_lounges_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();

    let lounges = read_lounges(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(lounges.len(), 0);
}

#[test]
fn test_read_lounges_only_headers() {
    let temp_file = write_temp_csv("card,Lounge,Terminal,Airport,Image");

    let lounges = read_lounges(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(lounges.len(), 0);
}

#[test]
fn test_read_lounges_with_whitespace() {
    let temp_file = write_temp_csv(
        "card,Lounge,Terminal,Airport,Image
  SBI Elite  ,  Encalm  , T1 ,  HYD  ,   ",
    );

    let lounges = read_lounges(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(lounges.len(), 1);

    // CSV reader should trim whitespace
    assert_eq!(lounges[0].card, "SBI Elite");
    assert_eq!(lounges[0].name, "Encalm");
    assert_eq!(lounges[0].terminal, "T1");
    assert_eq!(lounges[0].airport, "HYD");
    assert_eq!(lounges[0].image, None);
}

// Tests for parse_lounges function

#[test]
fn test_parse_lounges_without_image_column() {
    let lounges = parse_lounges(
        "card,Lounge,Terminal,Airport
Axis Magnus,Encalm Lounge,T3,DEL",
    )
    .unwrap();

    assert_eq!(
        lounges,
        vec![Lounge {
            card: "Axis Magnus".to_string(),
            name: "Encalm Lounge".to_string(),
            terminal: "T3".to_string(),
            airport: "DEL".to_string(),
            image: None,
        }]
    );
}

#[test]
fn test_parse_lounges_short_rows_fill_defaults() {
    let lounges = parse_lounges(
        "card,Lounge,Terminal,Airport,Image
Axis Magnus,Encalm Lounge",
    )
    .unwrap();

    assert_eq!(lounges.len(), 1);
    assert_eq!(lounges[0].name, "Encalm Lounge");
    assert_eq!(lounges[0].terminal, "");
    assert_eq!(lounges[0].airport, "");
    assert_eq!(lounges[0].image, None);
}

#[test]
fn test_parse_lounges_short_row_keeps_neighbours() {
    let lounges = parse_lounges(
        "card,Lounge,Terminal,Airport,Image
HDFC Regalia,Priority Pass,T3,DEL,
Axis Magnus
SBI Elite,Encalm Lounge,T1,HYD,",
    )
    .unwrap();

    assert_eq!(lounges.len(), 3);
    assert_eq!(lounges[1].card, "Axis Magnus");
    assert_eq!(lounges[1].name, "");
    assert_eq!(lounges[2].airport, "HYD");
}

#[test]
fn test_read_lounges_from_reader_non_utf8_row() {
    let mut bytes = b"card,Lounge,Terminal,Airport,Image\n".to_vec();
    bytes.extend_from_slice(b"HDFC Regalia,Priority Pass,T3,DEL,\n");
    bytes.extend_from_slice(b"Axis Magnus,Caf\xE9 Lounge,T2,BOM,\n");
    bytes.extend_from_slice(b"SBI Elite,Encalm Lounge,T1,HYD,\n");

    let lounges = read_lounges_from_reader(&bytes[..]).unwrap();

    assert_eq!(lounges.len(), 3);
    assert_eq!(lounges[0].card, "HDFC Regalia");
    assert_eq!(lounges[1].card, "Axis Magnus");
    assert_eq!(lounges[1].name, "Caf\u{FFFD} Lounge");
    assert_eq!(lounges[2].card, "SBI Elite");
}

#[test]
fn test_read_lounges_non_utf8_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"card,Lounge,Terminal,Airport,Image\nAxis Magnus,Caf\xE9,T2,BOM,\n")
        .unwrap();

    let lounges = read_lounges(temp_file.path().to_str().unwrap()).unwrap();

    assert_eq!(lounges.len(), 1);
    assert!(lounges[0].belongs_to("axis magnus"));
}

#[test]
fn test_parse_lounges_ignores_extra_columns() {
    let lounges = parse_lounges(
        "card,Lounge,Terminal,Airport,Image,Visits
Axis Magnus,Encalm Lounge,T3,DEL,,Unlimited",
    )
    .unwrap();

    assert_eq!(lounges.len(), 1);
    assert_eq!(lounges[0].airport, "DEL");
}

#[test]
fn test_parse_lounges_belongs_to_ignores_case() {
    let lounges = parse_lounges(
        "card,Lounge,Terminal,Airport,Image
HDFC Regalia,Priority Pass,T3,DEL,",
    )
    .unwrap();

    assert!(lounges[0].belongs_to("hdfc regalia"));
    assert!(lounges[0].belongs_to("HDFC Regalia"));
    assert!(!lounges[0].belongs_to("HDFC Regalia Gold"));
}
