use crate::models::attendance::AttendanceRow;

/// Header row for CSV / JSON / XLSX output.
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "Name",
        "Major",
        "Stage",
        "Study",
        "Group",
        "Timestamp",
        "Attended",
    ]
}

/// Convert one join row into a record of cell strings, header order.
pub fn row_to_record(row: &AttendanceRow) -> Vec<String> {
    vec![
        row.name.clone(),
        row.major.clone(),
        row.stage.clone(),
        row.study.to_db_str().to_string(),
        row.group.clone(),
        row.timestamp.clone().unwrap_or_default(),
        row.attended_label().to_string(),
    ]
}
