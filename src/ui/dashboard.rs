//! Incremental attendance dashboard: one row appended per accepted tap,
//! full clear notification on reset. The CLI stand-in for the treeview
//! a desktop front-end would keep in sync.

use crate::models::attendance::AttendanceEvent;

const COLUMNS: [(&str, usize); 7] = [
    ("Name", 24),
    ("Major", 16),
    ("Stage", 8),
    ("Study", 10),
    ("Group", 8),
    ("Timestamp", 20),
    ("Attended", 8),
];

pub struct Dashboard {
    header_printed: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            header_printed: false,
        }
    }

    fn print_header(&mut self) {
        if self.header_printed {
            return;
        }
        let mut line = String::new();
        for (header, width) in COLUMNS {
            line.push_str(&format!("{:<width$} ", header, width = width));
        }
        println!("{}", line.trim_end());
        println!("{}", "-".repeat(line.trim_end().len()));
        self.header_printed = true;
    }

    /// Append a row reflecting a newly recorded event.
    pub fn append(&mut self, event: &AttendanceEvent) {
        self.print_header();

        let ts = event.timestamp_str();
        let values = [
            event.name.as_str(),
            event.major.as_str(),
            event.stage.as_str(),
            event.study.to_db_str(),
            event.group.as_str(),
            ts.as_str(),
            "Yes",
        ];

        let mut line = String::new();
        for ((_, width), value) in COLUMNS.into_iter().zip(values) {
            line.push_str(&format!("{:<width$} ", value, width = width));
        }
        println!("{}", line.trim_end());
    }

    /// Full-clear notification: the next accepted tap reprints the header.
    pub fn clear(&mut self) {
        if self.header_printed {
            println!("--- dashboard cleared ---");
        }
        self.header_printed = false;
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
