use comfy_table::{presets::UTF8_HORIZONTAL_ONLY, Attribute, Cell, ContentArrangement, Table};
use kernel::{Mode, ReportRow};

/// Builds console table of the report. Tiering reports get extra `Server` column.
#[must_use]
pub fn report_table(mode: Mode, rows: &[ReportRow]) -> Table {
    let mut header = vec!["#", "Size", "Volume Name", "UUID"];
    if mode == Mode::Tiering {
        header.push("Server");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120)
        .set_header(
            header
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for (i, r) in rows.iter().enumerate() {
        let mut cells = vec![
            Cell::new(i + 1),
            Cell::new(&r.size),
            Cell::new(&r.name),
            Cell::new(&r.id),
        ];
        if mode == Mode::Tiering {
            cells.push(Cell::new(r.server.as_deref().unwrap_or_default()));
        }
        table.add_row(cells);
    }
    table
}

pub fn print_table(mode: Mode, rows: &[ReportRow]) {
    println!("\n\nCloud Storage Size for {}:\n", mode.title());
    println!("{}", report_table(mode, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, id: &str, server: Option<&str>) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            id: id.to_string(),
            size: "1.0 GiB".to_string(),
            server: server.map(str::to_string),
            bucket: "bucket".to_string(),
        }
    }

    #[test]
    fn backup_table() {
        // Arrange
        let rows = vec![row("volA", "d1", None), row("volB", "d2", None)];

        // Act
        let table = report_table(Mode::Backup, &rows);

        // Assert
        let s = table.to_string();
        assert_eq!(table.row_iter().count(), 2);
        assert!(s.contains("volA"));
        assert!(s.contains("d2"));
        assert!(!s.contains("Server"));
    }

    #[test]
    fn tiering_table_has_server_column() {
        // Arrange
        let rows = vec![row("vol1", "b1", Some("svm_cluster1"))];

        // Act
        let table = report_table(Mode::Tiering, &rows);

        // Assert
        let s = table.to_string();
        assert!(s.contains("Server"));
        assert!(s.contains("svm_cluster1"));
    }

    #[test]
    fn empty_report_has_only_header() {
        // Arrange

        // Act
        let table = report_table(Mode::Backup, &[]);

        // Assert
        assert_eq!(table.row_iter().count(), 0);
        assert!(table.to_string().contains("Volume Name"));
    }
}
