//! Plain-text formatting helpers for human-readable output.

/// Format an ASCII table.
///
/// Column names are upper-cased. Each column is as wide as its widest cell
/// (header included), columns are separated by four spaces, and trailing
/// whitespace is trimmed from data rows. With no rows only the header is
/// returned.
///
/// Every row must have the same length as `columns`.
pub fn format_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let columns: Vec<String> = columns.iter().map(|c| c.to_uppercase()).collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(c.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("    ")
    };

    let mut lines = vec![render(columns.as_slice())];
    lines.extend(rows.iter().map(|r| render(r.as_slice()).trim().to_string()));
    lines.join("\n")
}

/// Format items as a sorted bullet list, one `- item` per line.
pub fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    items.sort();
    items
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize an address to `scheme://host[:port]`.
///
/// An existing scheme and any path after the host are dropped; a bare
/// `host:port` is used as is.
pub fn normalize_address(addr: &str, scheme: &str) -> String {
    let host = match addr.split_once("://") {
        Some((_, rest)) => rest.split(['/', '?', '#']).next().unwrap_or(""),
        None => addr,
    };
    format!("{}://{}", scheme, host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_table_pads_to_widest_cell() {
        let table = format_table(&["name", "pid"], &[row(&["alpha", "1"]), row(&["b", "123456"])]);
        let expected = "NAME     PID   \nalpha    1\nb        123456";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_table_header_wider_than_cells() {
        let table = format_table(&["address", "pid"], &[row(&["a", "1"])]);
        assert_eq!(table, "ADDRESS    PID\na          1");
    }

    #[test]
    fn test_table_without_rows_is_header_only() {
        assert_eq!(format_table(&["a", "bb"], &[]), "A    BB");
    }

    #[test]
    fn test_table_trims_data_rows_only() {
        let table = format_table(&["n"], &[row(&["1"]), row(&["22"])]);
        assert_eq!(table, "N \n1\n22");
    }

    #[test]
    fn test_list_is_sorted() {
        assert_eq!(format_list(["b", "c", "a"]), "- a\n- b\n- c");
        assert_eq!(format_list(Vec::<String>::new()), "");
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("localhost:8080", "http"), "http://localhost:8080");
        assert_eq!(
            normalize_address("https://example.com:443/api/v1", "http"),
            "http://example.com:443"
        );
        assert_eq!(normalize_address("tcp://10.0.0.1:1", "grpc"), "grpc://10.0.0.1:1");
    }
}
