// src/csv.rs
use std::io::{self, Write};

/// UTF-8 byte-order mark; spreadsheet apps need it to read CJK text correctly.
pub const UTF8_BOM: &str = "\u{feff}";

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// BOM + header + rows as one string.
pub fn to_export_string<H, S>(headers: &[H], rows: &[Vec<S>], sep: char) -> String
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(UTF8_BOM.as_bytes());

    // Writing into a Vec cannot fail.
    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
