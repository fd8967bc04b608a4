//! Writing a rendered report to the terminal or a pipe.

use std::io::{self, Write};

use chardiff::{DiffReport, Side};

use crate::cli::Format;

/// Write both sides of `report`, first text then second text, each followed
/// by a newline. HTML output wraps each side in its own `<div>`.
pub fn write_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    format: Format,
    stat: bool,
) -> io::Result<()> {
    match format {
        Format::Ansi => {
            writeln!(w, "{}", report.render_ansi(Side::Left))?;
            writeln!(w, "{}", report.render_ansi(Side::Right))?;
        }
        Format::Plain => {
            writeln!(w, "{}", report.render_plain(Side::Left))?;
            writeln!(w, "{}", report.render_plain(Side::Right))?;
        }
        Format::Html => {
            writeln!(w, r#"<div class="text1">{}</div>"#, report.render_html(Side::Left))?;
            writeln!(w, r#"<div class="text2">{}</div>"#, report.render_html(Side::Right))?;
        }
    }

    if stat {
        writeln!(w, "{}", report.stats())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chardiff::Unit;

    fn write(format: Format, stat: bool) -> String {
        let report = DiffReport::new("abc", "axc", Unit::CodeUnit);
        let mut out = Vec::new();
        write_report(&mut out, &report, format, stat).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain() {
        insta::assert_snapshot!(write(Format::Plain, false), @r"
        a[-b-]c
        a{+x+}c
        ");
    }

    #[test]
    fn plain_with_stat() {
        insta::assert_snapshot!(write(Format::Plain, true), @r"
        a[-b-]c
        a{+x+}c
        2 unchanged, 1 added, 1 removed
        ");
    }

    #[test]
    fn html() {
        insta::assert_snapshot!(write(Format::Html, false), @r#"
        <div class="text1"><span class="unchanged">a</span><span class="removed">b</span><span class="unchanged">c</span></div>
        <div class="text2"><span class="unchanged">a</span><span class="added">x</span><span class="unchanged">c</span></div>
        "#);
    }

    #[test]
    fn ansi_has_escapes() {
        let out = write(Format::Ansi, false);
        assert!(out.contains("\x1b["));
        assert_eq!(out.lines().count(), 2);
    }
}
