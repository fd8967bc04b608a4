use chardiff::{DiffReport, Side, Unit};

fn main() {
    let report = DiffReport::new("The quick brown fox", "The quick red fox", Unit::default());

    println!("{}", report.render_ansi(Side::Left));
    println!("{}", report.render_ansi(Side::Right));
    println!("{}", report.stats());
}
