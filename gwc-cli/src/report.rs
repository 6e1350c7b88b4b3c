//! Text report generation
//!
//! Renders a parsed dataset as one table per height.

use gwc_reader::GwcDataset;
use std::io::{self, Write};

/// Width of one direction sector in degrees (12 sectors)
const SECTOR_WIDTH_DEG: usize = 30;

/// Write the report for `dataset` to `out`
///
/// ```text
/// Height: 50 m
///     0° │ f=0.500, A=8.000, k=2.000
///    30° │ f=0.500, A=9.000, k=2.200
///
/// ```
pub fn write_dataset<W: Write>(out: &mut W, dataset: &GwcDataset) -> io::Result<()> {
    for (height, sectors) in dataset.iter() {
        log::debug!(
            "Height {} m: {} sectors, total frequency {:.3}",
            height,
            sectors.len(),
            dataset.total_frequency(height).unwrap_or_default()
        );

        writeln!(out, "Height: {} m", height)?;
        for (index, sector) in sectors.iter().enumerate() {
            let angle = index * SECTOR_WIDTH_DEG;
            writeln!(
                out,
                "  {:>3}° │ f={:.3}, A={:.3}, k={:.3}",
                angle, sector.frequency, sector.scale_a, sector.shape_k
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwc_reader::parse_gwc_str;

    fn render(content: &str) -> String {
        let dataset = parse_gwc_str(content).unwrap();
        let mut out = Vec::new();
        write_dataset(&mut out, &dataset).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_two_sector_report() {
        let text = render("site\nx 1 2\n0.0\n50.0\n0.5 0.5\n8.0\n2.0\n9.0\n2.2\n");

        assert_eq!(
            text,
            "Height: 50 m\n\
             \x20   0° │ f=0.500, A=8.000, k=2.000\n\
             \x20  30° │ f=0.500, A=9.000, k=2.200\n\
             \n"
        );
    }

    #[test]
    fn test_heights_follow_file_order() {
        let text = render("site\n0 2 1\n0.0\n100.0 10.0\n1.0\n9.5 6.25\n2.1 1.8\n");

        let headers: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("Height:"))
            .collect();
        assert_eq!(headers, vec!["Height: 100 m", "Height: 10 m"]);
        assert!(text.contains("    0° │ f=1.000, A=6.250, k=1.800"));
    }

    #[test]
    fn test_more_than_twelve_sectors_keeps_counting() {
        let mut content = String::from("site\n0 1 13\n0.0\n50.0\n\n");
        content.push_str(&"0.1 ".repeat(13));
        content.push('\n');
        for _ in 0..13 {
            content.push_str("7.0\n2.0\n");
        }

        let text = render(&content);
        assert!(text.contains("  330° │"));
        assert!(text.contains("  360° │"));
    }

    #[test]
    fn test_empty_dataset_writes_nothing() {
        let mut out = Vec::new();
        write_dataset(&mut out, &GwcDataset::default()).unwrap();
        assert!(out.is_empty());
    }
}
