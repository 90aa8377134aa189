use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use container_iso::iso::aliases::names_for;
use container_iso::models::{SerialRecord, TypeRecord, Verdict};
use container_iso::IsoCode;

fn header() {
    println!(
        "\n {} v{}\n",
        "container-iso".bold(),
        env!("CARGO_PKG_VERSION")
    );
}

fn bold_header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

fn verdict_cell(verdict: &Verdict) -> Cell {
    let (text, color) = match verdict {
        Verdict::Pass => ("✓ pass", Color::Green),
        Verdict::Warn => ("⚠ warn", Color::Yellow),
        Verdict::Error => ("✗ error", Color::Red),
    };
    Cell::new(text)
        .fg(color)
        .set_alignment(CellAlignment::Center)
}

fn summary<'a>(verdicts: impl Iterator<Item = &'a Verdict>, quiet: bool) {
    let (mut pass, mut warn, mut error, mut total) = (0, 0, 0, 0);
    for v in verdicts {
        total += 1;
        match v {
            Verdict::Pass => pass += 1,
            Verdict::Warn => warn += 1,
            Verdict::Error => error += 1,
        }
    }

    if quiet {
        println!(
            "Total: {}  Pass: {}  Warn: {}  Error: {}",
            total,
            pass.to_string().green(),
            warn.to_string().yellow(),
            error.to_string().red(),
        );
        return;
    }

    println!(" ┌──────────────────────────────┐");
    println!(" │  {:<27} │", "SUMMARY".bold());
    println!(" │  {:<27} │", format!("Total   : {:>4}", total));
    println!(" │  {:<27} │", format!("{}  Pass : {:>4}", "✓".green(), pass));
    println!(" │  {:<27} │", format!("{}  Warn : {:>4}", "⚠".yellow(), warn));
    println!(" │  {:<27} │", format!("{}  Error: {:>4}", "✗".red(), error));
    println!(" └──────────────────────────────┘\n");
}

/// Render classified type designations.
pub fn render_types(records: &[TypeRecord], quiet: bool) {
    if quiet {
        summary(records.iter().map(|r| &r.verdict), true);
        return;
    }

    header();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(bold_header(&[
            "Input", "ISO", "Type", "TOS", "Full ISO", "High Cube", "L×W×H (mm)", "CBM",
            "Verdict",
        ]));

    for r in records {
        let (iso, label) = match r.iso_code {
            Some(code) => (Cell::new(code.code()).fg(Color::Cyan), code.label()),
            None => (Cell::new("—").fg(Color::DarkGrey), "unresolved"),
        };
        let (dims, cbm) = match &r.dimensions {
            Some(d) => (
                format!("{}×{}×{}", d.length_mm, d.width_mm, d.height_mm),
                d.cbm.to_string(),
            ),
            None => ("—".to_string(), "—".to_string()),
        };

        table.add_row(vec![
            Cell::new(&r.input),
            iso,
            Cell::new(label),
            Cell::new(&r.tos_code),
            Cell::new(&r.full_iso).add_attribute(Attribute::Bold),
            Cell::new(if r.high_cube { "yes" } else { "no" })
                .set_alignment(CellAlignment::Center),
            Cell::new(dims),
            Cell::new(cbm).set_alignment(CellAlignment::Right),
            verdict_cell(&r.verdict),
        ]);
    }

    println!("{}\n", table);
    summary(records.iter().map(|r| &r.verdict), false);
}

/// Render parsed serials.
pub fn render_serials(records: &[SerialRecord], quiet: bool) {
    if quiet {
        summary(records.iter().map(|r| &r.verdict), true);
        return;
    }

    header();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(bold_header(&[
            "Input", "Owner", "Category", "Serial", "Check", "Expected", "Verdict",
        ]));

    for r in records {
        let mut row = vec![Cell::new(&r.input)];
        match &r.parsed {
            Some(p) => {
                let check = Cell::new(p.check_digit).fg(if p.is_valid {
                    Color::Green
                } else {
                    Color::Red
                });
                row.extend([
                    Cell::new(&p.owner_code),
                    Cell::new(p.category_identifier),
                    Cell::new(&p.serial_number),
                    check,
                ]);
            }
            None => {
                row.push(Cell::new("not a container serial").fg(Color::DarkGrey));
                row.extend((0..3).map(|_| Cell::new("")));
            }
        }
        row.push(Cell::new(
            r.expected_check_digit
                .map_or_else(|| "—".to_string(), |d| d.to_string()),
        ));
        row.push(verdict_cell(&r.verdict));
        table.add_row(row);
    }

    println!("{}\n", table);
    summary(records.iter().map(|r| &r.verdict), false);
}

/// Render the code list with the names that map to each code.
pub fn render_codes() {
    header();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(bold_header(&["Code", "Type", "Names"]));

    for code in IsoCode::ALL {
        table.add_row(vec![
            Cell::new(code.code()).fg(Color::Cyan),
            Cell::new(code.label()),
            Cell::new(names_for(code).collect::<Vec<_>>().join(", ")),
        ]);
    }

    println!("{}", table);
}
