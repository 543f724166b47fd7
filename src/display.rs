use crate::domain::model::{CensusRecord, Coordinates, KeyStats, SearchResult};
use crate::utils::error::DashboardError;
use comfy_table::{presets::NOTHING, Attribute, Cell, ContentArrangement, Table};

/// How many record fields are listed before the remainder is summarized.
const FIELD_LIST_CAP: usize = 20;

pub fn render(result: &SearchResult) {
    println!("\nZCTA {} demographic profile", result.zip);
    render_stats(&result.stats);
    render_map(&result.zip, result.coordinates);
    render_fields(&result.record);
}

pub fn render_error(error: &DashboardError) {
    eprintln!("❌ {}", error);
}

fn ruled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_style(comfy_table::TableComponent::BottomBorder, '─')
        .set_style(comfy_table::TableComponent::BottomBorderIntersections, '─')
        .set_style(comfy_table::TableComponent::MiddleHeaderIntersections, '─')
        .set_style(comfy_table::TableComponent::HeaderLines, '─')
        .set_style(comfy_table::TableComponent::TopBorder, '─')
        .set_style(comfy_table::TableComponent::TopBorderIntersections, '─');
    table
}

fn render_stats(stats: &KeyStats) {
    let mut table = ruled_table();
    table
        .set_header(vec![
            Cell::new("Population").add_attribute(Attribute::Bold),
            Cell::new("Households").add_attribute(Attribute::Bold),
            Cell::new("Avg household size").add_attribute(Attribute::Bold),
            Cell::new("Bachelor's or higher (%)").add_attribute(Attribute::Bold),
        ])
        .add_row(vec![
            stats.population.as_str(),
            stats.households.as_str(),
            stats.avg_household_size.as_str(),
            stats.bachelors_or_higher_pct.as_str(),
        ]);
    println!("\n{}", table);
}

fn render_map(zip: &str, coordinates: Coordinates) {
    let Coordinates {
        latitude,
        longitude,
    } = coordinates;
    println!("\nMap");
    println!("  📍 ZCTA {} @ ({:.4}, {:.4})", zip, latitude, longitude);
    println!(
        "  https://www.openstreetmap.org/?mlat={}&mlon={}#map=12/{}/{}",
        latitude, longitude, latitude, longitude
    );
}

fn render_fields(record: &CensusRecord) {
    let mut table = ruled_table();
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    for (key, value) in record.iter().take(FIELD_LIST_CAP) {
        table.add_row(vec![key, value]);
    }
    println!("\n{}", table);

    if record.len() > FIELD_LIST_CAP {
        println!("... and {} more fields", record.len() - FIELD_LIST_CAP);
    }
}
