//! `search` command: validate, resolve, sort and print property records.

use std::io::IsTerminal;

use propscan_core::{
    sort_properties, validate_search_input, PropertyRecord, SearchRequest, SortOption,
    SustainabilityBand,
};
use propscan_scansan::ScansanClient;
use propscan_search::PropertyResolver;

/// Raw `search` arguments as typed on the command line.
#[derive(Debug)]
pub(crate) struct SearchArgs {
    pub(crate) area: String,
    pub(crate) query: String,
    pub(crate) district: String,
    pub(crate) street: String,
    pub(crate) sort: String,
    pub(crate) json: bool,
}

impl SearchArgs {
    fn request(&self) -> SearchRequest {
        SearchRequest::new(&self.area, &self.query).with_street(&self.district, &self.street)
    }
}

/// Checks the input and parses the sort label, without touching the network.
///
/// # Errors
///
/// Returns the validation message for rejected input, or an error for an
/// unknown sort label.
pub(crate) fn check_args(args: &SearchArgs) -> anyhow::Result<SortOption> {
    validate_search_input(&args.query, &args.district, &args.street)?;
    Ok(args.sort.parse()?)
}

/// Runs one search with input already accepted by [`check_args`].
///
/// # Errors
///
/// Returns an error only if JSON output cannot be rendered. Upstream
/// failures fall back to sample data.
pub(crate) async fn run_search(
    client: ScansanClient,
    args: &SearchArgs,
    sort: SortOption,
) -> anyhow::Result<()> {
    let resolver = PropertyResolver::new(client);
    let records = sort_properties(&resolver.search(&args.request()).await, sort);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("no properties found for {}", args.area);
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();
    println!(
        "{:<44}{:<20}{:>12}{:>12}  SUSTAINABILITY",
        "ADDRESS", "AREA", "PRICE", "LAST SOLD"
    );
    for record in &records {
        println!("{}", format_row(record, color));
    }
    println!("{} properties, sorted by {sort}", records.len());

    Ok(())
}

pub(crate) fn format_row(record: &PropertyRecord, color: bool) -> String {
    let address = if record.address.chars().count() > 42 {
        format!("{}...", record.address.chars().take(39).collect::<String>())
    } else {
        record.address.clone()
    };
    let band = record.sustainability_score.map_or_else(
        || "-".to_string(),
        |score| {
            let band = SustainabilityBand::from_score(score);
            let text = format!("{score} ({})", band.label());
            if color {
                paint(&text, band.color())
            } else {
                text
            }
        },
    );
    format!(
        "{:<44}{:<20}{:>12}{:>12}  {}",
        address,
        record.area,
        fmt_price(record.current_price),
        fmt_price(record.last_sold_price),
        band
    )
}

/// Wraps `text` in a 24-bit ANSI foreground colour given as `#rrggbb`.
/// Malformed colours leave the text unchanged.
pub(crate) fn paint(text: &str, hex: &str) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.strip_prefix('#')
            .and_then(|h| h.get(range))
            .and_then(|h| u8::from_str_radix(h, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        _ => text.to_string(),
    }
}

/// Formats a price as `£1,234,567`, or `-` when absent.
pub(crate) fn fmt_price(price: Option<i64>) -> String {
    let Some(price) = price else {
        return "-".to_string();
    };
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}\u{a3}{grouped}")
}
