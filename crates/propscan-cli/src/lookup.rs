//! Single-endpoint lookups: area summary, sale history, valuation history.

use propscan_scansan::{valuation_series, PostcodeKey, ScansanClient};

use crate::search::fmt_price;

fn postcode_key(code: &str, postal: bool) -> PostcodeKey {
    if postal {
        PostcodeKey::Postal(code.to_string())
    } else {
        PostcodeKey::AreaCode(code.to_string())
    }
}

fn print_payload(payload: Option<&serde_json::Value>) -> anyhow::Result<()> {
    match payload {
        Some(value) => println!("{}", serde_json::to_string_pretty(value)?),
        None => println!("no result"),
    }
    Ok(())
}

pub(crate) async fn run_summary(
    client: &ScansanClient,
    code: &str,
    district: Option<&str>,
) -> anyhow::Result<()> {
    print_payload(client.summary(code, district).await.as_ref())
}

pub(crate) async fn run_sales(
    client: &ScansanClient,
    code: &str,
    postal: bool,
) -> anyhow::Result<()> {
    print_payload(client.sale_history(&postcode_key(code, postal)).await.as_ref())
}

/// Prints the valuation history of one property, oldest first.
pub(crate) async fn run_history(
    client: &ScansanClient,
    code: &str,
    postal: bool,
    address: Option<&str>,
) -> anyhow::Result<()> {
    let Some(payload) = client
        .historical_valuations(&postcode_key(code, postal))
        .await
    else {
        println!("no result");
        return Ok(());
    };

    let series = valuation_series(&payload, address);
    if series.is_empty() {
        println!("no valuation history for {code}");
        return Ok(());
    }

    println!("{:<12}{:>14}", "DATE", "VALUATION");
    for point in &series {
        println!(
            "{:<12}{:>14}",
            point.date.format("%Y-%m-%d").to_string(),
            fmt_price(Some(point.price))
        );
    }
    Ok(())
}
