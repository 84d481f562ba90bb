//! Anomalies command implementation

use anyhow::Result;
use cardstack::collections::{Anomalies, compare_and_find_anomalies};

pub fn run(reference: Vec<i64>, candidate: Vec<i64>, non_negative: bool) -> Result<()> {
    let anomalies = find(&reference, &candidate, non_negative);
    println!("{}", serde_json::to_string_pretty(&anomalies)?);
    Ok(())
}

fn find(reference: &[i64], candidate: &[i64], non_negative: bool) -> Anomalies {
    let anomalies = compare_and_find_anomalies(reference, candidate, |v| !non_negative || v >= 0);
    if !anomalies.is_empty() {
        log::info!("found {} anomalies", anomalies.total());
    }
    anomalies
}
