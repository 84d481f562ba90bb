//! Traverse command implementation

use anyhow::Result;
use cardstack::collections::{DirectionalView, ReverseIterable};

pub fn run(reverse: bool, items: Vec<String>) -> Result<()> {
    for item in &traverse(reverse, &items) {
        println!("{item}");
    }
    Ok(())
}

fn traverse(reverse: bool, items: &[String]) -> Vec<String> {
    let mut view = DirectionalView::new(items);
    if reverse {
        view.to_reverse_iterable();
    }
    log::debug!(
        "traversing {} items in {:?} direction",
        view.len(),
        view.direction()
    );
    view.iter().cloned().collect()
}
