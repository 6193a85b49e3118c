use crate::models::dataset::Dataset;

/// Distinct non-missing item names, ascending. Recomputed per request.
pub fn list_items(dataset: &Dataset) -> Vec<String> {
    let mut names: Vec<String> = dataset
        .rows
        .iter()
        .filter_map(|row| row.item_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}
