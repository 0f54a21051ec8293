//! Feature transform: weather table to model input.

use boxcast_weather::WeatherTable;

/// Flatten a table's numeric values row-major into one ordered vector.
///
/// No validation or normalization is applied: an empty or short table
/// flattens to an empty or short vector, which the predictor rejects
/// against the artifact's declared input width. Ragged columns (a field
/// missing from the response) simply contribute nothing for the rows they
/// lack.
pub fn flatten(table: &WeatherTable) -> Vec<f64> {
    let mut features = Vec::with_capacity(table.columns().len() * table.num_rows());
    for row in 0..table.num_rows() {
        for column in table.columns() {
            if let Some(value) = column.values.get(row) {
                features.push(*value);
            }
        }
    }
    features
}
